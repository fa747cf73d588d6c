//! d7 (e.g. Co2+): quartet 4T1 ground state until the low-spin 2E crosses below it

use super::table::{affine, ConfigurationTable, Coupling, GroundStatePolicy, TermSpec};
use crate::constants::{SQRT_2, SQRT_3, THREE_SQRT_2, THREE_SQRT_3, TWO_SQRT_3};

pub(super) static D7: ConfigurationTable = ConfigurationTable {
    default_racah: (971.0, 4499.0),
    terms: &[
        TermSpec::block(
            "2_T_2",
            &[
                affine(12.0, 0.0, 5.0),
                affine(2.0, -6.0, 3.0),
                affine(2.0, 4.0, 3.0),
                affine(-8.0, 6.0, 5.0),
                affine(-8.0, -2.0, 3.0),
            ],
            &[
                Coupling::b(0, 1, -THREE_SQRT_3),
                Coupling::b(0, 2, -5.0 * SQRT_3),
                Coupling::bc(0, 3, 1.0, 4.0, 2.0),
                Coupling::b(0, 4, 2.0),
                Coupling::b(1, 2, 3.0),
                Coupling::b(1, 3, -THREE_SQRT_3),
                Coupling::b(1, 4, -THREE_SQRT_3),
                Coupling::b(2, 3, -SQRT_3),
                Coupling::b(2, 4, SQRT_3),
                Coupling::b(3, 4, 10.0),
            ],
        ),
        TermSpec::block(
            "2_T_1",
            &[
                affine(12.0, -6.0, 3.0),
                affine(2.0, 0.0, 3.0),
                affine(2.0, -6.0, 3.0),
                affine(-8.0, -6.0, 3.0),
                affine(-8.0, -2.0, 3.0),
            ],
            &[
                Coupling::b(0, 1, -3.0),
                Coupling::b(0, 2, 3.0),
                Coupling::b(0, 4, -TWO_SQRT_3),
                Coupling::b(1, 2, -3.0),
                Coupling::b(1, 3, 3.0),
                Coupling::b(1, 4, THREE_SQRT_3),
                Coupling::b(2, 3, -3.0),
                Coupling::b(2, 4, -SQRT_3),
                Coupling::b(3, 4, TWO_SQRT_3),
            ],
        ),
        TermSpec::block(
            "2_E",
            &[
                affine(12.0, -6.0, 3.0),
                affine(2.0, 8.0, 6.0),
                affine(2.0, -1.0, 3.0),
                affine(-18.0, -8.0, 4.0),
            ],
            &[
                Coupling::b(0, 1, -6.0 * SQRT_2),
                Coupling::b(0, 2, -THREE_SQRT_2),
                Coupling::b(1, 2, 10.0),
                Coupling::bc(1, 3, SQRT_3, 2.0, 1.0),
                Coupling::b(2, 3, TWO_SQRT_3),
            ],
        ),
        TermSpec::block(
            "4_T_1",
            &[affine(2.0, -3.0, 0.0), affine(-8.0, -12.0, 0.0)],
            &[Coupling::b(0, 1, 6.0)],
        ),
        TermSpec::singleton("4_A_2", affine(12.0, -15.0, 0.0)),
        TermSpec::singleton("4_T_2", affine(2.0, -15.0, 0.0)),
        TermSpec::singleton("2_A_1", affine(2.0, -11.0, 3.0)),
        TermSpec::singleton("2_A_2", affine(2.0, 9.0, 3.0)),
    ],
    ground_state: GroundStatePolicy::with_crossing("4_T_1", "2_E", 0.0),
};
