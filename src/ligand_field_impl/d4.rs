//! d4 (e.g. Cr2+, Mn3+): high-spin 5E ground state until the low-spin 3T1 crosses below it

use super::table::{affine, ConfigurationTable, Coupling, GroundStatePolicy, TermSpec};
use crate::constants::{SQRT_2, SQRT_3, SQRT_6, THREE_SQRT_2, THREE_SQRT_6, TWO_SQRT_2};

pub(super) static D4: ConfigurationTable = ConfigurationTable {
    default_racah: (965.0, 4449.0),
    terms: &[
        TermSpec::block(
            "3_T_1",
            &[
                affine(-16.0, -15.0, 5.0),
                affine(-6.0, -11.0, 4.0),
                affine(-6.0, -3.0, 6.0),
                affine(4.0, -1.0, 6.0),
                affine(4.0, -9.0, 4.0),
                affine(4.0, -11.0, 4.0),
                affine(14.0, -16.0, 5.0),
            ],
            &[
                Coupling::b(0, 1, -SQRT_6),
                Coupling::b(0, 2, -THREE_SQRT_2),
                Coupling::bc(0, 3, SQRT_2, 2.0, 1.0),
                Coupling::b(0, 4, -TWO_SQRT_2),
                Coupling::b(1, 2, 5.0 * SQRT_3),
                Coupling::b(1, 3, SQRT_3),
                Coupling::b(1, 4, -SQRT_3),
                Coupling::b(1, 5, 3.0),
                Coupling::b(1, 6, SQRT_6),
                Coupling::b(2, 3, -3.0),
                Coupling::b(2, 4, -3.0),
                Coupling::b(2, 5, 5.0 * SQRT_3),
                Coupling::bc(2, 6, SQRT_2, 1.0, 1.0),
                Coupling::b(3, 4, -10.0),
                Coupling::b(3, 6, THREE_SQRT_2),
                Coupling::b(4, 5, -2.0 * SQRT_3),
                Coupling::b(4, 6, -THREE_SQRT_2),
                Coupling::b(5, 6, SQRT_6),
            ],
        ),
        TermSpec::block(
            "1_T_2",
            &[
                affine(-16.0, -9.0, 7.0),
                affine(-6.0, -9.0, 6.0),
                affine(-6.0, 3.0, 8.0),
                affine(4.0, -9.0, 6.0),
                affine(4.0, -3.0, 6.0),
                affine(4.0, 5.0, 8.0),
                affine(14.0, 0.0, 7.0),
            ],
            &[
                Coupling::b(0, 1, THREE_SQRT_2),
                Coupling::b(0, 2, -5.0 * SQRT_6),
                Coupling::b(0, 4, -TWO_SQRT_2),
                Coupling::bc(0, 5, SQRT_2, 2.0, 1.0),
                Coupling::b(1, 2, -5.0 * SQRT_3),
                Coupling::b(1, 3, 3.0),
                Coupling::b(1, 4, -3.0),
                Coupling::b(1, 5, -3.0),
                Coupling::b(1, 6, -SQRT_6),
                Coupling::b(2, 3, -3.0 * SQRT_3),
                Coupling::b(2, 4, 5.0 * SQRT_3),
                Coupling::b(2, 5, -5.0 * SQRT_3),
                Coupling::bc(2, 6, SQRT_2, 3.0, 1.0),
                Coupling::b(3, 4, -6.0),
                Coupling::b(3, 6, -THREE_SQRT_6),
                Coupling::b(4, 5, -10.0),
                Coupling::b(4, 6, SQRT_6),
                Coupling::b(5, 6, SQRT_6),
            ],
        ),
        TermSpec::block(
            "1_A_1",
            &[
                affine(-16.0, 0.0, 10.0),
                affine(-6.0, 0.0, 6.0),
                affine(4.0, 14.0, 11.0),
                affine(4.0, -3.0, 6.0),
                affine(24.0, -16.0, 8.0),
            ],
            &[
                Coupling::b(0, 1, -12.0 * SQRT_2),
                Coupling::bc(0, 2, SQRT_2, 4.0, 2.0),
                Coupling::b(0, 3, TWO_SQRT_2),
                Coupling::b(1, 2, -12.0),
                Coupling::b(1, 3, -6.0),
                Coupling::b(2, 3, 20.0),
                Coupling::bc(2, 4, SQRT_6, 2.0, 1.0),
                Coupling::b(3, 4, 2.0 * SQRT_6),
            ],
        ),
        TermSpec::block(
            "1_E_1",
            &[
                affine(-16.0, -9.0, 7.0),
                affine(-6.0, -6.0, 6.0),
                affine(4.0, 5.0, 8.0),
                affine(4.0, 6.0, 9.0),
                affine(4.0, -3.0, 6.0),
            ],
            &[
                Coupling::b(0, 1, 6.0),
                Coupling::bc(0, 2, SQRT_2, 2.0, 1.0),
                Coupling::b(0, 3, -2.0),
                Coupling::b(0, 4, -4.0),
                Coupling::b(1, 2, -THREE_SQRT_2),
                Coupling::b(1, 3, -12.0),
                Coupling::b(2, 3, 10.0 * SQRT_2),
                Coupling::b(2, 4, -10.0 * SQRT_2),
            ],
        ),
        TermSpec::block(
            "3_T_2",
            &[
                affine(-6.0, -9.0, 4.0),
                affine(-6.0, -5.0, 6.0),
                affine(4.0, -13.0, 4.0),
                affine(4.0, -9.0, 4.0),
                affine(14.0, -8.0, 5.0),
            ],
            &[
                Coupling::b(0, 1, -5.0 * SQRT_3),
                Coupling::b(0, 2, SQRT_6),
                Coupling::b(0, 3, SQRT_3),
                Coupling::b(0, 4, -SQRT_6),
                Coupling::b(1, 2, -THREE_SQRT_2),
                Coupling::b(1, 3, 3.0),
                Coupling::bc(1, 4, SQRT_2, 3.0, 1.0),
                Coupling::b(2, 3, -2.0 * SQRT_2),
                Coupling::b(2, 4, -6.0),
                Coupling::b(3, 4, THREE_SQRT_2),
            ],
        ),
        TermSpec::block(
            "1_T_1",
            &[
                affine(-6.0, -3.0, 6.0),
                affine(-6.0, -3.0, 8.0),
                affine(4.0, -3.0, 6.0),
                affine(14.0, -16.0, 7.0),
            ],
            &[
                Coupling::b(0, 1, 5.0 * SQRT_3),
                Coupling::b(0, 2, 3.0),
                Coupling::b(0, 3, SQRT_6),
                Coupling::b(1, 2, -5.0 * SQRT_3),
                Coupling::bc(1, 3, SQRT_2, 1.0, 1.0),
                Coupling::b(2, 3, -SQRT_6),
            ],
        ),
        TermSpec::block(
            "3_E_1",
            &[
                affine(-6.0, -13.0, 4.0),
                affine(-6.0, -10.0, 4.0),
                affine(4.0, -11.0, 4.0),
            ],
            &[Coupling::b(0, 1, -4.0), Coupling::b(1, 2, -THREE_SQRT_2)],
        ),
        TermSpec::block(
            "3_A_2",
            &[affine(-6.0, -8.0, 4.0), affine(4.0, -2.0, 7.0)],
            &[Coupling::b(0, 1, -12.0)],
        ),
        TermSpec::block(
            "1_A_2",
            &[affine(-6.0, -12.0, 6.0), affine(4.0, -3.0, 6.0)],
            &[Coupling::b(0, 1, 6.0)],
        ),
        TermSpec::singleton("5_E_1", affine(-6.0, -21.0, 0.0)),
        TermSpec::singleton("5_T_2", affine(4.0, -21.0, 0.0)),
        TermSpec::singleton("3_A_1", affine(-6.0, -12.0, 4.0)),
    ],
    ground_state: GroundStatePolicy::with_crossing("5_E_1", "3_T_1", 0.0),
};
