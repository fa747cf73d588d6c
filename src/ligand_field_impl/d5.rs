//! d5 (e.g. Mn2+, Fe3+): sextet 6A1 ground state until the low-spin 2T2 crosses below it

use super::table::{affine, ConfigurationTable, Coupling, GroundStatePolicy, TermSpec};
use crate::constants::{SQRT_2, SQRT_3, SQRT_6, THREE_SQRT_2, THREE_SQRT_6};

pub(super) static D5: ConfigurationTable = ConfigurationTable {
    default_racah: (860.0, 3850.0),
    terms: &[
        TermSpec::block(
            "2_T_2",
            &[
                affine(-20.0, -20.0, 10.0),
                affine(-10.0, -8.0, 9.0),
                affine(-10.0, -18.0, 9.0),
                affine(0.0, -16.0, 8.0),
                affine(0.0, -12.0, 8.0),
                affine(0.0, 2.0, 12.0),
                affine(0.0, -6.0, 10.0),
                affine(10.0, -18.0, 9.0),
                affine(10.0, -8.0, 9.0),
                affine(20.0, -20.0, 10.0),
            ],
            &[
                Coupling::b(0, 1, THREE_SQRT_6),
                Coupling::b(0, 2, SQRT_6),
                Coupling::b(0, 4, -2.0 * SQRT_3),
                Coupling::bc(0, 5, 1.0, 4.0, 2.0),
                Coupling::b(0, 6, 2.0),
                Coupling::b(1, 2, 3.0),
                Coupling::b(1, 3, SQRT_6 / 2.0),
                Coupling::b(1, 4, -THREE_SQRT_2 / 2.0),
                Coupling::b(1, 5, THREE_SQRT_6 / 2.0),
                Coupling::b(1, 6, THREE_SQRT_6 / 2.0),
                Coupling::bc(1, 8, 1.0, 4.0, 1.0),
                Coupling::b(2, 3, THREE_SQRT_6 / 2.0),
                Coupling::b(2, 4, -THREE_SQRT_2 / 2.0),
                Coupling::b(2, 5, 5.0 * SQRT_6 / 2.0),
                Coupling::b(2, 6, -5.0 * SQRT_6 / 2.0),
                Coupling::bc(2, 7, 1.0, 0.0, 1.0),
                Coupling::b(3, 4, 2.0 * SQRT_3),
                Coupling::b(3, 7, -THREE_SQRT_6 / 2.0),
                Coupling::b(3, 8, -SQRT_6 / 2.0),
                Coupling::b(4, 5, -10.0 * SQRT_3),
                Coupling::b(4, 7, THREE_SQRT_2 / 2.0),
                Coupling::b(4, 8, THREE_SQRT_2 / 2.0),
                Coupling::b(4, 9, -2.0 * SQRT_3),
                Coupling::b(5, 7, -5.0 * SQRT_6 / 2.0),
                Coupling::b(5, 8, -THREE_SQRT_6 / 2.0),
                Coupling::bc(5, 9, 1.0, 4.0, 2.0),
                Coupling::b(6, 7, -5.0 * SQRT_6 / 2.0),
                Coupling::b(6, 8, THREE_SQRT_6 / 2.0),
                Coupling::b(6, 9, -2.0),
                Coupling::b(7, 8, 3.0),
                Coupling::b(7, 9, -SQRT_6),
                Coupling::b(8, 9, -THREE_SQRT_6),
            ],
        ),
        TermSpec::block(
            "2_T_1",
            &[
                affine(-10.0, -22.0, 9.0),
                affine(-10.0, -8.0, 9.0),
                affine(0.0, -4.0, 10.0),
                affine(0.0, -12.0, 8.0),
                affine(0.0, -10.0, 10.0),
                affine(0.0, -6.0, 10.0),
                affine(10.0, -8.0, 9.0),
                affine(10.0, -22.0, 9.0),
            ],
            &[
                Coupling::b(0, 1, -3.0),
                Coupling::b(0, 2, -THREE_SQRT_2 / 2.0),
                Coupling::b(0, 3, THREE_SQRT_2 / 2.0),
                Coupling::b(0, 4, -THREE_SQRT_2 / 2.0),
                Coupling::b(0, 5, -THREE_SQRT_6 / 2.0),
                Coupling::bc(0, 7, 1.0, 0.0, 1.0),
                Coupling::b(1, 2, THREE_SQRT_2 / 2.0),
                Coupling::b(1, 3, THREE_SQRT_2 / 2.0),
                Coupling::b(1, 4, 15.0 * SQRT_2 / 2.0),
                Coupling::b(1, 5, 5.0 * SQRT_6 / 2.0),
                Coupling::bc(1, 6, 1.0, 4.0, 1.0),
                Coupling::b(2, 5, 10.0 * SQRT_3),
                Coupling::b(2, 6, THREE_SQRT_2 / 2.0),
                Coupling::b(2, 7, -THREE_SQRT_2 / 2.0),
                Coupling::b(3, 6, -THREE_SQRT_2 / 2.0),
                Coupling::b(3, 7, -THREE_SQRT_2 / 2.0),
                Coupling::b(4, 5, 2.0 * SQRT_3),
                Coupling::b(4, 6, 15.0 * SQRT_2 / 2.0),
                Coupling::b(4, 7, -THREE_SQRT_2 / 2.0),
                Coupling::b(5, 6, 5.0 * SQRT_6 / 2.0),
                Coupling::b(5, 7, -THREE_SQRT_6 / 2.0),
                Coupling::b(6, 7, -3.0),
            ],
        ),
        TermSpec::block(
            "2_E",
            &[
                affine(-10.0, -4.0, 12.0),
                affine(-10.0, -13.0, 9.0),
                affine(0.0, -4.0, 10.0),
                affine(0.0, -16.0, 8.0),
                affine(0.0, -12.0, 8.0),
                affine(10.0, -13.0, 9.0),
                affine(10.0, -4.0, 12.0),
            ],
            &[
                Coupling::b(0, 1, 10.0),
                Coupling::b(0, 2, 6.0),
                Coupling::b(0, 3, 6.0 * SQRT_3),
                Coupling::b(0, 4, 6.0 * SQRT_2),
                Coupling::b(0, 5, -2.0),
                Coupling::bc(0, 6, 1.0, 4.0, 2.0),
                Coupling::b(1, 2, -3.0),
                Coupling::b(1, 3, 3.0 * SQRT_3),
                Coupling::bc(1, 5, 1.0, 2.0, 1.0),
                Coupling::b(1, 6, 2.0),
                Coupling::b(2, 5, -3.0),
                Coupling::b(2, 6, -6.0),
                Coupling::b(3, 4, 2.0 * SQRT_6),
                Coupling::b(3, 5, -3.0 * SQRT_3),
                Coupling::b(3, 6, 6.0 * SQRT_3),
                Coupling::b(4, 6, 6.0 * SQRT_2),
                Coupling::b(5, 6, -10.0),
            ],
        ),
        TermSpec::block(
            "2_A_1",
            &[
                affine(-10.0, -3.0, 9.0),
                affine(0.0, -12.0, 8.0),
                affine(0.0, -19.0, 8.0),
                affine(10.0, -3.0, 9.0),
            ],
            &[
                Coupling::b(0, 1, -THREE_SQRT_2),
                Coupling::bc(0, 3, 1.0, 6.0, 1.0),
                Coupling::b(1, 2, -4.0 * SQRT_3),
                Coupling::b(1, 3, THREE_SQRT_2),
            ],
        ),
        TermSpec::block(
            "2_A_2",
            &[
                affine(-10.0, -23.0, 9.0),
                affine(0.0, -12.0, 8.0),
                affine(10.0, -23.0, 9.0),
            ],
            &[
                Coupling::b(0, 1, THREE_SQRT_2),
                Coupling::bc(0, 2, 1.0, -2.0, 1.0),
                Coupling::b(1, 2, -THREE_SQRT_2),
            ],
        ),
        TermSpec::block(
            "4_T_1",
            &[
                affine(-10.0, -25.0, 6.0),
                affine(0.0, -16.0, 7.0),
                affine(10.0, -25.0, 6.0),
            ],
            &[
                Coupling::b(0, 1, -THREE_SQRT_2),
                Coupling::bc(0, 2, 1.0, 0.0, 1.0),
                Coupling::b(1, 2, -THREE_SQRT_2),
            ],
        ),
        TermSpec::block(
            "4_T_2",
            &[
                affine(-10.0, -17.0, 6.0),
                affine(0.0, -22.0, 5.0),
                affine(10.0, -17.0, 6.0),
            ],
            &[
                Coupling::b(0, 1, SQRT_6),
                Coupling::bc(0, 2, 1.0, 4.0, 1.0),
                Coupling::b(1, 2, -SQRT_6),
            ],
        ),
        TermSpec::block(
            "4_E",
            &[affine(0.0, -22.0, 5.0), affine(0.0, -21.0, 5.0)],
            &[Coupling::b(0, 1, -2.0 * SQRT_3)],
        ),
        TermSpec::singleton("6_A_1", affine(0.0, -35.0, 0.0)),
        TermSpec::singleton("4_A_1", affine(0.0, -25.0, 5.0)),
        TermSpec::singleton("4_A_2", affine(0.0, -13.0, 7.0)),
    ],
    ground_state: GroundStatePolicy::with_crossing("6_A_1", "2_T_2", 0.0),
};
