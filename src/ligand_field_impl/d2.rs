//! d2 (e.g. V3+): triplet ground state 3T1 from the lower root of its 2x2 block
//!
//! The second singlet T2 term keeps the historical key `1_T_3`, matching the state
//! columns of existing Tanabe-Sugano diagram tables.

use super::table::{affine, ConfigurationTable, Coupling, GroundStatePolicy, TermSpec};
use crate::constants::{SQRT_6, TWO_SQRT_3};

pub(super) static D2: ConfigurationTable = ConfigurationTable {
    default_racah: (860.0, 3801.0),
    terms: &[
        TermSpec::block(
            "1_A_1",
            &[affine(-8.0, 10.0, 5.0), affine(12.0, 8.0, 4.0)],
            &[Coupling::bc(0, 1, SQRT_6, 2.0, 1.0)],
        ),
        TermSpec::block(
            "1_E",
            &[affine(-8.0, 1.0, 2.0), affine(12.0, 0.0, 2.0)],
            &[Coupling::b(0, 1, -TWO_SQRT_3)],
        ),
        TermSpec::block(
            "1_T_3",
            &[affine(-8.0, 1.0, 2.0), affine(2.0, 0.0, 2.0)],
            &[Coupling::b(0, 1, TWO_SQRT_3)],
        ),
        TermSpec::block(
            "3_T_1",
            &[affine(-8.0, -5.0, 0.0), affine(2.0, 4.0, 0.0)],
            &[Coupling::b(0, 1, 6.0)],
        ),
        TermSpec::singleton("1_T_1", affine(2.0, 4.0, 2.0)),
        TermSpec::singleton("3_T_2", affine(2.0, -8.0, 0.0)),
        TermSpec::singleton("3_A_2", affine(12.0, -8.0, 0.0)),
    ],
    ground_state: GroundStatePolicy::fixed("3_T_1"),
};
