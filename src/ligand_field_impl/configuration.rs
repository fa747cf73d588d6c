use super::d2::D2;
use super::d3::D3;
use super::d4::D4;
use super::d5::D5;
use super::d6::D6;
use super::d7::D7;
use super::d8::D8;
use super::table::ConfigurationTable;
use crate::error::{LigandFieldError, Result};
use std::fmt;

/// Number of d electrons of an octahedral transition-metal ion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DElectronCount {
    D2 = 2,
    D3 = 3,
    D4 = 4,
    D5 = 5,
    D6 = 6,
    D7 = 7,
    D8 = 8,
}

impl DElectronCount {
    pub const ALL: [DElectronCount; 7] = [
        DElectronCount::D2,
        DElectronCount::D3,
        DElectronCount::D4,
        DElectronCount::D5,
        DElectronCount::D6,
        DElectronCount::D7,
        DElectronCount::D8,
    ];

    /// Declarative Hamiltonian of this configuration
    pub fn table(self) -> &'static ConfigurationTable {
        match self {
            DElectronCount::D2 => &D2,
            DElectronCount::D3 => &D3,
            DElectronCount::D4 => &D4,
            DElectronCount::D5 => &D5,
            DElectronCount::D6 => &D6,
            DElectronCount::D7 => &D7,
            DElectronCount::D8 => &D8,
        }
    }

    /// Literature Racah `(B, C)` in cm-1
    pub fn default_racah(self) -> (f64, f64) {
        self.table().default_racah
    }

    pub fn term_count(self) -> usize {
        self.table().terms.len()
    }

    /// Total number of eigen-energies over all terms
    pub fn state_count(self) -> usize {
        self.table().state_count()
    }
}

impl TryFrom<u8> for DElectronCount {
    type Error = LigandFieldError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            2 => Ok(DElectronCount::D2),
            3 => Ok(DElectronCount::D3),
            4 => Ok(DElectronCount::D4),
            5 => Ok(DElectronCount::D5),
            6 => Ok(DElectronCount::D6),
            7 => Ok(DElectronCount::D7),
            8 => Ok(DElectronCount::D8),
            other => Err(LigandFieldError::InvalidConfiguration(other)),
        }
    }
}

impl From<DElectronCount> for u8 {
    fn from(value: DElectronCount) -> Self {
        value as u8
    }
}

impl fmt::Display for DElectronCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", *self as u8)
    }
}
