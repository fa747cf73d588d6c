//! Batch evaluation over a (Dq, B, C) parameter grid

use crate::constants::PARAMETER_RANGE_LENGTH;
use crate::error::{LigandFieldError, Result};
use crate::ligand_field_impl::{DElectronCount, LigandField, PhysicalParameters, StateResult};
use crate::tools::linspace;
use itertools::iproduct;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

/// Evenly spaced values `[start, stop]` with `steps` points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub start: f64,
    pub stop: f64,
    pub steps: usize,
}

impl ParameterRange {
    pub fn new(start: f64, stop: f64, steps: usize) -> Self {
        ParameterRange { start, stop, steps }
    }

    /// Parse `[start, stop, steps]`; the step count is truncated toward zero.
    pub fn from_slice(name: &str, values: &[f64]) -> Result<Self> {
        if values.len() != PARAMETER_RANGE_LENGTH {
            return Err(LigandFieldError::InvalidRange {
                name: name.to_string(),
                len: values.len(),
            });
        }
        Ok(Self::new(values[0], values[1], values[2] as usize))
    }

    pub fn values(&self) -> Vec<f64> {
        linspace(self.start, self.stop, self.steps)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Batch {
    pub configuration: DElectronCount,
    pub dq: ParameterRange,
    /// Racah B, or Slater-Condon F2 (eV) when `slater` is set
    pub b: ParameterRange,
    /// Racah C, or Slater-Condon F4 (eV) when `slater` is set
    pub c: ParameterRange,
    pub slater: bool,
}

impl Default for Batch {
    fn default() -> Self {
        Batch {
            configuration: DElectronCount::D5,
            dq: ParameterRange::new(4000.0, 4500.0, 10),
            b: ParameterRange::new(400.0, 4500.0, 10),
            c: ParameterRange::new(3600.0, 4000.0, 10),
            slater: false,
        }
    }
}

impl Batch {
    /// Every grid point in Dq-major, then B, then C order.
    pub fn run(&self) -> Result<Vec<BatchRecord>> {
        let grid: Vec<(f64, f64, f64)> =
            iproduct!(self.dq.values(), self.b.values(), self.c.values()).collect();
        info!(
            "Batch over {} grid points for {} (slater = {})",
            grid.len(),
            self.configuration,
            self.slater
        );

        grid.par_iter()
            .map(|&(dq, b, c)| -> Result<BatchRecord> {
                let params = if self.slater {
                    PhysicalParameters::from_slater_condon(dq, b, c)?
                } else {
                    PhysicalParameters::new(dq, b, c)?
                };
                let states = LigandField::new(self.configuration, params).solver()?;
                Ok(BatchRecord {
                    d_count: self.configuration.into(),
                    dq,
                    b: params.b,
                    c: params.c,
                    states,
                })
            })
            .collect()
    }
}

/// Result of one grid point; `b` and `c` are always Racah parameters in cm-1
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRecord {
    pub d_count: u8,
    pub dq: f64,
    pub b: f64,
    pub c: f64,
    pub states: StateResult,
}

/// Flat `d_count,Dq,B,C,state,energy` line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    pub d_count: u8,
    #[serde(rename = "Dq")]
    pub dq: f64,
    #[serde(rename = "B")]
    pub b: f64,
    #[serde(rename = "C")]
    pub c: f64,
    pub state: String,
    pub energy: f64,
}

impl BatchRecord {
    /// One row per sub-split state
    pub fn rows(&self) -> Vec<BatchRow> {
        self.states
            .subsplit()
            .into_iter()
            .map(|(state, energy)| BatchRow {
                d_count: self.d_count,
                dq: self.dq,
                b: self.b,
                c: self.c,
                state,
                energy,
            })
            .collect()
    }
}
