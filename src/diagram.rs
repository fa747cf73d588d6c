//! Tanabe-Sugano and energy-correlation diagrams
//!
//! A [`DiagramSweep`] evaluates one configuration on an evenly spaced Dq axis and keeps
//! one column per sub-split state, which is what both diagram flavours plot: raw energies
//! against 10Dq (energy correlation) and `E/B` against `Δ/B` (Tanabe-Sugano).
//! [`energy_cut`] lists the spectrum at a single 10Dq value.

use crate::constants::WAVENUMBER_TO_EV;
use crate::error::{LigandFieldError, Result};
use crate::ligand_field_impl::{DElectronCount, LigandField, PhysicalParameters, StateResult};
use crate::tools::linspace;
use rayon::prelude::*;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramSweep {
    pub configuration: DElectronCount,
    /// Upper end of the 10Dq axis (cm-1); the axis always starts at zero
    pub ten_dq_max: f64,
    pub b: f64,
    pub c: f64,
    /// Number of Dq points including both ends
    pub roots: usize,
}

impl DiagramSweep {
    pub fn new(configuration: DElectronCount, ten_dq_max: f64, b: f64, c: f64, roots: usize) -> Self {
        DiagramSweep {
            configuration,
            ten_dq_max,
            b,
            c,
            roots,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.roots < 2 {
            return Err(LigandFieldError::InvalidSweep(format!(
                "at least two roots are needed, got {}",
                self.roots
            )));
        }
        if !self.ten_dq_max.is_finite() || self.ten_dq_max < 0.0 {
            return Err(LigandFieldError::InvalidSweep(format!(
                "10Dq maximum must be finite and non-negative, got {}",
                self.ten_dq_max
            )));
        }
        PhysicalParameters::new(0.0, self.b, self.c)?;
        if self.b == 0.0 {
            return Err(LigandFieldError::InvalidSweep(
                "Racah B must be positive to scale the diagram by B".to_string(),
            ));
        }
        Ok(())
    }

    /// Evaluate every Dq point in parallel; the first failing point aborts the sweep.
    pub fn run(&self) -> Result<Diagram> {
        self.validate()?;
        info!(
            "Sweeping {} over 10Dq = 0..{} cm-1 ({} roots, B = {}, C = {})",
            self.configuration, self.ten_dq_max, self.roots, self.b, self.c
        );

        let dq = linspace(0.0, self.ten_dq_max / 10.0, self.roots);
        let results: Vec<StateResult> = dq
            .par_iter()
            .map(|&dq| -> Result<StateResult> {
                let params = PhysicalParameters::new(dq, self.b, self.c)?;
                LigandField::new(self.configuration, params).solver()
            })
            .collect::<Result<Vec<_>>>()?;

        let labels: Vec<String> = results[0]
            .subsplit()
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        let mut columns = vec![Vec::with_capacity(dq.len()); labels.len()];
        for result in &results {
            for (column, (_, energy)) in columns.iter_mut().zip(result.subsplit()) {
                column.push(energy);
            }
        }

        let crossings = results
            .windows(2)
            .filter(|pair| pair[0].ground_state() != pair[1].ground_state())
            .count();
        debug!(
            "{}: {} states per point, {} ground-state changes along the axis",
            self.configuration,
            labels.len(),
            crossings
        );

        Ok(Diagram {
            configuration: self.configuration,
            b: self.b,
            c: self.c,
            dq,
            labels,
            columns,
        })
    }
}

/// Sub-split state energies along the Dq axis
///
/// The Tanabe-Sugano abscissa is `Δ/B` with `Δ = 10Dq`. Older diagram tables write `Dq/B`
/// in their `delta_B` column, a factor of ten below the values produced here.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    configuration: DElectronCount,
    b: f64,
    c: f64,
    dq: Vec<f64>,
    labels: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl Diagram {
    pub fn configuration(&self) -> DElectronCount {
        self.configuration
    }

    pub fn racah(&self) -> (f64, f64) {
        (self.b, self.c)
    }

    pub fn dq(&self) -> &[f64] {
        &self.dq
    }

    /// Number of points on the axis
    pub fn len(&self) -> usize {
        self.dq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dq.is_empty()
    }

    /// Column names, `"{label}_{i}"` for multi-valued terms
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn ten_dq(&self) -> Vec<f64> {
        self.dq.iter().map(|dq| dq * 10.0).collect()
    }

    /// `Δ/B` axis with `Δ = 10Dq`, not `Dq/B`
    pub fn delta_over_b(&self) -> Vec<f64> {
        self.dq.iter().map(|dq| dq * 10.0 / self.b).collect()
    }

    /// Energies in cm-1, one column per state
    pub fn correlation_columns(&self) -> &[Vec<f64>] {
        &self.columns
    }

    /// Energies divided by B, one column per state
    pub fn tanabe_sugano_columns(&self) -> Vec<Vec<f64>> {
        self.columns
            .iter()
            .map(|column| column.iter().map(|energy| energy / self.b).collect())
            .collect()
    }
}

/// One line of the energy-cut table
#[derive(Debug, Clone, PartialEq)]
pub struct CutRow {
    pub state: String,
    /// cm-1, rounded half to even
    pub wavenumber: i64,
    /// eV, rounded half to even to four decimals
    pub ev: f64,
}

/// All states of `configuration` at `10Dq = ten_dq`, sorted by energy.
///
/// Rows carry the term label (not the sub-split name); equal energies are ordered by
/// label and then by wavenumber.
pub fn energy_cut(configuration: DElectronCount, ten_dq: f64, b: f64, c: f64) -> Result<Vec<CutRow>> {
    let params = PhysicalParameters::new(ten_dq / 10.0, b, c)?;
    let result = LigandField::new(configuration, params).solver()?;

    let mut rows: Vec<CutRow> = result
        .iter()
        .flat_map(|(label, energies)| {
            energies.iter().map(move |&energy| CutRow {
                state: label.to_string(),
                wavenumber: energy.round_ties_even() as i64,
                ev: (energy * WAVENUMBER_TO_EV * 1e4).round_ties_even() / 1e4,
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        a.ev
            .total_cmp(&b.ev)
            .then_with(|| a.state.cmp(&b.state))
            .then_with(|| a.wavenumber.cmp(&b.wavenumber))
    });
    Ok(rows)
}
