//! Configuration management for diagram runs
//!
//! Values come from three layers: the built-in defaults below, an optional YAML file
//! and the command line, with later layers overriding earlier ones.

mod args;

pub use args::Args;

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    pub d_count: Option<u8>,
    /// Upper end of the 10Dq axis (cm-1)
    pub ten_dq: Option<f64>,
    /// 10Dq of the energy cut (cm-1)
    pub cut: Option<f64>,
    pub racah: Option<RacahParams>,
    pub diagram: Option<DiagramParams>,
    pub batch: Option<BatchParams>,
    pub output_dir: Option<String>,
    pub threads: Option<usize>,
}

/// Electron-repulsion parameters
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RacahParams {
    pub b: Option<f64>,
    pub c: Option<f64>,
    /// Nephelauxetic reduction applied to B
    pub b_scale: Option<f64>,
    /// Nephelauxetic reduction applied to C
    pub c_scale: Option<f64>,
    /// Read `b` and `c` as Slater-Condon F2 and F4 in eV
    pub slater: Option<bool>,
}

impl Default for RacahParams {
    fn default() -> Self {
        RacahParams {
            b: Some(1080.0),
            c: Some(4773.0),
            b_scale: Some(1.0),
            c_scale: Some(1.0),
            slater: Some(false),
        }
    }
}

impl RacahParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.b.is_none() {
            self.b = defaults.b;
        }
        if self.c.is_none() {
            self.c = defaults.c;
        }
        if self.b_scale.is_none() {
            self.b_scale = defaults.b_scale;
        }
        if self.c_scale.is_none() {
            self.c_scale = defaults.c_scale;
        }
        if self.slater.is_none() {
            self.slater = defaults.slater;
        }
        self
    }
}

/// Diagram sweep parameters
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DiagramParams {
    pub roots: Option<usize>,
    /// Write the TS-diagram and DD-energies CSV files
    pub save_txt: Option<bool>,
}

impl Default for DiagramParams {
    fn default() -> Self {
        DiagramParams {
            roots: Some(500),
            save_txt: Some(true),
        }
    }
}

impl DiagramParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.roots.is_none() {
            self.roots = defaults.roots;
        }
        if self.save_txt.is_none() {
            self.save_txt = defaults.save_txt;
        }
        self
    }
}

/// Parameter-grid batch; every range is `[start, stop, steps]`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BatchParams {
    pub enabled: Option<bool>,
    pub dq: Option<Vec<f64>>,
    pub b: Option<Vec<f64>>,
    pub c: Option<Vec<f64>>,
}

impl Default for BatchParams {
    fn default() -> Self {
        BatchParams {
            enabled: Some(false),
            dq: Some(vec![4000.0, 4500.0, 10.0]),
            b: Some(vec![400.0, 4500.0, 10.0]),
            c: Some(vec![3600.0, 4000.0, 10.0]),
        }
    }
}

impl BatchParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.enabled.is_none() {
            self.enabled = defaults.enabled;
        }
        if self.dq.is_none() {
            self.dq = defaults.dq;
        }
        if self.b.is_none() {
            self.b = defaults.b;
        }
        if self.c.is_none() {
            self.c = defaults.c;
        }
        self
    }
}

impl Config {
    /// Fill every missing value, including whole sections
    pub fn with_defaults(mut self) -> Self {
        if self.d_count.is_none() {
            self.d_count = Some(6);
        }
        if self.ten_dq.is_none() {
            self.ten_dq = Some(25065.0);
        }
        if self.cut.is_none() {
            self.cut = Some(24000.0);
        }
        if self.output_dir.is_none() {
            self.output_dir = Some(".".to_string());
        }
        self.racah = Some(self.racah.take().unwrap_or_default().with_defaults());
        self.diagram = Some(self.diagram.take().unwrap_or_default().with_defaults());
        self.batch = Some(self.batch.take().unwrap_or_default().with_defaults());
        self
    }

    pub fn racah_params(&self) -> RacahParams {
        self.racah.clone().unwrap_or_default().with_defaults()
    }

    pub fn diagram_params(&self) -> DiagramParams {
        self.diagram.clone().unwrap_or_default().with_defaults()
    }

    pub fn batch_params(&self) -> BatchParams {
        self.batch.clone().unwrap_or_default().with_defaults()
    }

    /// Check if the parameter-grid batch replaces the diagram run
    pub fn is_batch_enabled(&self) -> bool {
        self.batch.as_ref().and_then(|b| b.enabled).unwrap_or(false)
    }
}
