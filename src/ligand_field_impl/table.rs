//! Declarative description of one d-electron configuration
//!
//! A configuration is a list of terms. Each term is either a symmetry block (a small
//! symmetric matrix whose entries are affine in Dq, B and C) or a closed-form singleton.
//! Together with the ground-state policy this is all the engine needs to produce a
//! referenced spectrum.

use super::engine::PhysicalParameters;

/// Term symbol key such as `"3_T_1"`
pub type TermLabel = &'static str;

/// Affine form `dq * Dq + b * B + c * C`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub dq: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    pub const fn new(dq: f64, b: f64, c: f64) -> Self {
        Coefficients { dq, b, c }
    }

    pub fn evaluate(&self, params: &PhysicalParameters) -> f64 {
        self.dq * params.dq + self.b * params.b + self.c * params.c
    }
}

/// Shorthand for [`Coefficients::new`] used by the configuration tables
pub const fn affine(dq: f64, b: f64, c: f64) -> Coefficients {
    Coefficients::new(dq, b, c)
}

/// Off-diagonal element `scale * (b * B + c * C)` at `(row, col)`, `row < col`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coupling {
    pub row: usize,
    pub col: usize,
    pub scale: f64,
    pub term: Coefficients,
}

impl Coupling {
    /// `scale * B`
    pub const fn b(row: usize, col: usize, scale: f64) -> Self {
        Coupling {
            row,
            col,
            scale,
            term: Coefficients::new(0.0, 1.0, 0.0),
        }
    }

    /// `scale * (b * B + c * C)`
    pub const fn bc(row: usize, col: usize, scale: f64, b: f64, c: f64) -> Self {
        Coupling {
            row,
            col,
            scale,
            term: Coefficients::new(0.0, b, c),
        }
    }

    pub fn evaluate(&self, params: &PhysicalParameters) -> f64 {
        self.scale * self.term.evaluate(params)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum States {
    Block {
        diagonal: &'static [Coefficients],
        couplings: &'static [Coupling],
    },
    Singleton(Coefficients),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermSpec {
    pub label: TermLabel,
    pub states: States,
}

impl TermSpec {
    pub const fn block(
        label: TermLabel,
        diagonal: &'static [Coefficients],
        couplings: &'static [Coupling],
    ) -> Self {
        TermSpec {
            label,
            states: States::Block {
                diagonal,
                couplings,
            },
        }
    }

    pub const fn singleton(label: TermLabel, energy: Coefficients) -> Self {
        TermSpec {
            label,
            states: States::Singleton(energy),
        }
    }

    /// Number of energies this term contributes
    pub fn size(&self) -> usize {
        match self.states {
            States::Block { diagonal, .. } => diagonal.len(),
            States::Singleton(_) => 1,
        }
    }
}

/// Candidate term that may drop below the reference as Dq grows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelCrossing {
    pub candidate: TermLabel,
    /// The candidate takes over once its lowest referenced energy is `<= tolerance`
    pub tolerance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundStatePolicy {
    /// Term whose lowest energy is subtracted from every term
    pub reference: TermLabel,
    pub crossing: Option<LevelCrossing>,
}

impl GroundStatePolicy {
    pub const fn fixed(reference: TermLabel) -> Self {
        GroundStatePolicy {
            reference,
            crossing: None,
        }
    }

    pub const fn with_crossing(reference: TermLabel, candidate: TermLabel, tolerance: f64) -> Self {
        GroundStatePolicy {
            reference,
            crossing: Some(LevelCrossing {
                candidate,
                tolerance,
            }),
        }
    }
}

/// Everything that distinguishes one d-electron count from another
#[derive(Debug)]
pub struct ConfigurationTable {
    /// Racah B and C (cm-1) used when the caller does not provide any
    pub default_racah: (f64, f64),
    /// Terms in reporting order
    pub terms: &'static [TermSpec],
    pub ground_state: GroundStatePolicy,
}

impl ConfigurationTable {
    pub fn term(&self, label: &str) -> Option<&'static TermSpec> {
        self.terms.iter().find(|term| term.label == label)
    }

    pub fn state_count(&self) -> usize {
        self.terms.iter().map(TermSpec::size).sum()
    }
}
