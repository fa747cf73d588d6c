use super::configuration::DElectronCount;
use super::table::{ConfigurationTable, States, TermLabel, TermSpec};
use crate::error::{LigandFieldError, Result};
use crate::matrix::{construct_matrix, eigensolver};
use crate::tools::racah;
use indexmap::IndexMap;
use nalgebra::{DMatrix, DVector};
use tracing::{debug, trace};

/// Crystal-field splitting and Racah parameters of one evaluation point, all in cm-1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalParameters {
    pub dq: f64,
    pub b: f64,
    pub c: f64,
}

impl PhysicalParameters {
    pub fn new(dq: f64, b: f64, c: f64) -> Result<Self> {
        for (name, value) in [("Dq", dq), ("B", b), ("C", c)] {
            if !value.is_finite() || value < 0.0 {
                return Err(LigandFieldError::InvalidParameter { name, value });
            }
        }
        Ok(PhysicalParameters { dq, b, c })
    }

    /// Build parameters from Slater-Condon integrals `F2`, `F4` given in eV
    pub fn from_slater_condon(dq: f64, f2: f64, f4: f64) -> Result<Self> {
        let (b, c) = racah(f2, f4);
        Self::new(dq, b, c)
    }
}

/// Ligand-field Hamiltonian of one configuration at one `(Dq, B, C)` point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LigandField {
    configuration: DElectronCount,
    params: PhysicalParameters,
}

impl LigandField {
    pub fn new(configuration: DElectronCount, params: PhysicalParameters) -> Self {
        LigandField {
            configuration,
            params,
        }
    }

    /// Use the configuration's literature Racah parameters
    pub fn with_defaults(configuration: DElectronCount, dq: f64) -> Result<Self> {
        let (b, c) = configuration.default_racah();
        Ok(Self::new(configuration, PhysicalParameters::new(dq, b, c)?))
    }

    pub fn configuration(&self) -> DElectronCount {
        self.configuration
    }

    pub fn params(&self) -> &PhysicalParameters {
        &self.params
    }

    fn table(&self) -> &'static ConfigurationTable {
        self.configuration.table()
    }

    /// Matrix of one term; singletons come back as a 1x1 matrix
    pub fn hamiltonian(&self, label: &str) -> Option<DMatrix<f64>> {
        self.table().term(label).map(|term| self.build_matrix(term))
    }

    /// Unreferenced, ascending energies of one term
    pub fn term_states(&self, label: &str) -> Result<DVector<f64>> {
        let term = self
            .table()
            .term(label)
            .ok_or_else(|| LigandFieldError::UnknownTerm {
                label: label.to_string(),
            })?;
        self.diagonalize(term)
    }

    fn build_matrix(&self, term: &TermSpec) -> DMatrix<f64> {
        let params = &self.params;
        match term.states {
            States::Block {
                diagonal,
                couplings,
            } => {
                let diagonal: Vec<f64> = diagonal.iter().map(|d| d.evaluate(params)).collect();
                construct_matrix(
                    &diagonal,
                    couplings
                        .iter()
                        .map(|coupling| ((coupling.row, coupling.col), coupling.evaluate(params))),
                )
            }
            States::Singleton(energy) => DMatrix::from_element(1, 1, energy.evaluate(params)),
        }
    }

    fn diagonalize(&self, term: &TermSpec) -> Result<DVector<f64>> {
        match term.states {
            States::Singleton(energy) => Ok(DVector::from_element(1, energy.evaluate(&self.params))),
            States::Block { .. } => {
                let size = term.size();
                trace!(
                    "{}: diagonalizing {} block ({}x{})",
                    self.configuration,
                    term.label,
                    size,
                    size
                );
                eigensolver(self.build_matrix(term)).ok_or(LigandFieldError::NumericalFailure {
                    block: term.label,
                    size,
                })
            }
        }
    }

    /// Every term of the configuration, referenced to the ground state.
    ///
    /// The reference term's lowest energy is subtracted first. When the configuration
    /// declares a level crossing and the candidate's lowest energy ends up at or below its
    /// tolerance, the spectrum is shifted a second time so the candidate reads zero.
    pub fn solver(&self) -> Result<StateResult> {
        let table = self.table();
        let raw = table
            .terms
            .iter()
            .map(|term| -> Result<(TermLabel, DVector<f64>)> {
                Ok((term.label, self.diagonalize(term)?))
            })
            .collect::<Result<IndexMap<TermLabel, DVector<f64>>>>()?;

        let policy = table.ground_state;
        let ground_energy = lowest(&raw, policy.reference)?;
        let mut states = shift(raw, ground_energy);
        let mut ground_state = policy.reference;

        if let Some(crossing) = policy.crossing {
            let candidate_energy = lowest(&states, crossing.candidate)?;
            if candidate_energy <= crossing.tolerance {
                debug!(
                    "{} at Dq = {}: {} ({:.6}) crosses below {}",
                    self.configuration,
                    self.params.dq,
                    crossing.candidate,
                    candidate_energy,
                    policy.reference
                );
                states = shift(states, candidate_energy);
                ground_state = crossing.candidate;
            }
        }

        Ok(StateResult {
            configuration: self.configuration,
            params: self.params,
            ground_state,
            states,
        })
    }
}

fn lowest(states: &IndexMap<TermLabel, DVector<f64>>, label: TermLabel) -> Result<f64> {
    states
        .get(label)
        .and_then(|energies| energies.iter().next().copied())
        .ok_or_else(|| LigandFieldError::UnknownTerm {
            label: label.to_string(),
        })
}

fn shift(
    states: IndexMap<TermLabel, DVector<f64>>,
    offset: f64,
) -> IndexMap<TermLabel, DVector<f64>> {
    states
        .into_iter()
        .map(|(label, energies)| (label, energies.map(|e| e - offset)))
        .collect()
}

/// Referenced spectrum of one configuration, terms in table order
#[derive(Debug, Clone, PartialEq)]
pub struct StateResult {
    configuration: DElectronCount,
    params: PhysicalParameters,
    ground_state: TermLabel,
    states: IndexMap<TermLabel, DVector<f64>>,
}

impl StateResult {
    pub fn configuration(&self) -> DElectronCount {
        self.configuration
    }

    pub fn params(&self) -> &PhysicalParameters {
        &self.params
    }

    /// Label of the term that reads zero
    pub fn ground_state(&self) -> TermLabel {
        self.ground_state
    }

    pub fn get(&self, label: &str) -> Option<&DVector<f64>> {
        self.states.get(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TermLabel, &DVector<f64>)> {
        self.states.iter().map(|(label, energies)| (*label, energies))
    }

    pub fn labels(&self) -> impl Iterator<Item = TermLabel> + '_ {
        self.states.keys().copied()
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of individual energies over all terms
    pub fn state_count(&self) -> usize {
        self.states.values().map(|energies| energies.len()).sum()
    }

    /// One entry per energy: multi-valued terms become `"{label}_{i}"`, singletons keep
    /// their label.
    pub fn subsplit(&self) -> Vec<(String, f64)> {
        let mut split = Vec::with_capacity(self.state_count());
        for (label, energies) in &self.states {
            if energies.len() > 1 {
                split.extend(
                    energies
                        .iter()
                        .enumerate()
                        .map(|(i, &energy)| (format!("{label}_{i}"), energy)),
                );
            } else {
                split.extend(energies.iter().map(|&energy| (label.to_string(), energy)));
            }
        }
        split
    }
}
