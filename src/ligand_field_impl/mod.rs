//! Octahedral ligand-field engine for d2 to d8 ions
//!
//! Each configuration is described by a static table of symmetry blocks and singleton
//! terms (see [`ConfigurationTable`]). One generic engine evaluates any table at a
//! `(Dq, B, C)` point: every block matrix is assembled and diagonalized, singletons are
//! evaluated in closed form, and the whole spectrum is referenced to the ground state.
//!
//! # Ground state
//!
//! The ground term is fixed for d2, d3 and d8. For d4 to d7 a low-spin term can drop
//! below the high-spin reference as Dq grows; the table names that candidate together
//! with the tolerance at which it takes over, and the engine re-references the spectrum
//! against it.
//!
//! # Usage
//!
//! ```ignore
//! let params = PhysicalParameters::new(2500.0, 1065.0, 5120.0)?;
//! let result = LigandField::new(DElectronCount::D6, params).solver()?;
//! assert_eq!(result.ground_state(), "1_A_1");
//! ```

mod configuration;
mod d2;
mod d3;
mod d4;
mod d5;
mod d6;
mod d7;
mod d8;
mod engine;
mod table;
#[cfg(test)]
mod tests;

pub use configuration::DElectronCount;
pub use engine::{LigandField, PhysicalParameters, StateResult};
pub use table::{
    Coefficients, ConfigurationTable, Coupling, GroundStatePolicy, LevelCrossing, States,
    TermLabel, TermSpec,
};
