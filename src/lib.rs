// Library for Tanabe-Sugano and energy-correlation diagrams of octahedral d2-d8 ions

pub mod batch;
pub mod constants;
pub mod diagram;
pub mod error;
pub mod ligand_field_impl;
pub mod matrix;
pub mod tools;

pub use error::{LigandFieldError, Result};
pub use ligand_field_impl::{DElectronCount, LigandField, PhysicalParameters, StateResult};
