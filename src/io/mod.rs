//! Input/Output operations for diagram runs
//!
//! This module handles logging setup and the CSV files handed to plotting tools.

mod export;
mod output;

pub use export::{diagram_stem, write_batch, write_cut, write_diagram};
pub use output::setup_output;
