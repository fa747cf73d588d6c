//! Tanabe-Sugano Diagram Command-Line Interface
//!
//! Sweeps a d2-d8 configuration over 10Dq, writes the diagram tables and the energy cut
//! as CSV, or evaluates a parameter grid with `--batch`.

use color_eyre::eyre::Result;

mod app;
mod config;
mod io;

use app::TanabeApplication;

fn main() -> Result<()> {
    color_eyre::install()?;
    TanabeApplication::from_cli()?.run()
}
