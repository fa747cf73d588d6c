//! Command-line argument parsing for diagram runs

use clap::{ArgAction, Parser};

/// Eigensolver for Tanabe-Sugano and energy-correlation diagrams of d2-d8 ions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to an optional YAML configuration file
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// Number of d electrons, 2 to 8 (default 6)
    #[arg(short, long)]
    pub d_count: Option<u8>,

    /// Upper end of the 10Dq axis in cm-1 (default 25065)
    #[arg(long)]
    pub ten_dq: Option<f64>,

    /// 10Dq of the energy cut in cm-1 (default 24000)
    #[arg(long)]
    pub cut: Option<f64>,

    /// Racah parameter B in cm-1 (default 1080)
    #[arg(long)]
    pub racah_b: Option<f64>,

    /// Racah parameter C in cm-1 (default 4773)
    #[arg(long)]
    pub racah_c: Option<f64>,

    /// Reduction factor applied to B (default 1.0)
    #[arg(long)]
    pub b_scale: Option<f64>,

    /// Reduction factor applied to C (default 1.0)
    #[arg(long)]
    pub c_scale: Option<f64>,

    /// Number of Dq points of the diagram (default 500)
    #[arg(short = 'n', long)]
    pub roots: Option<usize>,

    /// Read B and C as Slater-Condon F2 and F4 in eV
    #[arg(long)]
    pub slater: bool,

    /// Skip writing the diagram CSV files
    #[arg(long)]
    pub no_txt: bool,

    /// Run the parameter-grid batch instead of the diagram
    #[arg(long)]
    pub batch: bool,

    /// Directory for the CSV files (default: current directory)
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Override output file: (default stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Size of the worker thread pool (default: one per core)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_overrides_parse() {
        let args = Args::try_parse_from([
            "tanabe", "-d", "3", "--ten-dq", "30000", "--racah-b", "918", "-n", "50",
            "--slater", "-vv",
        ])
        .unwrap();
        assert_eq!(args.d_count, Some(3));
        assert_eq!(args.ten_dq, Some(30000.0));
        assert_eq!(args.racah_b, Some(918.0));
        assert_eq!(args.racah_c, None);
        assert_eq!(args.roots, Some(50));
        assert!(args.slater);
        assert!(!args.batch);
        assert_eq!(args.verbose, 2);
    }
}
