mod report;
mod runner;

pub use runner::{run_batch, run_cut, run_diagram};

use self::report::report_settings;
use crate::config::{Args, Config};
use crate::io::setup_output;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use std::fs;
use std::path::PathBuf;
use tanabe_sugano::batch::{Batch, ParameterRange};
use tanabe_sugano::tools::racah;
use tanabe_sugano::DElectronCount;
use tracing::info;

pub struct TanabeApplication {
    args: Args,
    config: Config,
}

impl TanabeApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = load_config(&args)?;
        Ok(Self { args, config })
    }

    pub fn run(self) -> Result<()> {
        setup_output(self.args.output.as_ref(), self.args.verbose);
        info!("tanabe v{}", env!("CARGO_PKG_VERSION"));

        let settings = Settings::resolve(&self.args, &self.config)?;
        report_settings(&settings);

        if let Some(threads) = settings.threads {
            info!("Setting Rayon global thread pool to {} threads", threads);
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .wrap_err("Failed to build global thread pool")?;
        }

        fs::create_dir_all(&settings.output_dir).wrap_err_with(|| {
            format!(
                "Unable to create output directory: {}",
                settings.output_dir.display()
            )
        })?;

        match &settings.batch {
            Some(batch) => {
                info!("Running parameter-grid batch for {}", batch.configuration);
                run_batch(&settings, batch)?;
            }
            None => {
                run_diagram(&settings)?;
                run_cut(&settings)?;
            }
        }

        info!("\nDone.");
        Ok(())
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let Some(path) = &args.config_file else {
        return Ok(Config::default().with_defaults());
    };

    let config_content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Unable to read configuration file: {}", path))?;

    let config = serde_yml::from_str::<Config>(&config_content)
        .wrap_err("Failed to parse configuration file")?
        .with_defaults();

    Ok(config)
}

/// Run parameters after merging defaults, YAML and command line
#[derive(Debug)]
pub struct Settings {
    pub configuration: DElectronCount,
    pub ten_dq: f64,
    pub cut: f64,
    /// Racah B in cm-1, after scaling and Slater-Condon conversion
    pub b: f64,
    pub c: f64,
    pub roots: usize,
    pub save_txt: bool,
    pub batch: Option<Batch>,
    pub output_dir: PathBuf,
    pub threads: Option<usize>,
}

impl Settings {
    fn resolve(args: &Args, config: &Config) -> Result<Self> {
        let d_count = args.d_count.or(config.d_count).unwrap_or(6);
        let configuration = DElectronCount::try_from(d_count)?;

        let racah_params = config.racah_params();
        let b = args.racah_b.or(racah_params.b).unwrap_or(1080.0)
            * args.b_scale.or(racah_params.b_scale).unwrap_or(1.0);
        let c = args.racah_c.or(racah_params.c).unwrap_or(4773.0)
            * args.c_scale.or(racah_params.c_scale).unwrap_or(1.0);
        let slater = args.slater || racah_params.slater.unwrap_or(false);
        let (b, c) = if slater { racah(b, c) } else { (b, c) };

        let diagram_params = config.diagram_params();
        let batch = if args.batch || config.is_batch_enabled() {
            let params = config.batch_params();
            Some(Batch {
                configuration,
                dq: ParameterRange::from_slice("Dq", params.dq.as_deref().unwrap_or_default())?,
                b: ParameterRange::from_slice("B", params.b.as_deref().unwrap_or_default())?,
                c: ParameterRange::from_slice("C", params.c.as_deref().unwrap_or_default())?,
                slater,
            })
        } else {
            None
        };

        Ok(Settings {
            configuration,
            ten_dq: args.ten_dq.or(config.ten_dq).unwrap_or(25065.0),
            cut: args.cut.or(config.cut).unwrap_or(24000.0),
            b,
            c,
            roots: args.roots.or(diagram_params.roots).unwrap_or(500),
            save_txt: !args.no_txt && diagram_params.save_txt.unwrap_or(true),
            batch,
            output_dir: PathBuf::from(
                args.output_dir
                    .clone()
                    .or_else(|| config.output_dir.clone())
                    .unwrap_or_else(|| ".".to_string()),
            ),
            threads: args.threads.or(config.threads),
        })
    }
}
