use super::report::{
    report_batch_summary, report_cut, report_diagram_summary, report_written,
};
use super::Settings;
use crate::io::{diagram_stem, write_batch, write_cut, write_diagram};
use color_eyre::eyre::{Result, WrapErr};
use tanabe_sugano::batch::Batch;
use tanabe_sugano::diagram::{energy_cut, DiagramSweep};
use tracing::info;

pub fn run_diagram(settings: &Settings) -> Result<()> {
    let sweep = DiagramSweep::new(
        settings.configuration,
        settings.ten_dq,
        settings.b,
        settings.c,
        settings.roots,
    );
    let diagram = sweep
        .run()
        .wrap_err_with(|| format!("Diagram sweep for {} failed", settings.configuration))?;
    report_diagram_summary(&diagram);

    if settings.save_txt {
        let (ts_path, dd_path) = write_diagram(&diagram, &settings.output_dir)?;
        report_written(&ts_path);
        report_written(&dd_path);
    } else {
        info!("Skipping diagram CSV output");
    }
    Ok(())
}

pub fn run_cut(settings: &Settings) -> Result<()> {
    let rows = energy_cut(settings.configuration, settings.cut, settings.b, settings.c)
        .wrap_err_with(|| format!("Energy cut at 10Dq = {} failed", settings.cut))?;
    report_cut(&rows, settings.cut);

    let path = settings.output_dir.join(format!(
        "{}.csv",
        diagram_stem(
            "TS_Cut",
            settings.configuration,
            settings.cut,
            settings.b,
            settings.c
        )
    ));
    write_cut(&rows, &path)?;
    report_written(&path);
    Ok(())
}

pub fn run_batch(settings: &Settings, batch: &Batch) -> Result<()> {
    let records = batch.run().wrap_err("Batch calculation failed")?;
    let path = settings
        .output_dir
        .join(format!("batch_d{}.csv", u8::from(batch.configuration)));
    let rows = write_batch(&records, &path)?;
    report_batch_summary(&records, rows, &path);
    Ok(())
}
