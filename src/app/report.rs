use std::path::Path;
use tanabe_sugano::batch::BatchRecord;
use tanabe_sugano::diagram::{CutRow, Diagram};
use tracing::info;

pub fn report_settings(settings: &super::Settings) {
    info!("\nSettings:");
    info!("  Configuration: {}", settings.configuration);
    info!("  10Dq maximum: {:.1} cm-1", settings.ten_dq);
    info!("  Energy cut at 10Dq = {:.1} cm-1", settings.cut);
    info!("  Racah B: {:.3} cm-1", settings.b);
    info!("  Racah C: {:.3} cm-1", settings.c);
    info!("  Roots: {}", settings.roots);
    info!("  Output directory: {}", settings.output_dir.display());
}

pub fn report_diagram_summary(diagram: &Diagram) {
    info!(
        "\nDiagram for {} finished: {} points, {} states.",
        diagram.configuration(),
        diagram.len(),
        diagram.labels().len()
    );
}

pub fn report_cut(rows: &[CutRow], ten_dq: f64) {
    info!("\nEnergy cut at 10Dq = {:.1} cm-1:", ten_dq);
    info!("  {:<8} {:>8} {:>8}", "State", "cm-1", "eV");
    for row in rows {
        info!("  {:<8} {:>8} {:>8.4}", row.state, row.wavenumber, row.ev);
    }
}

pub fn report_batch_summary(records: &[BatchRecord], rows: usize, path: &Path) {
    info!(
        "\nBatch finished: {} grid points, {} rows written to {}",
        records.len(),
        rows,
        path.display()
    );
}

pub fn report_written(path: &Path) {
    info!("  Wrote {}", path.display());
}
