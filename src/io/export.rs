//! CSV export of diagrams, energy cuts and batch grids

use color_eyre::eyre::{Result, WrapErr};
use std::path::{Path, PathBuf};
use tanabe_sugano::batch::BatchRecord;
use tanabe_sugano::diagram::{CutRow, Diagram};
use tanabe_sugano::DElectronCount;

/// `{prefix}_d{d}_10Dq_{10Dq}_B_{B}_C_{C}`, every number truncated to an integer
pub fn diagram_stem(prefix: &str, configuration: DElectronCount, ten_dq: f64, b: f64, c: f64) -> String {
    format!(
        "{}_d{}_10Dq_{}_B_{}_C_{}",
        prefix,
        u8::from(configuration),
        ten_dq as i64,
        b as i64,
        c as i64
    )
}

fn csv_writer(path: &Path) -> Result<csv::Writer<std::fs::File>> {
    csv::Writer::from_path(path).wrap_err_with(|| format!("Unable to create {}", path.display()))
}

/// Write the Tanabe-Sugano (`E/B` against `Δ/B`) and energy-correlation (cm-1 against
/// 10Dq) tables of a diagram into `dir`.
pub fn write_diagram(diagram: &Diagram, dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let (b, c) = diagram.racah();
    let ten_dq_max = diagram.dq().last().copied().unwrap_or_default() * 10.0;

    let ts_path = dir.join(format!(
        "{}.csv",
        diagram_stem("TS-diagram", diagram.configuration(), ten_dq_max, b, c)
    ));
    write_columns(
        &ts_path,
        "delta_B",
        &diagram.delta_over_b(),
        diagram.labels(),
        &diagram.tanabe_sugano_columns(),
    )?;

    let dd_path = dir.join(format!(
        "{}.csv",
        diagram_stem("DD-energies", diagram.configuration(), ten_dq_max, b, c)
    ));
    write_columns(
        &dd_path,
        "10Dq",
        &diagram.ten_dq(),
        diagram.labels(),
        diagram.correlation_columns(),
    )?;

    Ok((ts_path, dd_path))
}

fn write_columns(
    path: &Path,
    axis_name: &str,
    axis: &[f64],
    labels: &[String],
    columns: &[Vec<f64>],
) -> Result<()> {
    let mut writer = csv_writer(path)?;
    let header = std::iter::once(axis_name).chain(labels.iter().map(String::as_str));
    writer.write_record(header)?;

    for (i, x) in axis.iter().enumerate() {
        let row: Vec<f64> = std::iter::once(*x)
            .chain(columns.iter().map(|column| column[i]))
            .collect();
        writer.serialize(row)?;
    }
    writer
        .flush()
        .wrap_err_with(|| format!("Unable to write {}", path.display()))?;
    Ok(())
}

/// Write the energy cut as `state,cm,eV` with four decimals for eV
pub fn write_cut(rows: &[CutRow], path: &Path) -> Result<()> {
    let mut writer = csv_writer(path)?;
    writer.write_record(["state", "cm", "eV"])?;
    for row in rows {
        writer.write_record([
            row.state.clone(),
            row.wavenumber.to_string(),
            format!("{:.4}", row.ev),
        ])?;
    }
    writer
        .flush()
        .wrap_err_with(|| format!("Unable to write {}", path.display()))?;
    Ok(())
}

/// Write every batch record as flat `d_count,Dq,B,C,state,energy` rows
pub fn write_batch(records: &[BatchRecord], path: &Path) -> Result<usize> {
    let mut writer = csv_writer(path)?;
    let mut count = 0;
    for record in records {
        for row in record.rows() {
            writer.serialize(row)?;
            count += 1;
        }
    }
    writer
        .flush()
        .wrap_err_with(|| format!("Unable to write {}", path.display()))?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tanabe_sugano::batch::{Batch, ParameterRange};
    use tanabe_sugano::diagram::{energy_cut, DiagramSweep};
    use tempfile::tempdir;

    #[test]
    fn test_diagram_stem() {
        assert_eq!(
            diagram_stem("TS-diagram", DElectronCount::D6, 25065.0, 1080.0, 4773.9),
            "TS-diagram_d6_10Dq_25065_B_1080_C_4773"
        );
    }

    #[test]
    fn test_write_diagram() {
        let dir = tempdir().unwrap();
        let diagram = DiagramSweep::new(DElectronCount::D2, 20000.0, 860.0, 3801.0, 4)
            .run()
            .unwrap();
        let (ts_path, dd_path) = write_diagram(&diagram, dir.path()).unwrap();

        assert_eq!(
            ts_path.file_name().unwrap(),
            "TS-diagram_d2_10Dq_20000_B_860_C_3801.csv"
        );
        let ts = fs::read_to_string(&ts_path).unwrap();
        let lines: Vec<&str> = ts.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("delta_B,1_A_1_0,1_A_1_1,1_E_0"));
        assert_eq!(lines[0].split(',').count(), 12);
        assert!(lines[0].contains(",1_T_3_0,1_T_3_1,"));

        let dd = fs::read_to_string(&dd_path).unwrap();
        let mut reader = csv::Reader::from_reader(dd.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "10Dq");
        let last: Vec<f64> = reader
            .records()
            .last()
            .unwrap()
            .unwrap()
            .iter()
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(last[0], 20000.0);
        let ground = headers.iter().position(|h| h == "3_T_1_0").unwrap();
        assert_eq!(last[ground], 0.0);
    }

    #[test]
    fn test_write_cut() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cut.csv");
        let rows = energy_cut(DElectronCount::D3, 20000.0, 918.0, 4133.0).unwrap();
        write_cut(&rows, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "state,cm,eV");
        assert_eq!(lines[1], "4_A_2,0,0.0000");
        assert!(lines.contains(&"4_T_2,20000,2.4000"));
        assert_eq!(lines.len(), 21);
    }

    #[test]
    fn test_write_batch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("batch_d8.csv");
        let records = Batch {
            configuration: DElectronCount::D8,
            dq: ParameterRange::new(500.0, 1000.0, 2),
            b: ParameterRange::new(1030.0, 1030.0, 1),
            c: ParameterRange::new(4850.0, 4850.0, 1),
            slater: false,
        }
        .run()
        .unwrap();
        let count = write_batch(&records, &path).unwrap();
        assert_eq!(count, 22);

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("d_count,Dq,B,C,state,energy"));
        assert_eq!(lines.count(), 22);
    }
}
