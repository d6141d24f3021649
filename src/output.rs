use crate::cli::ReportFormat;
use crate::model::OutcomeRow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn write_report(rows: &[OutcomeRow], path: &Path, format: ReportFormat) -> anyhow::Result<()> {
    match format {
        ReportFormat::Json => {
            let mut f = File::create(path)?;
            writeln!(f, "{}", serde_json::to_string_pretty(rows)?)?;
        }
        ReportFormat::Csv => {
            let mut wtr = csv::Writer::from_path(path)?;
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }
    log::info!("共 {} 条下载结果，报告已保存为 {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn rows() -> Vec<OutcomeRow> {
        vec![
            OutcomeRow {
                status: "skipped".into(),
                path: Some("/w/2024/01/20240101.jpg".into()),
                url: None,
                reason: None,
            },
            OutcomeRow {
                status: "failed".into(),
                path: None,
                url: Some("https://img/b.jpg?id=B".into()),
                reason: Some("HTTP 404".into()),
            },
        ]
    }

    #[test]
    fn writes_json_array() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.json");
        write_report(&rows(), &path, ReportFormat::Json).unwrap();

        let parsed: Vec<OutcomeRow> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, rows());
    }

    #[test]
    fn writes_csv_with_header() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.csv");
        write_report(&rows(), &path, ReportFormat::Csv).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("status,path,url,reason"));
        assert_eq!(
            lines.next(),
            Some("skipped,/w/2024/01/20240101.jpg,,")
        );
        assert_eq!(
            lines.next(),
            Some("failed,,https://img/b.jpg?id=B,HTTP 404")
        );
        assert_eq!(lines.next(), None);
    }
}
