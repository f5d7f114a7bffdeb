//! CSV and JSON export of flat row types.
//!
//! Every export writes two files side by side: `<name>.csv` and a pretty
//! printed `<name>.json` array.

mod rows;

pub use rows::{MatchRow, StatsRow, TeamRow};

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::metrics::EXPORT_FILES_WRITTEN;

/// Errors that can occur while writing export files.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid export name: '{0}'")]
    InvalidName(String),
}

/// Paths of the files written for one export.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExportPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
}

/// Writes row sets into an output directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
}

impl Exporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `rows` as `<name>.csv` and `<name>.json`, replacing existing files.
    ///
    /// An empty row set still produces both files (a header-less CSV and `[]`).
    pub fn write<T: Serialize>(&self, name: &str, rows: &[T]) -> Result<ExportPaths, ExportError> {
        let stem = sanitize_stem(name);
        if stem.is_empty() {
            return Err(ExportError::InvalidName(name.to_string()));
        }

        fs::create_dir_all(&self.output_dir)?;

        let csv_path = self.output_dir.join(format!("{}.csv", stem));
        let mut writer = csv::Writer::from_path(&csv_path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        EXPORT_FILES_WRITTEN.with_label_values(&["csv"]).inc();
        info!("Wrote {} rows to {}", rows.len(), csv_path.display());

        let json_path = self.output_dir.join(format!("{}.json", stem));
        let json = serde_json::to_string_pretty(rows)?;
        fs::write(&json_path, json)?;
        EXPORT_FILES_WRITTEN.with_label_values(&["json"]).inc();
        info!("Wrote {} rows to {}", rows.len(), json_path.display());

        Ok(ExportPaths {
            csv: csv_path,
            json: json_path,
        })
    }
}

/// Lowercase ASCII alphanumerics, everything else collapsed into single
/// underscores ("Real Madrid CF / 2024" -> "real_madrid_cf_2024").
pub fn sanitize_stem(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '-' {
            stem.push(c.to_ascii_lowercase());
        } else if !stem.ends_with('_') {
            stem.push('_');
        }
    }
    stem.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Serialize)]
    struct Row {
        team: String,
        points: u32,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                team: "Real Madrid CF".to_string(),
                points: 84,
            },
            Row {
                team: "FC Barcelona".to_string(),
                points: 88,
            },
        ]
    }

    #[test]
    fn test_sanitize_stem() {
        assert_eq!(sanitize_stem("Real Madrid CF / 2024"), "real_madrid_cf_2024");
        assert_eq!(sanitize_stem("../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_stem("h2h-results"), "h2h-results");
        assert_eq!(sanitize_stem("Atlético"), "atl_tico");
        assert_eq!(sanitize_stem("///"), "");
    }

    #[test]
    fn test_write_csv_and_json() {
        let dir = TempDir::new().unwrap();
        let exporter = Exporter::new(dir.path().join("nested"));

        let paths = exporter.write("Standings", &rows()).unwrap();
        assert_eq!(paths.csv, dir.path().join("nested/standings.csv"));

        let csv = fs::read_to_string(&paths.csv).unwrap();
        assert_eq!(csv, "team,points\nReal Madrid CF,84\nFC Barcelona,88\n");

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&paths.json).unwrap()).unwrap();
        assert_eq!(json[1]["team"], "FC Barcelona");
        assert_eq!(json.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_write_empty_rows() {
        let dir = TempDir::new().unwrap();
        let exporter = Exporter::new(dir.path());

        let paths = exporter.write("empty", &Vec::<Row>::new()).unwrap();
        assert_eq!(fs::read_to_string(&paths.csv).unwrap(), "");
        assert_eq!(fs::read_to_string(&paths.json).unwrap(), "[]");
    }

    #[test]
    fn test_write_overwrites() {
        let dir = TempDir::new().unwrap();
        let exporter = Exporter::new(dir.path());

        exporter.write("table", &rows()).unwrap();
        let paths = exporter.write("table", &rows()[..1]).unwrap();
        let csv = fs::read_to_string(&paths.csv).unwrap();
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn test_invalid_name() {
        let dir = TempDir::new().unwrap();
        let exporter = Exporter::new(dir.path());
        assert!(matches!(
            exporter.write("!!!", &rows()),
            Err(ExportError::InvalidName(_))
        ));
    }
}
