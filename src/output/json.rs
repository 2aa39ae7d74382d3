//! JSON report output writer.
//!
//! Writes StatsReport structs to JSON files with proper formatting.

use super::{create_parent_dirs, validate_output_path};
use crate::parser::schema::StatsReport;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &StatsReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    validate_output_path(output_path)?;
    create_parent_dirs(output_path)?;

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    // Serialize to JSON with pretty printing
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;

    info!("Report written successfully ({} bytes)", calculate_file_size(output_path));

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a report from a JSON file
///
/// **Public** - used by the `validate` command
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<StatsReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path)?;
    let report: StatsReport = serde_json::from_reader(BufReader::new(file))?;

    debug!("Report loaded: version {}, {} rows", report.version, report.rows.len());

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{FitSummary, StatsRow};
    use tempfile::NamedTempFile;

    fn create_test_report() -> StatsReport {
        StatsReport {
            version: "1.0.0".to_string(),
            source_files: 2,
            trial_count: 200,
            trials_per_group: 100,
            rows: vec![StatsRow {
                nodes: 2.0,
                height_mean: 1.5,
                height_variance: 0.25,
                insert_time_mean: 0.0,
                insert_time_variance: 0.0,
                delete_time_mean: 0.0,
                delete_time_variance: 0.0,
                log_nodes: 1.0,
                n_log_n: 2.0,
            }],
            fits: vec![FitSummary {
                chart: "tree_height_analysis.png".to_string(),
                x_column: "Log(Nodes)".to_string(),
                y_column: "Height mean".to_string(),
                slope: 1.0,
                intercept: 0.5,
                r_squared: 1.0,
            }],
            generated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_write_and_read_report() {
        let report = create_test_report();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_report(&report, path).unwrap();
        let loaded = read_report(path).unwrap();

        assert_eq!(loaded.version, report.version);
        assert_eq!(loaded.trial_count, 200);
        assert_eq!(loaded.rows, report.rows);
        assert_eq!(loaded.fits, report.fits);
    }

    #[test]
    fn test_fits_optional_on_read() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(
            temp_file.path(),
            r#"{"version":"1.0.0","source_files":0,"trial_count":0,"trials_per_group":100,"rows":[],"generated_at":"now"}"#,
        )
        .unwrap();

        let loaded = read_report(temp_file.path()).unwrap();
        assert!(loaded.fits.is_empty());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/report.json");

        write_report(&create_test_report(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }
}
