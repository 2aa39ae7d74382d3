//! Statistics table writer.
//!
//! Writes the table as CSV with one header row, which any spreadsheet
//! application opens directly.

use super::validate_output_path;
use crate::aggregator::StatsTable;
use crate::parser::schema::StatsRow;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::path::Path;

/// Write the statistics table to a CSV file
///
/// **Public** - main entry point for table output
///
/// # Errors
/// * `OutputError::InvalidPath` - path is empty or a directory
/// * `OutputError::Table` - I/O or serialization error
pub fn write_stats_table(table: &StatsTable, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing statistics table to: {}", output_path.display());

    validate_output_path(output_path)?;
    super::create_parent_dirs(output_path)?;

    let mut writer = csv::Writer::from_path(output_path)?;
    for row in &table.rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!("Statistics table written ({} rows)", table.len());

    Ok(())
}

/// Read a statistics table written by `write_stats_table`
///
/// **Public** - used by the `plot` command
pub fn read_stats_table(input_path: impl AsRef<Path>) -> Result<StatsTable, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading statistics table from: {}", input_path.display());

    let mut reader = csv::Reader::from_path(input_path)?;
    let rows = reader
        .deserialize::<StatsRow>()
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Statistics table loaded: {} rows", rows.len());

    Ok(StatsTable::new(rows))
}
