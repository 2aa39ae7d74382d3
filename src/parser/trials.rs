//! Parser for combined benchmark output.
//!
//! Each non-empty line is `node_count,height,insert_time,delete_time`.
//! The delimiter is fixed; a file written with another delimiter fails
//! the field-count check on its first row.

use super::schema::TrialRecord;
use crate::utils::config::{FIELDS_PER_ROW, FIELD_DELIMITER};
use crate::utils::error::ParseError;
use csv::{ReaderBuilder, Trim};
use log::debug;
use std::path::Path;

/// Parse combined benchmark text into trial records
///
/// **Public** - main entry point for parsing
///
/// Blank lines and `#` comment lines are skipped. Every other line must
/// hold exactly four numeric fields.
///
/// # Errors
/// * `ParseError::FieldCount` - a row has the wrong number of fields
/// * `ParseError::InvalidRow` - a field is not a number
pub fn parse_trials(text: &str) -> Result<Vec<TrialRecord>, ParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(FIELD_DELIMITER)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(text.as_bytes());

    let mut trials = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();

        // whitespace-only line
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        if record.len() != FIELDS_PER_ROW {
            return Err(ParseError::FieldCount {
                line,
                expected: FIELDS_PER_ROW,
                found: record.len(),
            });
        }

        let trial: TrialRecord = record
            .deserialize(None)
            .map_err(|source| ParseError::InvalidRow { line, source })?;
        trials.push(trial);
    }

    debug!("Parsed {} trial rows", trials.len());

    Ok(trials)
}

/// Read and parse a combined results file
///
/// **Public** - used by the `aggregate` command
pub fn read_trials(path: impl AsRef<Path>) -> Result<Vec<TrialRecord>, ParseError> {
    let path = path.as_ref();

    debug!("Reading trials from: {}", path.display());

    let text = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_trials(&text)
}
