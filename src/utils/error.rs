//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while combining raw result files
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("Cannot list directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read result file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write combined file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while parsing trial rows
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: invalid numeric field: {source}")]
    InvalidRow {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Errors that can occur while computing group statistics
#[derive(Error, Debug, PartialEq)]
pub enum AggregateError {
    #[error("No trial rows to aggregate")]
    EmptyInput,

    #[error("Group {group}: mean node count {nodes} has no logarithm")]
    NonPositiveNodes { group: usize, nodes: f64 },
}

/// Errors that can occur while loading a chart style sheet
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Style sheet not found: {0}")]
    Missing(PathBuf),

    #[error("Cannot read style sheet {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid style sheet: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid color '{0}' (expected #rrggbb)")]
    InvalidColor(String),

    #[error("Invalid style value: {0}")]
    InvalidValue(String),
}

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("x and y series differ in length ({x} vs {y})")]
    LengthMismatch { x: usize, y: usize },

    #[error("Linear fit needs finite data points")]
    DegenerateFit,

    #[error("Chart '{chart}' has no data points")]
    EmptySeries { chart: String },

    #[error("Style error: {0}")]
    Style(#[from] StyleError),

    #[error("Failed to draw chart: {0}")]
    Render(String),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Failed to read or write CSV table: {0}")]
    Table(#[from] csv::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
