//! Trial parsing and schema definitions.
//!
//! This module handles:
//! - Parsing combined benchmark output into trial records
//! - Defining the statistics table and JSON report schema

pub mod schema;
pub mod trials;

// Re-export main types
pub use schema::{FitSummary, StatsReport, StatsRow, TrialRecord, STATS_COLUMNS};
pub use trials::{parse_trials, read_trials};
