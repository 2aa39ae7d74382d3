//! Row and report schema definitions.
//!
//! `TrialRecord` is one line of benchmark output. `StatsRow` is one line of
//! the statistics table; its serde names are the table's column headers.
//! `StatsReport` is the versioned JSON document written next to the table.

use serde::{Deserialize, Serialize};

/// One benchmark trial: a tree built and torn down once
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// Number of nodes inserted
    pub node_count: f64,

    /// Height of the resulting tree
    pub height: f64,

    /// Seconds spent inserting every node
    pub insert_time: f64,

    /// Seconds spent deleting every node
    pub delete_time: f64,
}

impl TrialRecord {
    pub fn new(node_count: f64, height: f64, insert_time: f64, delete_time: f64) -> Self {
        Self {
            node_count,
            height,
            insert_time,
            delete_time,
        }
    }
}

/// Column headers of the statistics table, in file order
pub const STATS_COLUMNS: [&str; 9] = [
    "Nodes",
    "Height mean",
    "Height variance",
    "Insert-time mean",
    "Insert-time variance",
    "Delete-time mean",
    "Delete-time variance",
    "Log(Nodes)",
    "n*Log(n)",
];

/// One row of the statistics table (one tree size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsRow {
    #[serde(rename = "Nodes")]
    pub nodes: f64,

    #[serde(rename = "Height mean")]
    pub height_mean: f64,

    #[serde(rename = "Height variance")]
    pub height_variance: f64,

    #[serde(rename = "Insert-time mean")]
    pub insert_time_mean: f64,

    #[serde(rename = "Insert-time variance")]
    pub insert_time_variance: f64,

    #[serde(rename = "Delete-time mean")]
    pub delete_time_mean: f64,

    #[serde(rename = "Delete-time variance")]
    pub delete_time_variance: f64,

    /// log2(nodes)
    #[serde(rename = "Log(Nodes)")]
    pub log_nodes: f64,

    /// nodes * log2(nodes)
    #[serde(rename = "n*Log(n)")]
    pub n_log_n: f64,
}

/// Linear fit drawn on one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitSummary {
    /// Chart file name the fit belongs to
    pub chart: String,
    pub x_column: String,
    pub y_column: String,
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Number of raw result files combined
    pub source_files: usize,

    /// Number of trial rows parsed
    pub trial_count: usize,

    /// Trials per tree size
    pub trials_per_group: usize,

    /// Statistics table, sorted by node count
    pub rows: Vec<StatsRow>,

    /// Fits of the rendered charts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fits: Vec<FitSummary>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_row_headers_match_columns() {
        let row = StatsRow {
            nodes: 1024.0,
            height_mean: 20.0,
            height_variance: 1.0,
            insert_time_mean: 0.5,
            insert_time_variance: 0.01,
            delete_time_mean: 0.4,
            delete_time_variance: 0.02,
            log_nodes: 10.0,
            n_log_n: 10240.0,
        };

        let value = serde_json::to_value(row).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), STATS_COLUMNS.len());
        for column in STATS_COLUMNS {
            assert!(object.contains_key(column), "missing column {}", column);
        }
    }
}
