//! Aggregation of trial records into per-size statistics.
//!
//! This module transforms parsed trials into:
//! - Per-group mean and population variance
//! - The sorted statistics table with log2(n) and n*log2(n) columns

pub mod groups;
pub mod metrics;

// Re-export main types and functions
pub use groups::{aggregate, group_trials, summarize_group, GroupStatistics, StatsTable};
pub use metrics::{mean, population_variance, summarize, Moments};
