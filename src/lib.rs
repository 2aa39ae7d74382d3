//! Treebench Report
//!
//! Statistics and charts for Cartesian tree benchmark results.
//!
//! The benchmark writes one result file per tree size, each holding one
//! `node_count,height,insert_time,delete_time` row per trial. This crate
//! combines those files, computes per-size means and variances, and plots
//! height against log(n) and processing time against n*log(n) with a
//! least-squares line.
//!
//! ## Getting Started
//!
//! ```bash
//! treebench run --input-dir results --output-dir report
//! treebench --help
//! ```
//!
//! ## Library use
//!
//! ```
//! use treebench_report::{aggregator::aggregate, parser::parse_trials};
//!
//! # fn main() -> anyhow::Result<()> {
//! let trials = parse_trials("1000,23,0.012,0.010\n")?;
//! let table = aggregate(&trials)?;
//! assert_eq!(table.rows[0].log_nodes, 1000f64.log2());
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod chart;
pub mod collector;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
