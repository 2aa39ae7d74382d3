//! Collection of raw benchmark result files.
//!
//! The benchmark writes one file per tree size. This module joins them
//! into a single newline-separated text in file-name order.

pub mod combine;

// Re-export main types and functions
pub use combine::{collect_to_file, combine_files, list_result_files, CombinedResults};
