//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod run;
pub mod stages;
pub mod utils;

// Re-export main command functions
pub use models::{PlotArgs, RunArgs};
pub use run::{execute_run, validate_config, RunOutputs};
pub use stages::{execute_aggregate, execute_collect, execute_plot};
pub use utils::{display_version, validate_report_file};
