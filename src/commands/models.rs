use crate::utils::config::PipelineConfig;
use std::path::PathBuf;

/// Arguments for the run command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Input, output and style locations
    pub config: PipelineConfig,

    /// Print table and fits to stdout
    pub print_summary: bool,

    /// Write the JSON report next to the CSV table
    pub write_report: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            config: PipelineConfig::new("results", "."),
            print_summary: false,
            write_report: true,
        }
    }
}

/// Arguments for the plot command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct PlotArgs {
    /// Statistics CSV written by a previous run
    pub stats: PathBuf,

    /// Directory receiving the `figures` sub-directory
    pub output_dir: PathBuf,

    /// JSON chart style sheet (built-in style when absent)
    pub style_path: Option<PathBuf>,
}
