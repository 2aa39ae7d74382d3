//! Configuration and constants for the pipeline.

use std::path::{Path, PathBuf};

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Trials recorded per tree size by the benchmark
pub const TRIALS_PER_GROUP: usize = 100;

/// Field delimiter of the raw result files
pub const FIELD_DELIMITER: u8 = b',';

/// node_count, height, insert_time, delete_time
pub const FIELDS_PER_ROW: usize = 4;

/// Resolution of rendered charts
pub const CHART_DPI: u32 = 300;

// Artifact names, relative to the output directory
pub const COMBINED_FILE_NAME: &str = "final_results.txt";
pub const STATS_FILE_NAME: &str = "final_results_stats.csv";
pub const REPORT_FILE_NAME: &str = "final_results_stats.json";
pub const FIGURES_DIR_NAME: &str = "figures";

/// Locations the pipeline reads from and writes to
///
/// **Public** - built by main.rs from CLI flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Directory holding the raw benchmark result files
    pub input_dir: PathBuf,

    /// Existing directory receiving every artifact
    pub output_dir: PathBuf,

    /// JSON chart style sheet (built-in style when absent)
    pub style_path: Option<PathBuf>,
}

impl PipelineConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            style_path: None,
        }
    }

    pub fn with_style(mut self, style_path: impl Into<PathBuf>) -> Self {
        self.style_path = Some(style_path.into());
        self
    }

    pub fn combined_path(&self) -> PathBuf {
        self.output_dir.join(COMBINED_FILE_NAME)
    }

    pub fn stats_path(&self) -> PathBuf {
        self.output_dir.join(STATS_FILE_NAME)
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(REPORT_FILE_NAME)
    }

    pub fn figures_dir(&self) -> PathBuf {
        figures_dir(&self.output_dir)
    }
}

/// Chart directory under an output directory
pub fn figures_dir(output_dir: &Path) -> PathBuf {
    output_dir.join(FIGURES_DIR_NAME)
}
