//! Single-stage commands.
//!
//! Each runs one part of the pipeline on its own so intermediate
//! artifacts can be produced or re-used independently.

use super::models::PlotArgs;
use super::run::{print_summary, write_charts};
use crate::aggregator::{aggregate, StatsTable};
use crate::chart::{generate_text_summary, load_style, render_all, RenderedChart};
use crate::collector::{collect_to_file, CombinedResults};
use crate::output::{read_stats_table, write_stats_table};
use crate::parser::{read_trials, FitSummary};
use crate::utils::config::PipelineConfig;
use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

/// Combine a result directory into one file
///
/// **Public** - `collect` command
pub fn execute_collect(input_dir: &Path, output: &Path) -> Result<CombinedResults> {
    if !input_dir.is_dir() {
        anyhow::bail!(
            "Input directory does not exist or is not a directory: {}",
            input_dir.display()
        );
    }

    let combined = collect_to_file(input_dir, output).context("Failed to combine result files")?;
    info!("✓ Combined {} files into: {}", combined.file_count(), output.display());

    Ok(combined)
}

/// Aggregate a combined file into a statistics table
///
/// **Public** - `aggregate` command
pub fn execute_aggregate(input: &Path, output: &Path, print: bool) -> Result<StatsTable> {
    let trials = read_trials(input).with_context(|| format!("Failed to parse {}", input.display()))?;
    let table = aggregate(&trials).context("Failed to aggregate trials")?;

    write_stats_table(&table, output).context("Failed to write statistics table")?;
    info!("✓ Statistics written to: {}", output.display());

    if print {
        print_summary(&table, &[]);
    }

    Ok(table)
}

/// Render charts from a persisted statistics table
///
/// **Public** - `plot` command
pub fn execute_plot(args: PlotArgs) -> Result<Vec<PathBuf>> {
    if !args.output_dir.is_dir() {
        anyhow::bail!(
            "Output directory does not exist or is not a directory: {}",
            args.output_dir.display()
        );
    }

    let style = load_style(args.style_path.as_deref()).context("Failed to load chart style")?;
    let table = read_stats_table(&args.stats)
        .with_context(|| format!("Failed to read statistics table {}", args.stats.display()))?;

    info!("Loaded {} rows from {}", table.len(), args.stats.display());

    let charts = render_all(&table, &style).context("Failed to render charts")?;

    let config = PipelineConfig {
        input_dir: PathBuf::new(),
        output_dir: args.output_dir,
        style_path: args.style_path,
    };
    let paths = write_charts(&charts, &config)?;

    let fits: Vec<FitSummary> = charts.iter().map(RenderedChart::fit_summary).collect();
    println!("{}", generate_text_summary(&fits));

    Ok(paths)
}
