//! Run command implementation.
//!
//! The run command:
//! 1. Combines the raw result files
//! 2. Parses the combined trials
//! 3. Aggregates per-size statistics
//! 4. Writes the statistics table
//! 5. Renders and writes the charts, then the JSON report

use super::models::RunArgs;
use crate::aggregator::{aggregate, StatsTable};
use crate::chart::{generate_text_summary, load_style, render_all, RenderedChart};
use crate::collector::collect_to_file;
use crate::output::{write_png, write_report, write_stats_table};
use crate::parser::{parse_trials, FitSummary, StatsReport};
use crate::utils::config::{PipelineConfig, SCHEMA_VERSION, TRIALS_PER_GROUP};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Paths written by a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutputs {
    pub combined: PathBuf,
    pub stats: PathBuf,
    pub report: Option<PathBuf>,
    pub charts: Vec<PathBuf>,
}

/// Execute the run command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Paths of every artifact written
///
/// # Errors
/// Any I/O, parse, aggregation or rendering failure aborts the run.
/// Artifacts written before the failure are left in place.
pub fn execute_run(args: RunArgs) -> Result<RunOutputs> {
    let start_time = Instant::now();
    let config = &args.config;

    validate_config(config)?;

    info!("Input directory: {}", config.input_dir.display());
    info!("Output directory: {}", config.output_dir.display());

    // Load the style before any output so a bad style sheet fails fast
    let style = load_style(config.style_path.as_deref()).context("Failed to load chart style")?;

    // Step 1: Combine result files
    info!("Step 1/5: Combining result files...");
    let combined_path = config.combined_path();
    let combined = collect_to_file(&config.input_dir, &combined_path)
        .context("Failed to combine result files")?;

    // Step 2: Parse trials
    info!("Step 2/5: Parsing trial rows...");
    let trials = parse_trials(&combined.text)
        .with_context(|| format!("Failed to parse {}", combined_path.display()))?;

    debug!("Parsed {} trials from {} files", trials.len(), combined.file_count());

    // Step 3: Aggregate
    info!("Step 3/5: Aggregating groups of {} trials...", TRIALS_PER_GROUP);
    let table = aggregate(&trials).context("Failed to aggregate trials")?;

    debug!("Built statistics table with {} rows", table.len());

    // Step 4: Write the statistics table
    info!("Step 4/5: Writing statistics table...");
    let stats_path = config.stats_path();
    write_stats_table(&table, &stats_path).context("Failed to write statistics table")?;
    info!("✓ Statistics written to: {}", stats_path.display());

    // Step 5: Render and write charts
    info!("Step 5/5: Rendering charts...");
    let charts = render_all(&table, &style).context("Failed to render charts")?;
    let chart_paths = write_charts(&charts, config)?;
    let fits: Vec<FitSummary> = charts.iter().map(RenderedChart::fit_summary).collect();

    let report_path = if args.write_report {
        let report = build_report(&table, fits.clone(), combined.file_count(), trials.len());
        let path = config.report_path();
        write_report(&report, &path).context("Failed to write JSON report")?;
        info!("✓ Report written to: {}", path.display());
        Some(path)
    } else {
        None
    };

    if args.print_summary {
        print_summary(&table, &fits);
    }

    let elapsed = start_time.elapsed();
    info!("Run completed in {:.2}s", elapsed.as_secs_f64());

    Ok(RunOutputs {
        combined: combined_path,
        stats: stats_path,
        report: report_path,
        charts: chart_paths,
    })
}

/// Write every rendered chart under the figures directory
///
/// **Public** - shared with the plot command
pub fn write_charts(charts: &[RenderedChart], config: &PipelineConfig) -> Result<Vec<PathBuf>> {
    let figures_dir = config.figures_dir();
    let mut paths = Vec::with_capacity(charts.len());

    for chart in charts {
        let path = figures_dir.join(chart.file_name());
        write_png(&chart.png, &path)
            .with_context(|| format!("Failed to write {} chart", chart.kind))?;
        info!("✓ Chart written to: {}", path.display());
        paths.push(path);
    }

    Ok(paths)
}

/// Build the JSON report for a table
///
/// **Public** - useful for tests and library callers
pub fn build_report(
    table: &StatsTable,
    fits: Vec<FitSummary>,
    source_files: usize,
    trial_count: usize,
) -> StatsReport {
    StatsReport {
        version: SCHEMA_VERSION.to_string(),
        source_files,
        trial_count,
        trials_per_group: TRIALS_PER_GROUP,
        rows: table.rows.clone(),
        fits,
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}

/// Print table and fits to stdout
///
/// **Public** - shared with the aggregate command
pub fn print_summary(table: &StatsTable, fits: &[FitSummary]) {
    println!("\n{}", "=".repeat(80));
    println!("BENCHMARK SUMMARY");
    println!("{}", "=".repeat(80));
    println!("Tree sizes: {}", table.len());
    println!("\n{}", table.summary());
    if !fits.is_empty() {
        println!("{}", generate_text_summary(fits));
    }
    println!("{}", "=".repeat(80));
}

/// Validate pipeline configuration
///
/// **Public** - can be called before execute_run for early validation
///
/// # Returns
/// Ok if both directories exist and a configured style sheet exists
pub fn validate_config(config: &PipelineConfig) -> Result<()> {
    if config.input_dir.as_os_str().is_empty() {
        anyhow::bail!("Input directory cannot be empty");
    }

    if !config.input_dir.is_dir() {
        anyhow::bail!(
            "Input directory does not exist or is not a directory: {}",
            config.input_dir.display()
        );
    }

    if !config.output_dir.is_dir() {
        anyhow::bail!(
            "Output directory does not exist or is not a directory: {}",
            config.output_dir.display()
        );
    }

    if let Some(style) = &config.style_path {
        if !style.is_file() {
            anyhow::bail!("Style sheet not found: {}", style.display());
        }
    }

    Ok(())
}
