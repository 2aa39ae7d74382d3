//! Treebench Report CLI
//!
//! Aggregates Cartesian tree benchmark results into a statistics table
//! and complexity charts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use treebench_report::commands::{
    display_version, execute_aggregate, execute_collect, execute_plot, execute_run,
    validate_report_file, PlotArgs, RunArgs,
};
use treebench_report::utils::config::PipelineConfig;

/// Treebench Report - statistics and charts for tree benchmarks
#[derive(Parser, Debug)]
#[command(name = "treebench")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Combine, aggregate and plot a result directory
    Run {
        /// Directory holding the benchmark result files
        #[arg(short, long, env = "TREEBENCH_INPUT_DIR")]
        input_dir: PathBuf,

        /// Existing directory receiving every output file
        #[arg(short, long, env = "TREEBENCH_OUTPUT_DIR", default_value = ".")]
        output_dir: PathBuf,

        /// JSON chart style sheet
        #[arg(short, long, env = "TREEBENCH_STYLE")]
        style: Option<PathBuf>,

        /// Print table and fits to stdout
        #[arg(long)]
        summary: bool,

        /// Skip the JSON report
        #[arg(long)]
        no_report: bool,
    },

    /// Combine result files into one file
    Collect {
        /// Directory holding the benchmark result files
        #[arg(short, long, env = "TREEBENCH_INPUT_DIR")]
        input_dir: PathBuf,

        /// Combined output file
        #[arg(short, long, default_value = "final_results.txt")]
        output: PathBuf,
    },

    /// Compute the statistics table from a combined file
    Aggregate {
        /// Combined results file
        #[arg(short, long, default_value = "final_results.txt")]
        input: PathBuf,

        /// Statistics CSV output
        #[arg(short, long, default_value = "final_results_stats.csv")]
        output: PathBuf,

        /// Print the table to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Render charts from a statistics table
    Plot {
        /// Statistics CSV written by `run` or `aggregate`
        #[arg(long, default_value = "final_results_stats.csv")]
        stats: PathBuf,

        /// Existing directory receiving the figures directory
        #[arg(short, long, env = "TREEBENCH_OUTPUT_DIR", default_value = ".")]
        output_dir: PathBuf,

        /// JSON chart style sheet
        #[arg(short, long, env = "TREEBENCH_STYLE")]
        style: Option<PathBuf>,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Run {
            input_dir,
            output_dir,
            style,
            summary,
            no_report,
        } => {
            let mut config = PipelineConfig::new(input_dir, output_dir);
            if let Some(style) = style {
                config = config.with_style(style);
            }

            let args = RunArgs {
                config,
                print_summary: summary,
                write_report: !no_report,
            };

            execute_run(args)?;
        }

        Commands::Collect { input_dir, output } => {
            execute_collect(&input_dir, &output)?;
        }

        Commands::Aggregate {
            input,
            output,
            summary,
        } => {
            execute_aggregate(&input, &output, summary)?;
        }

        Commands::Plot {
            stats,
            output_dir,
            style,
        } => {
            execute_plot(PlotArgs {
                stats,
                output_dir,
                style_path: style,
            })?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
