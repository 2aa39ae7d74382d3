use anyhow::Result;
use std::path::PathBuf;
use crate::chart::generate_text_summary;
use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    if report.version != SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported report version {} (expected {})",
            report.version,
            SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Generated: {}", report.generated_at);
    println!("  Source files: {}", report.source_files);
    println!("  Trials: {} ({} per tree size)", report.trial_count, report.trials_per_group);
    println!("  Tree sizes: {}", report.rows.len());

    if let (Some(first), Some(last)) = (report.rows.first(), report.rows.last()) {
        println!("  Nodes: {} .. {}", first.nodes, last.nodes);
    }

    if !report.fits.is_empty() {
        print!("{}", generate_text_summary(&report.fits));
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Treebench Report v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Statistics and charts for Cartesian tree benchmark results.");
}
