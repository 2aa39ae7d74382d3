//! PNG chart output writer.

use super::{create_parent_dirs, validate_output_path};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write encoded PNG bytes to a file
///
/// **Public** - main entry point for chart output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_png(png_bytes: &[u8], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing chart to: {}", output_path.display());

    validate_output_path(output_path)?;

    if output_path.extension().map_or(true, |ext| ext != "png") {
        debug!("Warning: File does not have .png extension: {}", output_path.display());
    }

    create_parent_dirs(output_path)?;

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(png_bytes)?;
    writer.flush()?;

    info!(
        "Chart written successfully ({} bytes, {:.2} KB)",
        png_bytes.len(),
        png_bytes.len() as f64 / 1024.0
    );

    Ok(())
}
