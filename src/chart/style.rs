//! Chart style sheet.
//!
//! A style sheet is a JSON object; every field is optional and falls back
//! to the built-in APA-like look. Sizes are in points or inches and are
//! converted to pixels at `CHART_DPI`.

use crate::utils::config::CHART_DPI;
use crate::utils::error::StyleError;
use log::{debug, info};
use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const POINTS_PER_INCH: f64 = 72.0;
const MAX_FIGURE_INCHES: f64 = 20.0;
const MAX_POINTS: f64 = 144.0;

/// Fonts, colors and layout shared by every chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub figure_width_in: f64,
    pub figure_height_in: f64,
    pub font_family: String,
    pub font_size_pt: f64,
    pub line_width_pt: f64,
    pub marker_size_pt: f64,
    pub margin_pt: f64,
    pub data_color: String,
    pub fit_color: String,
    pub background_color: String,
    pub text_color: String,
    pub grid: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            figure_width_in: 6.4,
            figure_height_in: 4.8,
            font_family: "serif".to_string(),
            font_size_pt: 10.0,
            line_width_pt: 1.0,
            marker_size_pt: 2.0,
            margin_pt: 6.0,
            data_color: "#0000ff".to_string(),
            fit_color: "#ff0000".to_string(),
            background_color: "#ffffff".to_string(),
            text_color: "#000000".to_string(),
            grid: false,
        }
    }
}

impl ChartStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas size in pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            inches_to_px(self.figure_width_in),
            inches_to_px(self.figure_height_in),
        )
    }

    pub fn font_px(&self) -> u32 {
        points_to_px(self.font_size_pt)
    }

    pub fn line_px(&self) -> u32 {
        points_to_px(self.line_width_pt)
    }

    pub fn marker_px(&self) -> u32 {
        points_to_px(self.marker_size_pt)
    }

    pub fn margin_px(&self) -> u32 {
        points_to_px(self.margin_pt)
    }

    pub fn data_rgb(&self) -> Result<RGBColor, StyleError> {
        parse_color(&self.data_color)
    }

    pub fn fit_rgb(&self) -> Result<RGBColor, StyleError> {
        parse_color(&self.fit_color)
    }

    pub fn background_rgb(&self) -> Result<RGBColor, StyleError> {
        parse_color(&self.background_color)
    }

    pub fn text_rgb(&self) -> Result<RGBColor, StyleError> {
        parse_color(&self.text_color)
    }

    /// Check sizes and colors
    ///
    /// **Public** - called by `load_style`, also useful for hand-built styles
    pub fn validate(&self) -> Result<(), StyleError> {
        for (name, inches) in [
            ("figure_width_in", self.figure_width_in),
            ("figure_height_in", self.figure_height_in),
        ] {
            if !(inches > 0.0 && inches <= MAX_FIGURE_INCHES) {
                return Err(StyleError::InvalidValue(format!(
                    "{} must be in (0, {}], got {}",
                    name, MAX_FIGURE_INCHES, inches
                )));
            }
        }

        for (name, points) in [
            ("font_size_pt", self.font_size_pt),
            ("line_width_pt", self.line_width_pt),
            ("marker_size_pt", self.marker_size_pt),
        ] {
            if !(points > 0.0 && points <= MAX_POINTS) {
                return Err(StyleError::InvalidValue(format!(
                    "{} must be in (0, {}], got {}",
                    name, MAX_POINTS, points
                )));
            }
        }

        if !(self.margin_pt >= 0.0 && self.margin_pt <= MAX_POINTS) {
            return Err(StyleError::InvalidValue(format!(
                "margin_pt must be in [0, {}], got {}",
                MAX_POINTS, self.margin_pt
            )));
        }

        if self.font_family.trim().is_empty() {
            return Err(StyleError::InvalidValue("font_family is empty".to_string()));
        }

        self.data_rgb()?;
        self.fit_rgb()?;
        self.background_rgb()?;
        self.text_rgb()?;

        Ok(())
    }
}

fn inches_to_px(inches: f64) -> u32 {
    (inches * CHART_DPI as f64).round().max(1.0) as u32
}

fn points_to_px(points: f64) -> u32 {
    (points * CHART_DPI as f64 / POINTS_PER_INCH).round().max(1.0) as u32
}

/// Parse `#rrggbb` into a color
pub fn parse_color(value: &str) -> Result<RGBColor, StyleError> {
    let invalid = || StyleError::InvalidColor(value.to_string());

    let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

/// Load the chart style
///
/// **Public** - used by the `run` and `plot` commands
///
/// # Arguments
/// * `path` - Style sheet to read, or `None` for the built-in style
///
/// # Errors
/// * `StyleError::Missing` - configured style sheet does not exist
/// * `StyleError::InvalidJson` - style sheet is not valid JSON
/// * `StyleError::InvalidColor` / `StyleError::InvalidValue` - bad field
pub fn load_style(path: Option<&Path>) -> Result<ChartStyle, StyleError> {
    let Some(path) = path else {
        debug!("No style sheet configured, using built-in style");
        return Ok(ChartStyle::default());
    };

    if !path.is_file() {
        return Err(StyleError::Missing(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|source| StyleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let style: ChartStyle = serde_json::from_reader(BufReader::new(file))?;
    style.validate()?;

    info!("Loaded chart style from: {}", path.display());

    Ok(style)
}
