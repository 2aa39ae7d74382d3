//! PNG chart generation with plotters.
//!
//! Every chart is drawn into its own in-memory RGB canvas and encoded to
//! PNG bytes, so nothing carries over from one chart to the next and no
//! file is touched here.

use super::fit::{linear_fit, LinearFit};
use super::style::ChartStyle;
use crate::aggregator::StatsTable;
use crate::parser::schema::{FitSummary, StatsRow};
use crate::utils::config::CHART_DPI;
use crate::utils::error::ChartError;
use log::{debug, info};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::fmt;
use std::ops::Range;

const AXIS_PADDING: f64 = 0.05;
const METERS_PER_INCH: f64 = 0.0254;

/// Table column that can be put on a chart axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Nodes,
    HeightMean,
    InsertTimeMean,
    DeleteTimeMean,
    LogNodes,
    NLogN,
}

impl Column {
    pub fn value(self, row: &StatsRow) -> f64 {
        match self {
            Column::Nodes => row.nodes,
            Column::HeightMean => row.height_mean,
            Column::InsertTimeMean => row.insert_time_mean,
            Column::DeleteTimeMean => row.delete_time_mean,
            Column::LogNodes => row.log_nodes,
            Column::NLogN => row.n_log_n,
        }
    }

    /// Header of the column in the statistics table
    pub fn header(self) -> &'static str {
        match self {
            Column::Nodes => "Nodes",
            Column::HeightMean => "Height mean",
            Column::InsertTimeMean => "Insert-time mean",
            Column::DeleteTimeMean => "Delete-time mean",
            Column::LogNodes => "Log(Nodes)",
            Column::NLogN => "n*Log(n)",
        }
    }
}

/// The charts produced for every run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    TreeHeight,
    InsertionTime,
    DeletionTime,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [
        ChartKind::TreeHeight,
        ChartKind::InsertionTime,
        ChartKind::DeletionTime,
    ];

    pub fn spec(self) -> ChartSpec {
        match self {
            ChartKind::TreeHeight => ChartSpec {
                x: Column::LogNodes,
                y: Column::HeightMean,
                x_label: "log(n)",
                y_label: "Average height",
                file_name: "tree_height_analysis.png",
                origin_at_zero: false,
            },
            ChartKind::InsertionTime => ChartSpec {
                x: Column::NLogN,
                y: Column::InsertTimeMean,
                x_label: "n*log(n)",
                y_label: "Processing time (s)",
                file_name: "processing_time_insertion.png",
                origin_at_zero: true,
            },
            ChartKind::DeletionTime => ChartSpec {
                x: Column::NLogN,
                y: Column::DeleteTimeMean,
                x_label: "n*log(n)",
                y_label: "Processing time (s)",
                file_name: "processing_time_suppression.png",
                origin_at_zero: true,
            },
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::TreeHeight => "tree height",
            ChartKind::InsertionTime => "insertion time",
            ChartKind::DeletionTime => "deletion time",
        };
        write!(f, "{}", name)
    }
}

/// What to plot and how to label it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSpec {
    pub x: Column,
    pub y: Column,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub file_name: &'static str,

    /// Clamp both axes to start at zero
    pub origin_at_zero: bool,
}

impl ChartSpec {
    /// (x, y) points in table order
    pub fn series(&self, table: &StatsTable) -> Vec<(f64, f64)> {
        table
            .rows
            .iter()
            .map(|row| (self.x.value(row), self.y.value(row)))
            .collect()
    }
}

/// Axis ranges of one chart
#[derive(Debug, Clone, PartialEq)]
pub struct AxisBounds {
    pub x: Range<f64>,
    pub y: Range<f64>,
}

/// Compute padded axis ranges covering the data and the fit line
///
/// With `origin_at_zero` both lower bounds are fixed at 0.
pub fn axis_bounds(points: &[(f64, f64)], fit: &LinearFit, origin_at_zero: bool) -> AxisBounds {
    let (x_lo, x_hi) = extent(points.iter().map(|p| p.0));
    let fit_ys = [fit.predict(x_lo), fit.predict(x_hi)];
    let (y_lo, y_hi) = extent(points.iter().map(|p| p.1).chain(fit_ys));

    if origin_at_zero {
        AxisBounds {
            x: 0.0..padded_upper(0.0, x_hi),
            y: 0.0..padded_upper(0.0, y_hi),
        }
    } else {
        AxisBounds {
            x: padded(x_lo, x_hi),
            y: padded(y_lo, y_hi),
        }
    }
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn padding(lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    if span > 0.0 {
        span * AXIS_PADDING
    } else if hi != 0.0 {
        hi.abs() * AXIS_PADDING
    } else {
        1.0
    }
}

fn padded(lo: f64, hi: f64) -> Range<f64> {
    let pad = padding(lo, hi);
    (lo - pad)..(hi + pad)
}

fn padded_upper(lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return lo + 1.0;
    }
    hi + padding(lo, hi)
}

/// A rendered chart and the fit drawn on it
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub kind: ChartKind,
    pub fit: LinearFit,

    /// Encoded PNG file
    pub png: Vec<u8>,
}

impl RenderedChart {
    pub fn file_name(&self) -> &'static str {
        self.kind.spec().file_name
    }

    pub fn fit_summary(&self) -> FitSummary {
        let spec = self.kind.spec();
        FitSummary {
            chart: spec.file_name.to_string(),
            x_column: spec.x.header().to_string(),
            y_column: spec.y.header().to_string(),
            slope: self.fit.slope,
            intercept: self.fit.intercept,
            r_squared: self.fit.r_squared,
        }
    }
}

/// Fit the line for one chart without drawing it
///
/// **Public** - lets callers report fits when rendering is skipped
pub fn fit_chart(table: &StatsTable, kind: ChartKind) -> Result<LinearFit, ChartError> {
    let points = kind.spec().series(table);
    if points.is_empty() {
        return Err(ChartError::EmptySeries {
            chart: kind.to_string(),
        });
    }

    let (xs, ys): (Vec<f64>, Vec<f64>) = points.into_iter().unzip();
    linear_fit(&xs, &ys)
}

/// Render one chart to PNG bytes
///
/// **Public** - main entry point for chart generation
///
/// Draws the data as a connected line with markers ("Data") and the
/// least-squares fit as a dashed line over the same x domain
/// ("Linear relationship").
///
/// # Errors
/// * `ChartError::EmptySeries` - table has no rows
/// * `ChartError::DegenerateFit` - non-finite values in the series
/// * `ChartError::Style` - invalid color or size in the style
/// * `ChartError::Render` - drawing failed (e.g. font unavailable)
/// * `ChartError::Encode` - PNG encoding failed
pub fn render_chart(
    table: &StatsTable,
    kind: ChartKind,
    style: &ChartStyle,
) -> Result<RenderedChart, ChartError> {
    style.validate()?;

    let spec = kind.spec();
    let fit = fit_chart(table, kind)?;
    let points = spec.series(table);
    let bounds = axis_bounds(&points, &fit, spec.origin_at_zero);

    debug!(
        "Rendering {} chart: {} points, x {:?}, y {:?}",
        kind,
        points.len(),
        bounds.x,
        bounds.y
    );

    let data_color = style.data_rgb()?;
    let fit_color = style.fit_rgb()?;
    let background = style.background_rgb()?;
    let text_color = style.text_rgb()?;

    let (width, height) = style.pixel_size();
    let font_px = style.font_px();
    let line_px = style.line_px();
    let (legend_sample_px, legend_area_px) = legend_layout(style);
    let legend_len = legend_sample_px as i32;
    let tick_formatter: fn(&f64) -> String = format_tick;

    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&background).map_err(render_error)?;

        let text_style = (style.font_family.as_str(), font_px as f64)
            .into_font()
            .color(&text_color);

        let mut chart = ChartBuilder::on(&root)
            .margin(style.margin_px())
            .margin_right(style.margin_px() + font_px * 2)
            .x_label_area_size(font_px * 3)
            .y_label_area_size(font_px * 4)
            .build_cartesian_2d(bounds.x.clone(), bounds.y.clone())
            .map_err(render_error)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(spec.x_label)
            .y_desc(spec.y_label)
            .x_label_formatter(&tick_formatter)
            .y_label_formatter(&tick_formatter)
            .label_style(text_style.clone())
            .axis_desc_style(text_style.clone())
            .axis_style(text_color.stroke_width((line_px / 2).max(1)));
        if !style.grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(render_error)?;

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                data_color.stroke_width(line_px),
            ))
            .map_err(render_error)?
            .label("Data")
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + legend_len, y)], data_color.stroke_width(line_px))
            });

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&point| Circle::new(point, style.marker_px(), data_color.filled())),
            )
            .map_err(render_error)?;

        let (mut x_lo, mut x_hi) = extent(points.iter().map(|p| p.0));
        if x_hi <= x_lo {
            // a single x value: draw the flat fit across the axis
            x_lo = bounds.x.start;
            x_hi = bounds.x.end;
        }
        let fit_line = vec![(x_lo, fit.predict(x_lo)), (x_hi, fit.predict(x_hi))];
        chart
            .draw_series(DashedLineSeries::new(
                fit_line,
                (font_px / 2).max(1),
                (font_px / 3).max(1),
                fit_color.stroke_width(line_px),
            ))
            .map_err(render_error)?
            .label("Linear relationship")
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + legend_len, y)], fit_color.stroke_width(line_px))
            });

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .legend_area_size(legend_area_px)
            .label_font(text_style)
            .background_style(background.mix(0.8))
            .border_style(text_color)
            .draw()
            .map_err(render_error)?;

        root.present().map_err(render_error)?;
    }

    let png = encode_png(&buffer, width, height, CHART_DPI)?;

    info!(
        "Rendered {} chart ({}x{} px, {} bytes)",
        kind,
        width,
        height,
        png.len()
    );

    Ok(RenderedChart { kind, fit, png })
}

/// Legend sample line length and the legend area reserved for it, in pixels
///
/// The area is wider than the sample so the label text starts after it.
pub fn legend_layout(style: &ChartStyle) -> (u32, u32) {
    let font_px = style.font_px();
    let sample = font_px * 2;
    (sample, sample + font_px / 2)
}

/// Axis tick label without a trailing `.0`
pub fn format_tick(value: &f64) -> String {
    let value = *value;
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-3..1e7).contains(&magnitude) {
        return format!("{:.2e}", value);
    }

    let text = format!("{:.6}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Render every chart in `ChartKind::ALL` order
pub fn render_all(table: &StatsTable, style: &ChartStyle) -> Result<Vec<RenderedChart>, ChartError> {
    ChartKind::ALL
        .iter()
        .map(|&kind| render_chart(table, kind, style))
        .collect()
}

/// Encode an RGB buffer as PNG with a physical resolution of `dpi`
pub fn encode_png(rgb: &[u8], width: u32, height: u32, dpi: u32) -> Result<Vec<u8>, ChartError> {
    let pixels_per_meter = (dpi as f64 / METERS_PER_INCH).round() as u32;

    let mut png_bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_bytes, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: pixels_per_meter,
            yppu: pixels_per_meter,
            unit: png::Unit::Meter,
        }));

        let mut writer = encoder.write_header()?;
        writer.write_image_data(rgb)?;
        writer.finish()?;
    }

    Ok(png_bytes)
}

/// Generate a text summary of the fitted lines
///
/// **Public** - for `--summary` output
pub fn generate_text_summary(fits: &[FitSummary]) -> String {
    let mut out = String::from("Linear fits:\n");
    for fit in fits {
        out.push_str(&format!(
            "  {:<34} {} ~ {:.6e} * {} + {:.6e} (R² = {:.4})\n",
            fit.chart, fit.y_column, fit.slope, fit.x_column, fit.intercept, fit.r_squared
        ));
    }
    out
}

fn render_error(err: impl fmt::Display) -> ChartError {
    ChartError::Render(err.to_string())
}
