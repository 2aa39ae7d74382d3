//! Chart generation using plotters.
//!
//! This module turns the statistics table into PNG charts, each with a
//! least-squares line overlay showing how well the measurement follows
//! the expected complexity.

pub mod fit;
pub mod generator;
pub mod style;

// Re-export main types
pub use fit::{linear_fit, LinearFit};
pub use generator::{
    axis_bounds, encode_png, fit_chart, format_tick, generate_text_summary, legend_layout,
    render_all, render_chart, AxisBounds, ChartKind, ChartSpec, Column, RenderedChart,
};
pub use style::{load_style, parse_color, ChartStyle};
