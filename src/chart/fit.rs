//! Ordinary least-squares line fit.

use crate::utils::error::ChartError;
use log::warn;

/// `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,

    /// Coefficient of determination; 1.0 when y is constant
    pub r_squared: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a degree-1 polynomial to `(xs, ys)` by least squares
///
/// With a single point, or when every x is equal, the slope is not
/// determined. The minimum-norm solution is returned instead
/// (slope 0, intercept = mean y) and a warning is logged.
///
/// # Errors
/// * `ChartError::LengthMismatch` - series differ in length
/// * `ChartError::DegenerateFit` - no points, or a non-finite value
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Result<LinearFit, ChartError> {
    if xs.len() != ys.len() {
        return Err(ChartError::LengthMismatch {
            x: xs.len(),
            y: ys.len(),
        });
    }
    if xs.is_empty() {
        return Err(ChartError::DegenerateFit);
    }

    let n = xs.len() as f64;
    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - x_mean;
        let dy = y - y_mean;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    if !(sxx.is_finite() && sxy.is_finite() && syy.is_finite()) {
        return Err(ChartError::DegenerateFit);
    }

    let slope = if sxx == 0.0 {
        warn!(
            "Linear fit is rank deficient ({} points, x = {}); using a flat line",
            xs.len(),
            x_mean
        );
        0.0
    } else {
        sxy / sxx
    };
    let intercept = y_mean - slope * x_mean;

    let ss_res: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| {
            let r = y - (slope * x + intercept);
            r * r
        })
        .sum();
    let r_squared = if syy == 0.0 { 1.0 } else { 1.0 - ss_res / syy };

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}
