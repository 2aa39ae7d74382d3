//! Descriptive statistics over a slice of measurements.
//!
//! Variances are population variances (divisor `n`), matching how the
//! benchmark results have always been reported.

/// Mean and population variance of one measurement
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Moments {
    pub mean: f64,
    pub variance: f64,
}

/// Calculate mean and population variance
///
/// **Public** - main entry point for per-group statistics
///
/// Values are shifted by the first element before summing, so identical
/// values give a variance of exactly zero and a single value gives
/// `(value, 0)`.
///
/// # Returns
/// `Moments { mean: NaN, variance: NaN }` for an empty slice
pub fn summarize(values: &[f64]) -> Moments {
    let Some(&shift) = values.first() else {
        return Moments {
            mean: f64::NAN,
            variance: f64::NAN,
        };
    };

    let n = values.len() as f64;
    let shifted_mean = values.iter().map(|v| v - shift).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|v| {
            let d = v - shift - shifted_mean;
            d * d
        })
        .sum::<f64>()
        / n;

    Moments {
        mean: shift + shifted_mean,
        variance,
    }
}

/// Arithmetic mean
pub fn mean(values: &[f64]) -> f64 {
    summarize(values).mean
}

/// Mean of squared deviations from the mean (divisor `n`, not `n - 1`)
pub fn population_variance(values: &[f64]) -> f64 {
    summarize(values).variance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        let m = summarize(&[42.5]);
        assert_eq!(m.mean, 42.5);
        assert_eq!(m.variance, 0.0);
    }

    #[test]
    fn test_identical_values_zero_variance() {
        // 0.1 is not exactly representable; the shift keeps this exact
        let values = vec![0.1; 100];
        let m = summarize(&values);
        assert_eq!(m.mean, 0.1);
        assert_eq!(m.variance, 0.0);
    }

    #[test]
    fn test_population_not_sample() {
        // sample variance would be 32/7
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values), 5.0);
        assert_eq!(population_variance(&values), 4.0);
    }

    #[test]
    fn test_alternating_values() {
        let values: Vec<f64> = (0..100).map(|i| if i % 2 == 0 { 20.0 } else { 30.0 }).collect();
        let m = summarize(&values);
        assert_eq!(m.mean, 25.0);
        assert_eq!(m.variance, 25.0);
    }

    #[test]
    fn test_variance_positive_when_values_differ() {
        let mut values = vec![3.0; 100];
        values[57] = 3.000001;
        assert!(population_variance(&values) > 0.0);
    }

    #[test]
    fn test_empty_is_nan() {
        let m = summarize(&[]);
        assert!(m.mean.is_nan());
        assert!(m.variance.is_nan());
    }
}
