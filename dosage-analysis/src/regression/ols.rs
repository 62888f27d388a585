//! Ordinary least squares via the five-sum formulas.

use dosage_core::constants::{MIN_REGRESSION_POINTS, REGRESSION_DECIMALS};
use dosage_core::errors::RegressionError;

use crate::util::round_to;

use super::types::RegressionResult;

/// Fit `y = intercept + slope * x` to paired samples.
///
/// Outputs are rounded to 6 decimal places. When every y is identical the
/// total sum of squares is zero and r² is defined as 1 (perfect fit by
/// convention).
pub fn fit(xs: &[f64], ys: &[f64]) -> Result<RegressionResult, RegressionError> {
    if xs.len() != ys.len() {
        return Err(RegressionError::LengthMismatch {
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }
    if xs.len() < MIN_REGRESSION_POINTS {
        return Err(RegressionError::InsufficientData {
            required: MIN_REGRESSION_POINTS,
            actual: xs.len(),
        });
    }

    let n = xs.len() as f64;

    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();
    let sum_xx: f64 = xs.iter().map(|x| x * x).sum();

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return Err(RegressionError::DegenerateInput);
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    let y_mean = sum_y / n;
    let ss_total: f64 = ys.iter().map(|y| (y - y_mean).powi(2)).sum();
    let ss_residual: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (y - (intercept + slope * x)).powi(2))
        .sum();

    let r2 = if ss_total == 0.0 {
        1.0
    } else {
        1.0 - ss_residual / ss_total
    };

    Ok(RegressionResult {
        slope: round_to(slope, REGRESSION_DECIMALS),
        intercept: round_to(intercept, REGRESSION_DECIMALS),
        r2: round_to(r2, REGRESSION_DECIMALS),
    })
}
