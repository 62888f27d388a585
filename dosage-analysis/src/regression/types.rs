//! Regression output type.

use serde::{Deserialize, Serialize};

/// Fitted line `y = intercept + slope * x` with its goodness of fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope (B in `Y = A + BX`).
    pub slope: f64,
    /// Intercept (A in `Y = A + BX`).
    pub intercept: f64,
    /// Coefficient of determination, 0 (no fit) to 1 (perfect fit).
    pub r2: f64,
}
