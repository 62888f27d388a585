//! Fitted behavior-law coefficients.
//!
//! All coefficient sets are derived, immutable values, recomputed fresh on
//! every dosage call from the current point set, never cached.

use serde::{Deserialize, Serialize};

/// Abrams law `fcj = k1 / k2^(a/c)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbramsCoefficients {
    /// Asymptotic strength ceiling as a/c approaches zero (MPa).
    pub k1: f64,
    /// Base of the exponential, typically 10–20 for Portland concretes.
    pub k2: f64,
    /// Coefficient of determination of the linearized fit.
    pub r2: f64,
}

/// Lyse law `m = k3 + k4 * (a/c)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LyseCoefficients {
    /// Intercept.
    pub k3: f64,
    /// Slope.
    pub k4: f64,
    pub r2: f64,
}

/// Molinari law `C = 1000 / (k5 + k6 * m)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MolinariCoefficients {
    /// Intercept of the linearized form `1000/C = k5 + k6 * m`.
    pub k5: f64,
    /// Slope of the linearized form.
    pub k6: f64,
    pub r2: f64,
}

/// The three law fits bundled for the result trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LawCoefficientSet {
    pub abrams: AbramsCoefficients,
    pub lyse: LyseCoefficients,
    pub molinari: MolinariCoefficients,
}
