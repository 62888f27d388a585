//! Behavior law (Abrams, Lyse, Molinari) errors.

use super::error_code::{self, DosageErrorCode};
use super::regression_error::RegressionError;

/// Errors that can occur while fitting or evaluating a behavior law.
#[derive(Debug, thiserror::Error)]
pub enum LawError {
    #[error("{law} law requires at least {required} experimental points, got {actual}")]
    InsufficientPoints {
        law: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("{quantity} must be positive, got {value}")]
    NonPositiveInput { quantity: &'static str, value: f64 },

    #[error(
        "Target strength ({target} MPa) must be below the Abrams ceiling k1 ({ceiling} MPa)"
    )]
    UnreachableTarget { target: f64, ceiling: f64 },

    #[error("Molinari denominator k5 + k6*m is not positive at m = {m}")]
    DegenerateDenominator { m: f64 },

    #[error("Lyse slope k4 is zero: dry ratio cannot be inverted")]
    ZeroSlope,

    #[error(transparent)]
    Regression(#[from] RegressionError),
}

impl DosageErrorCode for LawError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientPoints { .. } => error_code::INSUFFICIENT_DATA,
            Self::NonPositiveInput { .. } => error_code::INVALID_INPUT,
            Self::UnreachableTarget { .. } => error_code::INVALID_TARGET,
            Self::DegenerateDenominator { .. } | Self::ZeroSlope => error_code::DEGENERATE_MODEL,
            Self::Regression(e) => e.error_code(),
        }
    }
}
