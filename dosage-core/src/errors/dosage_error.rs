//! Top-level dosage pipeline errors.

use super::error_code::{self, DosageErrorCode};
use super::law_error::LawError;
use super::regression_error::RegressionError;

/// Errors that abort a dosage computation. Any of these means no partial
/// result is returned.
#[derive(Debug, thiserror::Error)]
pub enum DosageError {
    #[error(
        "At least {required} experimental points (rich, pilot, lean) are required, got {actual}"
    )]
    InsufficientPoints { required: usize, actual: usize },

    #[error("{quantity} must be positive, got {value}")]
    NonPositive { quantity: &'static str, value: f64 },

    #[error(transparent)]
    Law(#[from] LawError),

    #[error(transparent)]
    Regression(#[from] RegressionError),
}

impl DosageErrorCode for DosageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientPoints { .. } => error_code::INSUFFICIENT_DATA,
            Self::NonPositive { .. } => error_code::INVALID_INPUT,
            Self::Law(e) => e.error_code(),
            Self::Regression(e) => e.error_code(),
        }
    }
}
