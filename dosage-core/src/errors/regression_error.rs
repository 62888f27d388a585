//! Linear regression errors.

use super::error_code::{self, DosageErrorCode};

/// Errors that can occur during an ordinary-least-squares fit.
#[derive(Debug, thiserror::Error)]
pub enum RegressionError {
    #[error("X and Y must have the same length: got {x_len} and {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("At least {required} points are required for regression, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("All X values are identical: slope is undefined")]
    DegenerateInput,
}

impl DosageErrorCode for RegressionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::LengthMismatch { .. } => error_code::INVALID_INPUT,
            Self::InsufficientData { .. } => error_code::INSUFFICIENT_DATA,
            Self::DegenerateInput => error_code::DEGENERATE_MODEL,
        }
    }
}
