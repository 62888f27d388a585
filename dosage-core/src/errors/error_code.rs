//! DosageErrorCode trait for API-boundary conversion.

/// Trait for converting engine errors to structured error codes.
/// Every error enum implements this so the calling API layer can map
/// failures to status codes without string-matching messages.
pub trait DosageErrorCode {
    /// Returns the error code string (e.g., "INSUFFICIENT_DATA").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn code_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the API boundary.
pub const INSUFFICIENT_DATA: &str = "INSUFFICIENT_DATA";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const DEGENERATE_MODEL: &str = "DEGENERATE_MODEL";
pub const INVALID_TARGET: &str = "INVALID_TARGET";
