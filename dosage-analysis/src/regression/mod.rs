//! Ordinary-least-squares linear regression.
//!
//! Base engine for the linearized Abrams and Molinari fits and the direct
//! Lyse fit.

pub mod ols;
pub mod types;

pub use ols::fit;
pub use types::RegressionResult;
