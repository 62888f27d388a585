//! The three empirical behavior laws of the IPT/EPUSP method.
//!
//! - Abrams: strength vs. water/cement ratio (exponential, log-linearized)
//! - Lyse: dry ratio vs. water/cement ratio (linear)
//! - Molinari: cement consumption vs. dry ratio (hyperbolic, linearized)
//!
//! Each law fits its coefficients through the regression engine and exposes
//! the forward evaluation and the inversion the orchestrator needs.

pub mod abrams;
pub mod lyse;
pub mod molinari;

pub use dosage_core::types::{AbramsCoefficients, LyseCoefficients, MolinariCoefficients};
