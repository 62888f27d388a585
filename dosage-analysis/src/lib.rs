//! Analysis engine for the IPT/EPUSP concrete mix dosage method.
//!
//! The pipeline fits three empirical behavior laws (Abrams, Lyse, Molinari)
//! to experimental trial mixes, inverts them to hit a target strength, and
//! validates the derived mix against durability code limits.

pub mod dosage;
pub mod field;
pub mod laws;
pub mod normative;
pub mod regression;
pub mod util;

// Re-export the engine entry points.
pub use dosage::{DosageCalculator, DosageInput};
pub use regression::RegressionResult;
