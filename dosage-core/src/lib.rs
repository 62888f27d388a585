//! Core vocabulary of the IPT/EPUSP concrete mix dosage engine.
//!
//! This crate carries no algorithms, only the domain types exchanged with
//! the analysis engine, the error taxonomy, optional feature configuration,
//! shared constants, and the tracing setup.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::{BatchConfig, ContainerShape, MixerContainer, RoundingConfig};
pub use errors::{DosageError, LawError, RegressionError};
pub use types::{
    AggressivenessClass, DosageTarget, ElementType, ExperimentalPoint, PreparationCondition,
    TraceResult,
};
