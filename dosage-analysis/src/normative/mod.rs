//! Normative rule sets: durability limits and the dosage strength rule.

pub mod durability;
pub mod strength;
pub mod types;

pub use types::{NormativeLimits, Validation};
