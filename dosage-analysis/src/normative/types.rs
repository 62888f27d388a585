//! Normative validation types.

use serde::{Deserialize, Serialize};

/// Durability limits for one (aggressiveness class, element type) cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormativeLimits {
    /// Maximum water/cement mass ratio.
    pub max_ac: f64,
    /// Minimum characteristic strength (MPa).
    pub min_fck: f64,
    /// Minimum cement content (kg/m³).
    pub min_cement: f64,
}

/// Outcome of checking a value against a normative limit.
///
/// `adjusted` equals `original` when the value complies; otherwise it holds
/// the clamped (or, for fck, the required minimum) value and `warning`
/// explains the rule that fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    pub original: f64,
    pub adjusted: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl Validation {
    /// A value that complies: adjusted == original, no warning.
    pub fn compliant(value: f64) -> Self {
        Self {
            valid: true,
            original: value,
            adjusted: value,
            warning: None,
        }
    }

    /// A value overridden by a rule, with the explanation.
    pub fn adjusted(original: f64, adjusted: f64, warning: String) -> Self {
        Self {
            valid: false,
            original,
            adjusted,
            warning: Some(warning),
        }
    }
}
