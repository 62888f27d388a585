//! Orchestrator input.

use serde::{Deserialize, Serialize};

use dosage_core::config::{BatchConfig, RoundingConfig};
use dosage_core::types::{DosageTarget, ExperimentalPoint};

/// Everything a dosage computation needs. The schema layer is expected to
/// have validated ranges already; the engine re-checks only the invariants
/// its own formulas depend on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DosageInput {
    /// Experimental trial mixes (at least 3: rich, pilot, lean).
    pub experimental_points: Vec<ExperimentalPoint>,
    /// Desired concrete specification.
    pub target: DosageTarget,
    /// Optional field rounding of the consumption output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounding: Option<RoundingConfig>,
    /// Optional mixer batch breakdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<BatchConfig>,
}

impl DosageInput {
    /// Input with no optional extensions.
    pub fn new(experimental_points: Vec<ExperimentalPoint>, target: DosageTarget) -> Self {
        Self {
            experimental_points,
            target,
            rounding: None,
            batch: None,
        }
    }
}
