//! Field rounding configuration.

use serde::{Deserialize, Serialize};

/// Increments for rounding consumption to practical field quantities.
///
/// Typical values: water 1/5/10 L, cement 1/5/50 kg (50 = whole bags),
/// aggregates 1/5 kg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoundingConfig {
    /// Water increment (liters).
    pub water_increment: u32,
    /// Cement increment (kg).
    pub cement_increment: u32,
    /// Aggregate increment (kg).
    pub aggregate_increment: u32,
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            water_increment: 1,
            cement_increment: 1,
            aggregate_increment: 1,
        }
    }
}

impl RoundingConfig {
    /// Whether every increment is a usable step size.
    pub fn is_valid(&self) -> bool {
        self.water_increment > 0 && self.cement_increment > 0 && self.aggregate_increment > 0
    }
}
