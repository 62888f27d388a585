//! Experimental trial-mix points.

use serde::{Deserialize, Serialize};

/// One trial mix of the experimental dosage study.
///
/// The IPT/EPUSP method conventionally uses three mixes spanning a range of
/// water/cement ratios: rich (low m, high fcj), pilot (intermediate), and
/// lean (high m, low fcj).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentalPoint {
    /// Dry ratio: mass of all aggregates (sand + gravel) per unit cement.
    pub m: f64,
    /// Water/cement mass ratio.
    pub ac: f64,
    /// 28-day compressive strength (MPa).
    pub fcj: f64,
    /// Fresh concrete density (kg/m³).
    pub density: f64,
}

impl ExperimentalPoint {
    pub fn new(m: f64, ac: f64, fcj: f64, density: f64) -> Self {
        Self { m, ac, fcj, density }
    }

    /// Whether the point lies in the physically plausible ranges the schema
    /// layer enforces (m > 0, 0 < a/c < 1, fcj > 0, density 1500–3000 kg/m³).
    pub fn is_plausible(&self) -> bool {
        self.m > 0.0
            && self.ac > 0.0
            && self.ac < 1.0
            && self.fcj > 0.0
            && self.density > 1500.0
            && self.density < 3000.0
    }
}
