//! Mixer container geometry for batch calculation.

use serde::{Deserialize, Serialize};

/// Container footprint shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerShape {
    Rectangular,
    Circular,
}

/// Mixing container dimensions, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixerContainer {
    pub shape: ContainerShape,
    /// Length (rectangular) or diameter (circular).
    pub length: f64,
    /// Width; only meaningful for rectangular containers. Falls back to
    /// `length` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    pub height: f64,
}

impl MixerContainer {
    /// Container volume in m³.
    pub fn volume(&self) -> f64 {
        match self.shape {
            ContainerShape::Rectangular => {
                self.length * self.width.unwrap_or(self.length) * self.height
            }
            ContainerShape::Circular => {
                let radius = self.length / 2.0;
                std::f64::consts::PI * radius * radius * self.height
            }
        }
    }

    /// Whether all dimensions are positive.
    pub fn is_valid(&self) -> bool {
        self.length > 0.0
            && self.height > 0.0
            && (self.shape != ContainerShape::Rectangular
                || self.width.unwrap_or(self.length) > 0.0)
    }
}

/// Container plus the total pour volume to split into batches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchConfig {
    pub container: MixerContainer,
    /// Total concrete volume desired (m³).
    pub total_volume: f64,
}
