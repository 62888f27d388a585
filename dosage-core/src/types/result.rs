//! Dosage computation output.

use serde::{Deserialize, Serialize};

use super::coefficients::LawCoefficientSet;

/// Unit-trace proportions, cement fixed at 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitTrace {
    /// Always 1.0; the trace is expressed per unit cement mass.
    pub cement: f64,
    /// Fine aggregate share.
    pub sand: f64,
    /// Coarse aggregate share.
    pub gravel: f64,
    /// Water share (the final water/cement ratio).
    pub water: f64,
}

/// Absolute material quantities. Cement, sand, and gravel in kg; water in
/// liters. Per m³ when describing consumption, per batch or total when
/// describing batches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialQuantities {
    pub cement: f64,
    pub sand: f64,
    pub gravel: f64,
    pub water: f64,
}

/// Intermediate parameters of the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DosageParameters {
    /// Dosage strength target fcj (MPa).
    pub fcj_target: f64,
    /// Final water/cement ratio (after any durability clamp).
    pub target_ac: f64,
    /// Final dry ratio.
    pub target_m: f64,
}

/// Where the target strength sits relative to the experimental points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentalRange {
    /// Lowest experimental fcj (MPa).
    pub min_fcj: f64,
    /// Highest experimental fcj (MPa).
    pub max_fcj: f64,
    /// Whether the target falls outside `[min_fcj, max_fcj]`.
    pub is_extrapolating: bool,
    /// Percentage distance outside the range, present only when
    /// extrapolating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extrapolation_percent: Option<f64>,
}

/// Consumption rounded to practical field increments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConsumption {
    /// Cement (kg/m³), rounded to the cement increment.
    pub cement: f64,
    /// Sand (kg/m³), rounded to the aggregate increment.
    pub sand: f64,
    /// Gravel (kg/m³), rounded to the aggregate increment.
    pub gravel: f64,
    /// Water (L/m³), rounded to the water increment.
    pub water: f64,
    /// Whole cement bags, present only when the cement increment is the
    /// standard 50 kg bag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cement_bags: Option<u32>,
}

/// Batch breakdown for a mixer container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    /// Container volume (m³).
    pub container_volume: f64,
    /// Total concrete volume requested (m³).
    pub total_volume: f64,
    /// Batches needed to reach the total volume.
    pub number_of_batches: u32,
    /// Material per batch.
    pub per_batch: MaterialQuantities,
    /// Material for the whole pour.
    pub total: MaterialQuantities,
}

/// Complete output of a dosage computation. Built once per call and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceResult {
    /// Unit trace (cement : sand : gravel : water).
    pub final_trace: UnitTrace,
    /// Consumption per m³ of concrete.
    pub consumption: MaterialQuantities,
    /// Intermediate calculation parameters.
    pub parameters: DosageParameters,
    /// The three fitted behavior laws.
    pub coefficients: LawCoefficientSet,
    /// Target strength vs. the calibrated experimental domain.
    pub experimental_range: ExperimentalRange,
    /// Field-rounded consumption, present when a rounding config was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_consumption: Option<FieldConsumption>,
    /// Batch breakdown, present when a container config was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_result: Option<BatchResult>,
    /// Non-blocking warnings, in the order the pipeline raised them.
    pub warnings: Vec<String>,
}
