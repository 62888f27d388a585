//! Structured span field definitions for dosage metrics.
//!
//! These constants define the standard field names used in tracing spans
//! across the pipeline stages. Using consistent field names enables
//! structured log queries.

/// Dosage strength target (MPa) computed for the run.
pub const FCJ_TARGET: &str = "fcj_target";

/// Water/cement ratio after the Abrams inversion.
pub const TARGET_AC: &str = "target_ac";

/// Dry ratio after the Lyse evaluation.
pub const TARGET_M: &str = "target_m";

/// Cement consumption (kg/m³) after the Molinari evaluation.
pub const CEMENT_CONSUMPTION: &str = "cement_consumption";

/// Number of experimental points supplied.
pub const POINT_COUNT: &str = "point_count";

/// Number of warnings accumulated by the run.
pub const WARNING_COUNT: &str = "warning_count";
