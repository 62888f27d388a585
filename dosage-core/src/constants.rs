//! Shared constants for the dosage engine.

/// Engine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum experimental points for fitting the behavior laws
/// (rich, pilot, and lean trial mixes).
pub const MIN_LAW_POINTS: usize = 3;

/// Minimum paired samples for an ordinary-least-squares fit.
pub const MIN_REGRESSION_POINTS: usize = 2;

/// One-sided 5th-percentile z-score of the standard normal distribution.
/// `fcj = fck + 1.65 * sd` guarantees at most 5% of production samples
/// fall below fck (NBR 12655 item 6.4).
pub const DOSAGE_QUANTILE_FACTOR: f64 = 1.65;

/// Fresh-concrete density above which the readings look theoretical
/// (entrapped air not accounted for). Advisory only.
pub const DENSITY_ADVISORY_THRESHOLD: f64 = 2450.0;

/// Reference slump (mm) the experimental points are assumed to target.
pub const REFERENCE_SLUMP_MM: f64 = 100.0;

/// Water correction per mm of slump deviation (L/m³ per mm),
/// the Brazilian field rule of ±3 L/m³ per ±10 mm.
pub const SLUMP_WATER_CORRECTION_PER_MM: f64 = 0.3;

/// Slump deviation (mm) above which the water correction deserves a warning.
pub const SLUMP_WARNING_THRESHOLD_MM: f64 = 50.0;

/// Standard cement bag mass (kg).
pub const CEMENT_BAG_KG: f64 = 50.0;

// ---- Rounding contract ----
//
// Every subcomponent rounds its own outputs to a fixed decimal count before
// returning, so golden-output tests stay bit-stable across ports.

/// Decimals for raw regression outputs (slope, intercept, r²).
pub const REGRESSION_DECIMALS: u32 = 6;

/// Decimals for Abrams and Lyse coefficients.
pub const LAW_COEFFICIENT_DECIMALS: u32 = 4;

/// Decimals for Molinari coefficients.
pub const MOLINARI_COEFFICIENT_DECIMALS: u32 = 6;

/// Decimals for intermediate parameters (target a/c, target m).
pub const PARAMETER_DECIMALS: u32 = 4;

/// Decimals for strengths (fcj) in MPa.
pub const STRENGTH_DECIMALS: u32 = 2;

/// Decimals for unit-trace ratios.
pub const TRACE_DECIMALS: u32 = 3;

/// Decimals for absolute material consumption (kg/m³ or L/m³).
pub const CONSUMPTION_DECIMALS: u32 = 1;

/// Decimals for per-point cement consumption (kg/m³).
pub const POINT_CONSUMPTION_DECIMALS: u32 = 2;

/// Decimals for container volume (m³).
pub const CONTAINER_VOLUME_DECIMALS: u32 = 4;

/// Decimals for the extrapolation distance percentage.
pub const EXTRAPOLATION_PERCENT_DECIMALS: u32 = 1;
