//! Water correction for slump deviation.
//!
//! The experimental points are produced at a reference slump (100 mm). When
//! the job calls for a different slump the water consumption is corrected by
//! the field rule of ±3 L/m³ per ±10 mm.

use dosage_core::constants::{
    REFERENCE_SLUMP_MM, SLUMP_WARNING_THRESHOLD_MM, SLUMP_WATER_CORRECTION_PER_MM,
};

/// Water correction (L/m³) for a target slump. Positive means more water.
pub fn correction(target_slump: f64, reference_slump: Option<f64>) -> f64 {
    let reference = reference_slump.unwrap_or(REFERENCE_SLUMP_MM);
    (target_slump - reference) * SLUMP_WATER_CORRECTION_PER_MM
}

/// Apply the correction to a base water consumption (L/m³).
pub fn corrected_water(
    base_water: f64,
    target_slump: f64,
    reference_slump: Option<f64>,
) -> f64 {
    base_water + correction(target_slump, reference_slump)
}

/// Advisory warning when the slump deviation is large enough that the
/// correction should be checked experimentally.
pub fn warning(target_slump: f64, reference_slump: Option<f64>) -> Option<String> {
    let reference = reference_slump.unwrap_or(REFERENCE_SLUMP_MM);
    let delta = (target_slump - reference).abs();

    if delta > SLUMP_WARNING_THRESHOLD_MM {
        let correction = correction(target_slump, reference_slump);
        let direction = if correction > 0.0 { "increase" } else { "reduction" };
        Some(format!(
            "Slump water correction: {:.1} L/m³ {} for a {:.0} mm slump deviation. \
             Verify experimentally.",
            correction.abs(),
            direction,
            delta
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wetter_mix_needs_more_water() {
        // 150 mm target vs 100 mm reference: +15 L/m³.
        assert!((correction(150.0, None) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_drier_mix_needs_less_water() {
        // 60 mm target vs 100 mm reference: -12 L/m³.
        assert!((correction(60.0, None) + 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_reference_slump() {
        assert!((correction(100.0, Some(80.0)) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_corrected_water() {
        let corrected = corrected_water(210.0, 150.0, None);
        assert!((corrected - 225.0).abs() < 1e-9);
    }

    #[test]
    fn test_warning_only_beyond_threshold() {
        assert!(warning(140.0, None).is_none()); // 40 mm deviation
        assert!(warning(150.0, None).is_none()); // exactly 50 mm: still fine

        let w = warning(160.0, None).expect("60 mm deviation warns");
        assert!(w.contains("18.0 L/m³"));
        assert!(w.contains("increase"));

        let w = warning(40.0, None).expect("60 mm deviation below warns");
        assert!(w.contains("reduction"));
    }
}
