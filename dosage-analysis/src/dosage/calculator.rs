//! The dosage use case: strictly sequential pipeline, no branching back.
//!
//! 1. Validate the point count
//! 2. Average-density advisory
//! 3. fck vs. durability minimum (warning only)
//! 4. Dosage strength target
//! 5. Fit the three behavior laws
//! 6. Extrapolation advisory
//! 7. Invert Abrams for the target a/c
//! 8. Clamp a/c against durability limits
//! 9. Evaluate Lyse for the dry ratio
//! 10. Decompose into sand/gravel via mortar content
//! 11. Evaluate Molinari for cement consumption
//! 12. Clamp cement against the durability minimum
//! 13. Derive absolute consumption from the final cement content
//! 14. Round and assemble the result
//!
//! Fatal preconditions abort with no partial result; compliance adjustments
//! and advisories accumulate as ordered warnings on the successful result.

use tracing::debug;

use dosage_core::constants::{
    CONSUMPTION_DECIMALS, DENSITY_ADVISORY_THRESHOLD, EXTRAPOLATION_PERCENT_DECIMALS,
    MIN_LAW_POINTS, PARAMETER_DECIMALS, STRENGTH_DECIMALS, TRACE_DECIMALS,
};
use dosage_core::errors::DosageError;
use dosage_core::types::{
    DosageParameters, ExperimentalRange, LawCoefficientSet, MaterialQuantities, TraceResult,
    UnitTrace,
};

use crate::field::{batch, rounding};
use crate::laws::{abrams, lyse, molinari};
use crate::normative::{durability, strength};
use crate::util::round_to;

use super::types::DosageInput;

/// Orchestrates a complete IPT/EPUSP dosage computation.
///
/// Stateless: each call is an independent pure function of its input, so
/// identical inputs yield bit-identical results.
#[derive(Debug, Clone, Copy, Default)]
pub struct DosageCalculator;

impl DosageCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline.
    pub fn execute(&self, input: &DosageInput) -> Result<TraceResult, DosageError> {
        let points = &input.experimental_points;
        let target = &input.target;
        let mut warnings: Vec<String> = Vec::new();

        // 1. Point count: rich, pilot, and lean mixes at minimum.
        if points.len() < MIN_LAW_POINTS {
            return Err(DosageError::InsufficientPoints {
                required: MIN_LAW_POINTS,
                actual: points.len(),
            });
        }
        debug!(point_count = points.len(), "starting dosage computation");

        // 2. Densities above the threshold look theoretical (entrapped air
        //    not accounted for). Advisory only.
        let avg_density =
            points.iter().map(|p| p.density).sum::<f64>() / points.len() as f64;
        if avg_density > DENSITY_ADVISORY_THRESHOLD {
            warnings.push(format!(
                "Average density ({:.0} kg/m³) is high. Check whether the densities are \
                 experimental (with entrapped air) or theoretical.",
                avg_density
            ));
        }

        // 3. fck vs. the class minimum: the declared target is never
        //    overridden, only flagged.
        let fck_validation =
            durability::validate_fck(target.fck, target.aggressiveness_class, target.element_type);
        if let Some(warning) = fck_validation.warning {
            warnings.push(warning);
        }

        // 4. Dosage strength target.
        let fcj_target = strength::dosage_strength(target.fck, target.sd)?;

        // 5. Fit the three laws. Independent of each other.
        let abrams_coeffs = abrams::fit(points)?;
        let lyse_coeffs = lyse::fit(points)?;
        let molinari_coeffs = molinari::fit(points)?;
        debug!(
            fcj_target,
            abrams_k1 = abrams_coeffs.k1,
            abrams_r2 = abrams_coeffs.r2,
            "behavior laws fitted"
        );

        // 6. Extrapolation check: evaluating the fitted curves outside the
        //    calibrated strength range is a fidelity flag, not an error.
        let min_fcj = points.iter().map(|p| p.fcj).fold(f64::INFINITY, f64::min);
        let max_fcj = points.iter().map(|p| p.fcj).fold(f64::NEG_INFINITY, f64::max);
        let is_extrapolating = fcj_target < min_fcj || fcj_target > max_fcj;
        let mut extrapolation_percent = None;

        if is_extrapolating {
            let distance = if fcj_target < min_fcj {
                (min_fcj - fcj_target) / min_fcj * 100.0
            } else {
                (fcj_target - max_fcj) / max_fcj * 100.0
            };
            let percent = round_to(distance, EXTRAPOLATION_PERCENT_DECIMALS);
            extrapolation_percent = Some(percent);
            warnings.push(format!(
                "EXTRAPOLATION: target fcj ({:.1} MPa) is {}% outside the experimental \
                 range [{:.1}-{:.1} MPa]. The result may be inaccurate.",
                fcj_target, percent, min_fcj, max_fcj
            ));
        }

        // 7. Invert Abrams for the raw water/cement ratio.
        let raw_ac = abrams::target_ac(fcj_target, abrams_coeffs)?;

        // 8. Durability clamp. The adjusted value feeds every later stage.
        let ac_validation =
            durability::validate_ac(raw_ac, target.aggressiveness_class, target.element_type);
        if let Some(warning) = ac_validation.warning {
            warnings.push(warning);
        }
        let target_ac = ac_validation.adjusted;

        // 9. Dry ratio via Lyse at the (possibly clamped) a/c.
        let target_m = lyse::dry_ratio(target_ac, lyse_coeffs)?;

        // 10. Mortar decomposition: alpha = (1 + sand) / (1 + m) * 100,
        //     solved for the sand share. Non-physical shares are returned
        //     as-is so the caller can see the problem.
        let alpha = target.mortar_content;
        let sand = alpha * (1.0 + target_m) / 100.0 - 1.0;
        let gravel = target_m - sand;

        if sand <= 0.0 {
            warnings.push(format!(
                "Mortar content ({alpha}%) yields a non-positive sand share. \
                 Adjust the mortar content."
            ));
        }
        if gravel <= 0.0 {
            warnings.push(format!(
                "Mortar content ({alpha}%) yields a non-positive gravel share. \
                 Adjust the mortar content."
            ));
        }

        // 11. Cement consumption via Molinari.
        let raw_cement = molinari::cement_consumption(target_m, molinari_coeffs)?;

        // 12. Minimum cement clamp.
        let cement_validation = durability::validate_cement(
            raw_cement,
            target.aggressiveness_class,
            target.element_type,
        );
        if let Some(warning) = cement_validation.warning {
            warnings.push(warning);
        }
        let cement_consumption = cement_validation.adjusted;

        // 13. Remaining materials from the final cement content. Water is
        //     a/c times the clamped cement, so a cement clamp compounds into
        //     the water demand.
        let sand_consumption = sand * cement_consumption;
        let gravel_consumption = gravel * cement_consumption;
        let water_consumption = target_ac * cement_consumption;

        debug!(
            target_ac,
            target_m,
            cement_consumption,
            warning_count = warnings.len(),
            "dosage computation finished"
        );

        // 14. Round and assemble.
        let consumption = MaterialQuantities {
            cement: round_to(cement_consumption, CONSUMPTION_DECIMALS),
            sand: round_to(sand_consumption, CONSUMPTION_DECIMALS),
            gravel: round_to(gravel_consumption, CONSUMPTION_DECIMALS),
            water: round_to(water_consumption, CONSUMPTION_DECIMALS),
        };

        let raw_consumption = MaterialQuantities {
            cement: cement_consumption,
            sand: sand_consumption,
            gravel: gravel_consumption,
            water: water_consumption,
        };

        let field_consumption = input
            .rounding
            .map(|config| rounding::round(raw_consumption, config));

        let batch_result = input
            .batch
            .map(|config| batch::calculate(raw_consumption, config.container, config.total_volume));

        Ok(TraceResult {
            final_trace: UnitTrace {
                cement: 1.0,
                sand: round_to(sand, TRACE_DECIMALS),
                gravel: round_to(gravel, TRACE_DECIMALS),
                water: round_to(target_ac, TRACE_DECIMALS),
            },
            consumption,
            parameters: DosageParameters {
                fcj_target: round_to(fcj_target, STRENGTH_DECIMALS),
                target_ac: round_to(target_ac, PARAMETER_DECIMALS),
                target_m: round_to(target_m, PARAMETER_DECIMALS),
            },
            coefficients: LawCoefficientSet {
                abrams: abrams_coeffs,
                lyse: lyse_coeffs,
                molinari: molinari_coeffs,
            },
            experimental_range: ExperimentalRange {
                min_fcj: round_to(min_fcj, 1),
                max_fcj: round_to(max_fcj, 1),
                is_extrapolating,
                extrapolation_percent,
            },
            field_consumption,
            batch_result,
            warnings,
        })
    }
}
