//! Abrams law: `fcj = k1 / k2^(a/c)`.
//!
//! Linearized for regression as `log10(fcj) = log10(k1) - (a/c) * log10(k2)`,
//! so in `Y = A + BX` form: `k1 = 10^A`, `k2 = 10^(-B)`.

use dosage_core::constants::{
    LAW_COEFFICIENT_DECIMALS, MIN_LAW_POINTS, PARAMETER_DECIMALS, STRENGTH_DECIMALS,
};
use dosage_core::errors::LawError;
use dosage_core::types::{AbramsCoefficients, ExperimentalPoint};

use crate::regression;
use crate::util::round_to;

/// Fit k1 and k2 from experimental points (at least 3).
pub fn fit(points: &[ExperimentalPoint]) -> Result<AbramsCoefficients, LawError> {
    if points.len() < MIN_LAW_POINTS {
        return Err(LawError::InsufficientPoints {
            law: "Abrams",
            required: MIN_LAW_POINTS,
            actual: points.len(),
        });
    }
    if let Some(p) = points.iter().find(|p| p.fcj <= 0.0) {
        return Err(LawError::NonPositiveInput {
            quantity: "fcj",
            value: p.fcj,
        });
    }

    let xs: Vec<f64> = points.iter().map(|p| p.ac).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.fcj.log10()).collect();

    let fitted = regression::fit(&xs, &ys)?;

    let k1 = 10f64.powf(fitted.intercept);
    let k2 = 10f64.powf(-fitted.slope);

    Ok(AbramsCoefficients {
        k1: round_to(k1, LAW_COEFFICIENT_DECIMALS),
        k2: round_to(k2, LAW_COEFFICIENT_DECIMALS),
        r2: fitted.r2,
    })
}

/// Invert the law: the water/cement ratio that reaches `fcj_target`.
///
/// `a/c = (log10(k1) - log10(fcj_target)) / log10(k2)`. k1 is the asymptotic
/// strength ceiling as a/c approaches zero; a target at or above it is
/// unreachable.
pub fn target_ac(fcj_target: f64, coefficients: AbramsCoefficients) -> Result<f64, LawError> {
    if fcj_target <= 0.0 {
        return Err(LawError::NonPositiveInput {
            quantity: "target strength",
            value: fcj_target,
        });
    }
    if fcj_target >= coefficients.k1 {
        return Err(LawError::UnreachableTarget {
            target: fcj_target,
            ceiling: coefficients.k1,
        });
    }

    let ac = (coefficients.k1.log10() - fcj_target.log10()) / coefficients.k2.log10();
    Ok(round_to(ac, PARAMETER_DECIMALS))
}

/// Evaluate the law: strength (MPa) at a given water/cement ratio.
pub fn strength(ac: f64, coefficients: AbramsCoefficients) -> Result<f64, LawError> {
    if ac <= 0.0 {
        return Err(LawError::NonPositiveInput {
            quantity: "a/c ratio",
            value: ac,
        });
    }

    let fcj = coefficients.k1 / coefficients.k2.powf(ac);
    Ok(round_to(fcj, STRENGTH_DECIMALS))
}
