//! Molinari law (Priszkulnik & Kirilos form): `C = 1000 / (k5 + k6 * m)`.
//!
//! Linearized for regression as `1000/C = k5 + k6 * m`. The experimental
//! consumption of each trial mix is back-calculated from its fresh density:
//! `C = 1000 * γ / (1 + m + a/c)` with γ in kg/dm³.

use dosage_core::constants::{
    MIN_LAW_POINTS, MOLINARI_COEFFICIENT_DECIMALS, POINT_CONSUMPTION_DECIMALS,
};
use dosage_core::errors::LawError;
use dosage_core::types::{ExperimentalPoint, MolinariCoefficients};

use crate::regression;
use crate::util::round_to;

/// Back-calculate the real cement consumption (kg/m³) of one trial mix from
/// its measured fresh density.
pub fn consumption_from_density(point: ExperimentalPoint) -> Result<f64, LawError> {
    if point.m <= 0.0 {
        return Err(LawError::NonPositiveInput {
            quantity: "dry ratio (m)",
            value: point.m,
        });
    }
    if point.ac <= 0.0 {
        return Err(LawError::NonPositiveInput {
            quantity: "a/c ratio",
            value: point.ac,
        });
    }

    // density arrives in kg/m³; the formula takes kg/dm³.
    let density_dm3 = point.density / 1000.0;
    let consumption = (1000.0 * density_dm3) / (1.0 + point.m + point.ac);

    Ok(round_to(consumption, POINT_CONSUMPTION_DECIMALS))
}

/// Fit k5 and k6 from experimental points (at least 3).
pub fn fit(points: &[ExperimentalPoint]) -> Result<MolinariCoefficients, LawError> {
    if points.len() < MIN_LAW_POINTS {
        return Err(LawError::InsufficientPoints {
            law: "Molinari",
            required: MIN_LAW_POINTS,
            actual: points.len(),
        });
    }

    let xs: Vec<f64> = points.iter().map(|p| p.m).collect();
    let mut ys = Vec::with_capacity(points.len());
    for point in points {
        let consumption = consumption_from_density(*point)?;
        ys.push(1000.0 / consumption);
    }

    let fitted = regression::fit(&xs, &ys)?;

    Ok(MolinariCoefficients {
        k5: round_to(fitted.intercept, MOLINARI_COEFFICIENT_DECIMALS),
        k6: round_to(fitted.slope, MOLINARI_COEFFICIENT_DECIMALS),
        r2: fitted.r2,
    })
}

/// Evaluate the law: cement consumption (kg/m³) at dry ratio `m`.
pub fn cement_consumption(m: f64, coefficients: MolinariCoefficients) -> Result<f64, LawError> {
    if m <= 0.0 {
        return Err(LawError::NonPositiveInput {
            quantity: "dry ratio (m)",
            value: m,
        });
    }

    let denominator = coefficients.k5 + coefficients.k6 * m;
    if denominator <= 0.0 {
        // Non-physical: the fitted curve demands zero or negative cement.
        return Err(LawError::DegenerateDenominator { m });
    }

    Ok(round_to(1000.0 / denominator, POINT_CONSUMPTION_DECIMALS))
}
