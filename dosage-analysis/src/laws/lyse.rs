//! Lyse law: `m = k3 + k4 * (a/c)` at constant consistency.
//!
//! Already linear, so fitted directly with no transform.

use dosage_core::constants::{LAW_COEFFICIENT_DECIMALS, MIN_LAW_POINTS, PARAMETER_DECIMALS};
use dosage_core::errors::LawError;
use dosage_core::types::{ExperimentalPoint, LyseCoefficients};

use crate::regression;
use crate::util::round_to;

/// Fit k3 and k4 from experimental points (at least 3).
pub fn fit(points: &[ExperimentalPoint]) -> Result<LyseCoefficients, LawError> {
    if points.len() < MIN_LAW_POINTS {
        return Err(LawError::InsufficientPoints {
            law: "Lyse",
            required: MIN_LAW_POINTS,
            actual: points.len(),
        });
    }

    let xs: Vec<f64> = points.iter().map(|p| p.ac).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.m).collect();

    let fitted = regression::fit(&xs, &ys)?;

    Ok(LyseCoefficients {
        k3: round_to(fitted.intercept, LAW_COEFFICIENT_DECIMALS),
        k4: round_to(fitted.slope, LAW_COEFFICIENT_DECIMALS),
        r2: fitted.r2,
    })
}

/// Evaluate the law: dry ratio at a given water/cement ratio.
pub fn dry_ratio(ac: f64, coefficients: LyseCoefficients) -> Result<f64, LawError> {
    if ac <= 0.0 {
        return Err(LawError::NonPositiveInput {
            quantity: "a/c ratio",
            value: ac,
        });
    }

    let m = coefficients.k3 + coefficients.k4 * ac;
    Ok(round_to(m, PARAMETER_DECIMALS))
}

/// Invert the law: the water/cement ratio that produces dry ratio `m`.
pub fn water_cement_ratio(m: f64, coefficients: LyseCoefficients) -> Result<f64, LawError> {
    if coefficients.k4 == 0.0 {
        return Err(LawError::ZeroSlope);
    }

    let ac = (m - coefficients.k3) / coefficients.k4;
    Ok(round_to(ac, PARAMETER_DECIMALS))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical_points() -> Vec<ExperimentalPoint> {
        vec![
            ExperimentalPoint::new(3.5, 0.45, 42.0, 2350.0),
            ExperimentalPoint::new(5.0, 0.58, 32.0, 2300.0),
            ExperimentalPoint::new(6.5, 0.72, 22.0, 2250.0),
        ]
    }

    #[test]
    fn test_fit_canonical_points() {
        let coeffs = fit(&canonical_points()).unwrap();
        assert!((coeffs.k3 - (-1.4785)).abs() < 1e-4, "k3 = {}", coeffs.k3);
        assert!((coeffs.k4 - 11.1060).abs() < 1e-3, "k4 = {}", coeffs.k4);
        assert!(coeffs.r2 > 0.999);
    }

    #[test]
    fn test_fit_requires_three_points() {
        let err = fit(&canonical_points()[..1]).unwrap_err();
        assert!(matches!(err, LawError::InsufficientPoints { law: "Lyse", .. }));
    }

    #[test]
    fn test_dry_ratio_interpolates() {
        let coeffs = fit(&canonical_points()).unwrap();
        // Between the rich (0.45 -> 3.5) and pilot (0.58 -> 5.0) mixes.
        let m = dry_ratio(0.5, coeffs).unwrap();
        assert!(m > 3.5 && m < 5.0, "m = {}", m);
    }

    #[test]
    fn test_dry_ratio_rejects_non_positive_ac() {
        let coeffs = fit(&canonical_points()).unwrap();
        assert!(dry_ratio(0.0, coeffs).is_err());
    }

    #[test]
    fn test_inversion_round_trip() {
        let coeffs = fit(&canonical_points()).unwrap();
        for ac in [0.45, 0.58, 0.72] {
            let m = dry_ratio(ac, coeffs).unwrap();
            let back = water_cement_ratio(m, coeffs).unwrap();
            assert!((back - ac).abs() < 1e-3, "ac {} -> m {} -> {}", ac, m, back);
        }
    }

    #[test]
    fn test_zero_slope_cannot_invert() {
        let coeffs = LyseCoefficients {
            k3: 5.0,
            k4: 0.0,
            r2: 1.0,
        };
        let err = water_cement_ratio(5.0, coeffs).unwrap_err();
        assert!(matches!(err, LawError::ZeroSlope));
    }
}
