//! Dosage strength rule (NBR 12655 item 6.4): `fcj = fck + 1.65 * sd`.

use dosage_core::constants::{DOSAGE_QUANTILE_FACTOR, STRENGTH_DECIMALS};
use dosage_core::errors::DosageError;
use dosage_core::types::PreparationCondition;

use crate::util::round_to;

/// Target strength to pursue in the dosage study so that at most 5% of
/// production samples fall below the characteristic fck.
pub fn dosage_strength(fck: f64, sd: f64) -> Result<f64, DosageError> {
    if fck <= 0.0 {
        return Err(DosageError::NonPositive {
            quantity: "fck",
            value: fck,
        });
    }
    if sd <= 0.0 {
        return Err(DosageError::NonPositive {
            quantity: "standard deviation (sd)",
            value: sd,
        });
    }

    Ok(round_to(fck + DOSAGE_QUANTILE_FACTOR * sd, STRENGTH_DECIMALS))
}

/// Same rule with the standard deviation taken from a preparation condition.
pub fn dosage_strength_for_condition(
    fck: f64,
    condition: PreparationCondition,
) -> Result<f64, DosageError> {
    dosage_strength(fck, condition.standard_deviation())
}
