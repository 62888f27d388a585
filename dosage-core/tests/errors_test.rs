//! Tests for the dosage error handling system.

use std::collections::HashSet;

use dosage_core::errors::error_code::{self, DosageErrorCode};
use dosage_core::errors::{DosageError, LawError, RegressionError};

#[test]
fn test_all_errors_have_error_code() {
    let regression = RegressionError::DegenerateInput;
    assert!(!regression.error_code().is_empty());

    let law = LawError::ZeroSlope;
    assert!(!law.error_code().is_empty());

    let dosage = DosageError::InsufficientPoints {
        required: 3,
        actual: 1,
    };
    assert!(!dosage.error_code().is_empty());
}

#[test]
fn test_from_conversions() {
    let regression = RegressionError::DegenerateInput;
    let law: LawError = regression.into();
    assert!(matches!(law, LawError::Regression(RegressionError::DegenerateInput)));

    let law = LawError::ZeroSlope;
    let dosage: DosageError = law.into();
    assert!(matches!(dosage, DosageError::Law(LawError::ZeroSlope)));

    let regression = RegressionError::InsufficientData {
        required: 2,
        actual: 1,
    };
    let dosage: DosageError = regression.into();
    assert!(matches!(dosage, DosageError::Regression(_)));
}

#[test]
fn test_code_string_format() {
    let law = LawError::UnreachableTarget {
        target: 130.0,
        ceiling: 125.29,
    };
    let code_str = law.code_string();
    assert!(code_str.starts_with("[INVALID_TARGET]"));
    assert!(code_str.contains("130"));
}

#[test]
fn test_error_code_taxonomy_mapping() {
    assert_eq!(
        RegressionError::LengthMismatch { x_len: 3, y_len: 2 }.error_code(),
        error_code::INVALID_INPUT
    );
    assert_eq!(
        RegressionError::InsufficientData {
            required: 2,
            actual: 1
        }
        .error_code(),
        error_code::INSUFFICIENT_DATA
    );
    assert_eq!(
        RegressionError::DegenerateInput.error_code(),
        error_code::DEGENERATE_MODEL
    );
    assert_eq!(
        LawError::UnreachableTarget {
            target: 50.0,
            ceiling: 40.0
        }
        .error_code(),
        error_code::INVALID_TARGET
    );
    assert_eq!(
        LawError::DegenerateDenominator { m: 5.0 }.error_code(),
        error_code::DEGENERATE_MODEL
    );

    // Wrapped errors keep the inner code.
    let dosage: DosageError = LawError::from(RegressionError::DegenerateInput).into();
    assert_eq!(dosage.error_code(), error_code::DEGENERATE_MODEL);
}

#[test]
fn test_display_human_readable() {
    let errors: Vec<Box<dyn std::fmt::Display>> = vec![
        Box::new(RegressionError::LengthMismatch { x_len: 3, y_len: 2 }),
        Box::new(RegressionError::InsufficientData {
            required: 2,
            actual: 1,
        }),
        Box::new(RegressionError::DegenerateInput),
        Box::new(LawError::InsufficientPoints {
            law: "Abrams",
            required: 3,
            actual: 2,
        }),
        Box::new(LawError::NonPositiveInput {
            quantity: "a/c ratio",
            value: -0.1,
        }),
        Box::new(LawError::UnreachableTarget {
            target: 130.0,
            ceiling: 125.29,
        }),
        Box::new(LawError::DegenerateDenominator { m: 9.5 }),
        Box::new(LawError::ZeroSlope),
        Box::new(DosageError::InsufficientPoints {
            required: 3,
            actual: 2,
        }),
        Box::new(DosageError::NonPositive {
            quantity: "fck",
            value: 0.0,
        }),
    ];

    for error in &errors {
        let msg = error.to_string();
        // Should not contain Debug formatting artifacts
        assert!(!msg.contains("{ "), "Debug leak in: {}", msg);
        assert!(!msg.is_empty());
    }
}

#[test]
fn test_error_codes_unique() {
    let codes = [
        error_code::INSUFFICIENT_DATA,
        error_code::INVALID_INPUT,
        error_code::DEGENERATE_MODEL,
        error_code::INVALID_TARGET,
    ];

    let unique: HashSet<&str> = codes.iter().copied().collect();
    assert_eq!(codes.len(), unique.len(), "Duplicate error codes found");
}
