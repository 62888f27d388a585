//! Durability limits by aggressiveness class and element type
//! (NBR 6118 Tab. 7.1, minimum cement per NBR 12655).
//!
//! fck only warns: it is a declared target outside the algorithm's control.
//! a/c and cement content are derived quantities the pipeline clamps to stay
//! code-compliant, and the clamped values feed forward.

use dosage_core::types::{AggressivenessClass, ElementType};

use super::types::{NormativeLimits, Validation};

/// Reinforced concrete (CA), rows indexed by aggressiveness class 1–4.
const LIMITS_REINFORCED: [NormativeLimits; 4] = [
    NormativeLimits { max_ac: 0.65, min_fck: 20.0, min_cement: 260.0 },
    NormativeLimits { max_ac: 0.60, min_fck: 25.0, min_cement: 280.0 },
    NormativeLimits { max_ac: 0.55, min_fck: 30.0, min_cement: 320.0 },
    NormativeLimits { max_ac: 0.45, min_fck: 40.0, min_cement: 360.0 },
];

/// Prestressed concrete (CP), rows indexed by aggressiveness class 1–4.
const LIMITS_PRESTRESSED: [NormativeLimits; 4] = [
    NormativeLimits { max_ac: 0.60, min_fck: 25.0, min_cement: 280.0 },
    NormativeLimits { max_ac: 0.55, min_fck: 30.0, min_cement: 320.0 },
    NormativeLimits { max_ac: 0.50, min_fck: 35.0, min_cement: 360.0 },
    NormativeLimits { max_ac: 0.45, min_fck: 40.0, min_cement: 400.0 },
];

/// Look up the limits for an (aggressiveness class, element type) pair.
pub fn limits(class: AggressivenessClass, element: ElementType) -> NormativeLimits {
    match element {
        ElementType::Reinforced => LIMITS_REINFORCED[class.index()],
        ElementType::Prestressed => LIMITS_PRESTRESSED[class.index()],
    }
}

/// Check a declared fck against the class minimum. Warns only; the
/// caller's target is never overridden.
pub fn validate_fck(fck: f64, class: AggressivenessClass, element: ElementType) -> Validation {
    let limits = limits(class, element);

    if fck < limits.min_fck {
        return Validation::adjusted(
            fck,
            limits.min_fck,
            format!(
                "Minimum fck for aggressiveness class {} ({}) is {} MPa; specified: {} MPa",
                class,
                element.abbreviation(),
                limits.min_fck,
                fck
            ),
        );
    }

    Validation::compliant(fck)
}

/// Clamp a derived water/cement ratio down to the class maximum.
pub fn validate_ac(ac: f64, class: AggressivenessClass, element: ElementType) -> Validation {
    let limits = limits(class, element);

    if ac > limits.max_ac {
        return Validation::adjusted(
            ac,
            limits.max_ac,
            format!(
                "Water/cement ratio limited from {:.3} to {} per NBR 6118 Tab. 7.1 \
                 (class {} - {}, {})",
                ac,
                limits.max_ac,
                class,
                class.description(),
                element.abbreviation()
            ),
        );
    }

    Validation::compliant(ac)
}

/// Clamp a derived cement consumption up to the class minimum.
pub fn validate_cement(cement: f64, class: AggressivenessClass, element: ElementType) -> Validation {
    let limits = limits(class, element);

    if cement < limits.min_cement {
        return Validation::adjusted(
            cement,
            limits.min_cement,
            format!(
                "Cement consumption raised from {:.0} to {} kg/m³ per NBR 6118 \
                 (class {}, {})",
                cement,
                limits.min_cement,
                class,
                element.abbreviation()
            ),
        );
    }

    Validation::compliant(cement)
}
