//! Dosage target specification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structural element type, driving which durability table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    /// Reinforced concrete.
    #[serde(rename = "CA")]
    Reinforced,
    /// Prestressed concrete.
    #[serde(rename = "CP")]
    Prestressed,
}

impl ElementType {
    /// Normative abbreviation ("CA" / "CP").
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Reinforced => "CA",
            Self::Prestressed => "CP",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Environmental aggressiveness class (NBR 6118 Tab. 6.1), ordinal 1–4.
///
/// Durability limits tighten strictly as the class increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AggressivenessClass {
    /// I: weak (rural, submerged).
    Weak,
    /// II: moderate (urban).
    Moderate,
    /// III: strong (marine, industrial).
    Strong,
    /// IV: very strong (tidal splash, aggressive industrial).
    VeryStrong,
}

impl AggressivenessClass {
    pub const ALL: [Self; 4] = [Self::Weak, Self::Moderate, Self::Strong, Self::VeryStrong];

    /// Ordinal value 1–4 as used by the normative tables.
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::Weak => 1,
            Self::Moderate => 2,
            Self::Strong => 3,
            Self::VeryStrong => 4,
        }
    }

    /// Zero-based index into the 4-row durability tables.
    pub fn index(&self) -> usize {
        (self.ordinal() - 1) as usize
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Weak => "weak (rural, submerged)",
            Self::Moderate => "moderate (urban)",
            Self::Strong => "strong (marine, industrial)",
            Self::VeryStrong => "very strong (tidal splash, aggressive industrial)",
        }
    }
}

impl TryFrom<u8> for AggressivenessClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Weak),
            2 => Ok(Self::Moderate),
            3 => Ok(Self::Strong),
            4 => Ok(Self::VeryStrong),
            other => Err(format!("aggressiveness class must be 1-4, got {other}")),
        }
    }
}

impl From<AggressivenessClass> for u8 {
    fn from(value: AggressivenessClass) -> Self {
        value.ordinal()
    }
}

impl fmt::Display for AggressivenessClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ordinal())
    }
}

/// Concrete preparation condition (NBR 12655 Tab. 2), fixing the production
/// standard deviation when it was not measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreparationCondition {
    /// Rigorous control: all materials by mass, moisture corrected.
    A,
    /// Reasonable control: cement by mass, aggregates by volume, estimated
    /// moisture correction.
    B,
    /// Regular control: cement by mass, aggregates by volume, no correction.
    C,
}

impl PreparationCondition {
    /// Production standard deviation (MPa) for this condition.
    pub fn standard_deviation(&self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::B => 5.5,
            Self::C => 7.0,
        }
    }

    /// Infer the nearest condition from a measured standard deviation,
    /// or `None` when the deviation exceeds what the standard covers.
    pub fn infer(sd: f64) -> Option<Self> {
        if sd <= 4.75 {
            Some(Self::A)
        } else if sd <= 6.25 {
            Some(Self::B)
        } else if sd <= 7.5 {
            Some(Self::C)
        } else {
            None
        }
    }
}

/// Desired concrete specification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DosageTarget {
    /// Characteristic compressive strength (MPa).
    pub fck: f64,
    /// Production standard deviation (MPa), per preparation condition.
    pub sd: f64,
    /// Environmental aggressiveness class.
    pub aggressiveness_class: AggressivenessClass,
    /// Structural element type.
    pub element_type: ElementType,
    /// Desired slump (mm). Informational: the experimental points are
    /// assumed to already reflect it.
    pub slump: f64,
    /// Target mortar fraction (%), 40–65. Drives the sand/gravel split.
    pub mortar_content: f64,
}
