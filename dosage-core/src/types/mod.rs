//! Domain types exchanged between the caller and the analysis engine.

pub mod coefficients;
pub mod point;
pub mod result;
pub mod target;

pub use coefficients::{
    AbramsCoefficients, LawCoefficientSet, LyseCoefficients, MolinariCoefficients,
};
pub use point::ExperimentalPoint;
pub use result::{
    BatchResult, DosageParameters, ExperimentalRange, FieldConsumption, MaterialQuantities,
    TraceResult, UnitTrace,
};
pub use target::{AggressivenessClass, DosageTarget, ElementType, PreparationCondition};
