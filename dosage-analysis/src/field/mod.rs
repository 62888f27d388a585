//! Field utilities: practical rounding, mixer batches, and the slump water
//! correction. Pure consumers of the orchestrator's consumption output.

pub mod batch;
pub mod rounding;
pub mod slump;
