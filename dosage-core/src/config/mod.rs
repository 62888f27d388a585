//! Optional feature configuration supplied by the caller.

pub mod batch_config;
pub mod rounding_config;

pub use batch_config::{BatchConfig, ContainerShape, MixerContainer};
pub use rounding_config::RoundingConfig;
