//! Declarative engine configuration.
//!
//! [`EngineConfig`] carries the few parameters the pool engine is not
//! allowed to infer: the bootstrap liquidity floor and how it compares.

mod engine_config;

pub use engine_config::{BootstrapFloor, EngineConfig, MINIMUM_LIQUIDITY};
