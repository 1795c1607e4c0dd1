//! Generic construction trait for config-driven instantiation.
//!
//! # Validation Contract
//!
//! Implementations **must** validate the configuration during
//! construction.  A successfully constructed value is guaranteed to start
//! in a valid state.

use crate::error::AmmError;

/// Builds a value from a configuration struct.
///
/// # Implementors
///
/// - `impl FromConfig<EngineConfig> for PoolEngine<A, C>` with default
///   (empty) ledgers.
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`] if the configuration is
/// invalid.
pub trait FromConfig<C> {
    /// Creates a new instance from the given configuration.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if any parameter is out of
    ///   range or inconsistent.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
