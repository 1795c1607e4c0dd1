//! Configuration of the pool engine.

use core::fmt;

use crate::domain::Liquidity;
use crate::error::AmmError;

/// Default floor the first deposit into a pool must clear, in claim-token
/// units.
pub const MINIMUM_LIQUIDITY: Liquidity = Liquidity::new(1_000);

/// How bootstrap shares are compared against the minimum floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BootstrapFloor {
    /// Shares must be strictly greater than the minimum (`>`).
    #[default]
    Exclusive,
    /// Shares may equal the minimum (`>=`).
    Inclusive,
}

impl BootstrapFloor {
    /// Returns `true` if `minted` clears `minimum` under this comparison.
    #[must_use]
    pub fn admits(&self, minted: Liquidity, minimum: Liquidity) -> bool {
        match self {
            Self::Exclusive => minted > minimum,
            Self::Inclusive => minted >= minimum,
        }
    }
}

impl fmt::Display for BootstrapFloor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exclusive => write!(f, ">"),
            Self::Inclusive => write!(f, ">="),
        }
    }
}

/// Immutable parameters of a [`PoolEngine`](crate::engine::PoolEngine).
///
/// # Validation
///
/// - An [`Inclusive`](BootstrapFloor::Inclusive) floor of zero is rejected:
///   it would admit a bootstrap deposit that mints no shares at all.
///
/// # Examples
///
/// ```
/// use pair_amm::config::{BootstrapFloor, EngineConfig, MINIMUM_LIQUIDITY};
///
/// let cfg = EngineConfig::default();
/// assert_eq!(cfg.minimum_liquidity(), MINIMUM_LIQUIDITY);
/// assert_eq!(cfg.bootstrap_floor(), BootstrapFloor::Exclusive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineConfig {
    minimum_liquidity: Liquidity,
    bootstrap_floor: BootstrapFloor,
}

impl EngineConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] for an inclusive zero floor.
    pub fn new(
        minimum_liquidity: Liquidity,
        bootstrap_floor: BootstrapFloor,
    ) -> Result<Self, AmmError> {
        let config = Self {
            minimum_liquidity,
            bootstrap_floor,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] for an inclusive zero floor.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.bootstrap_floor == BootstrapFloor::Inclusive && self.minimum_liquidity.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "inclusive bootstrap floor requires a non-zero minimum",
            ));
        }
        Ok(())
    }

    /// Returns the bootstrap floor in claim-token units.
    #[must_use]
    pub const fn minimum_liquidity(&self) -> Liquidity {
        self.minimum_liquidity
    }

    /// Returns how bootstrap shares are compared against the floor.
    #[must_use]
    pub const fn bootstrap_floor(&self) -> BootstrapFloor {
        self.bootstrap_floor
    }

    /// Returns `true` if `minted` bootstrap shares clear the floor.
    #[must_use]
    pub fn admits_bootstrap(&self, minted: Liquidity) -> bool {
        self.bootstrap_floor.admits(minted, self.minimum_liquidity)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            minimum_liquidity: MINIMUM_LIQUIDITY,
            bootstrap_floor: BootstrapFloor::Exclusive,
        }
    }
}

impl fmt::Display for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EngineConfig(bootstrap shares {} {})",
            self.bootstrap_floor, self.minimum_liquidity
        )
    }
}
