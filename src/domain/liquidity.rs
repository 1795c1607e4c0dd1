//! Claim-token units.

use core::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::Amount;

/// Claim-token units: the receipt for a proportional share of pool value.
///
/// Distinct from [`Amount`] because it measures ownership of the pools,
/// not a quantity of any deposited asset.  One supply of `Liquidity` is
/// shared by every pair the engine manages.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::Liquidity;
///
/// let a = Liquidity::new(1_000);
/// let b = Liquidity::new(2_000);
/// assert_eq!(a.checked_add(&b), Some(Liquidity::new(3_000)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Liquidity(U256);

impl Liquidity {
    /// No liquidity.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Creates a new `Liquidity` from a `u128` value.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(value: u128) -> Self {
        Self(U256::from_limbs([value as u64, (value >> 64) as u64, 0, 0]))
    }

    /// Wraps a full-width 256-bit value.
    pub const fn from_u256(value: U256) -> Self {
        Self(value)
    }

    /// Returns the underlying 256-bit value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the liquidity is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Reinterprets this share count as a raw quantity for ratio math.
    pub const fn as_amount(&self) -> Amount {
        Amount::from_u256(self.0)
    }
}

impl From<u128> for Liquidity {
    fn from(value: u128) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
