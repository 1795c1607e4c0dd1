//! Reserve entry of one pool.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;

/// The pool's holdings of each side of a [`PairKey`](super::PairKey).
///
/// Between operations a reserve entry is either empty (`(0, 0)`, the pool
/// does not exist or was fully drained) or both sides are strictly
/// positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Reserves {
    /// Holdings of the pair's first asset.
    pub reserve_a: Amount,
    /// Holdings of the pair's second asset.
    pub reserve_b: Amount,
}

impl Reserves {
    /// An empty entry.
    pub const EMPTY: Self = Self {
        reserve_a: Amount::ZERO,
        reserve_b: Amount::ZERO,
    };

    /// Creates a reserve entry.
    pub const fn new(reserve_a: Amount, reserve_b: Amount) -> Self {
        Self {
            reserve_a,
            reserve_b,
        }
    }

    /// Returns `true` if both sides are zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reserve_a.is_zero() && self.reserve_b.is_zero()
    }

    /// Returns `true` if either side is zero, i.e. the pool cannot price
    /// a trade.
    #[must_use]
    pub fn has_zero_side(&self) -> bool {
        self.reserve_a.is_zero() || self.reserve_b.is_zero()
    }

    /// Returns the entry as a tuple `(reserve_a, reserve_b)`.
    #[must_use]
    pub const fn as_tuple(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.reserve_a, self.reserve_b)
    }
}
