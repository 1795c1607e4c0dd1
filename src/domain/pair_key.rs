//! Ordered pair of distinct assets addressing one pool.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::AssetId;
use crate::error::AmmError;

/// An ordered pair of distinct assets: the key of one pool.
///
/// The order is **not** canonicalized.  `(X, Y)` and `(Y, X)` are two
/// independent keys with independent reserves, so a caller must address a
/// pool with the same argument order it was created with.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{AssetId, PairKey};
///
/// let x = AssetId::from_bytes([1u8; 20]);
/// let y = AssetId::from_bytes([2u8; 20]);
///
/// let xy = PairKey::new(x, y).expect("distinct assets");
/// let yx = PairKey::new(y, x).expect("distinct assets");
/// assert_ne!(xy, yx);
/// assert_eq!(xy.reversed(), yx);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PairKey {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl PairKey {
    /// Creates a pair key in exactly the given order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if both sides are the same asset.
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> Result<Self, AmmError> {
        if asset_a == asset_b {
            return Err(AmmError::IdenticalAssets);
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns the first asset of the key.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the second asset of the key.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// Returns the key with both sides swapped, which addresses a
    /// different pool.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            asset_a: self.asset_b,
            asset_b: self.asset_a,
        }
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.asset_a, self.asset_b)
    }
}
