//! Opaque handle to a fungible asset.

use core::fmt;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Identifies a fungible asset by its chain address.
///
/// Two asset identifiers are either equal or distinct; the derived
/// ordering exists only so identifiers can key ordered collections and
/// carries no market meaning.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::AssetId;
///
/// let usdc = AssetId::from_bytes([1u8; 20]);
/// assert_eq!(usdc.as_bytes(), [1u8; 20]);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AssetId(Address);

impl AssetId {
    /// Creates an `AssetId` from raw address bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(Address::new(bytes))
    }

    /// Wraps an existing chain address.
    #[must_use]
    pub const fn from_address(address: Address) -> Self {
        Self(address)
    }

    /// Returns the underlying address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.0
    }

    /// Returns the raw 20-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 20] {
        self.0.0.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
