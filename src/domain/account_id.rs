//! Acting principal and recipient identity.

use core::fmt;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Identifies a party: the caller of an entry point or the recipient of
/// assets and claim tokens.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AccountId(Address);

impl AccountId {
    /// Creates an `AccountId` from raw address bytes.
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
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
