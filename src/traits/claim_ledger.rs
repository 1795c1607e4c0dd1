//! Claim-token bookkeeping consumed by the engine.
//!
//! # Supply Invariant
//!
//! For every implementation, at all times:
//!
//! ```text
//! total_supply() = Σ balance_of(holder)   for all holders
//! ```
//!
//! Supply changes only through [`ClaimLedger::mint`] and
//! [`ClaimLedger::burn`].  One ledger serves every pair.

use crate::domain::{AccountId, Liquidity};
use crate::error::AmmError;

/// Issue and retire claim tokens; query balances and the global supply.
///
/// A failed operation reverts a `mint` with a `burn` of the same amount
/// and a `burn` with a `mint`.
pub trait ClaimLedger {
    /// Issues `amount` claim tokens to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the supply would exceed 256 bits.
    fn mint(&mut self, to: AccountId, amount: Liquidity) -> Result<(), AmmError>;

    /// Retires `amount` claim tokens held by `from`.
    ///
    /// The engine checks the balance before calling, so a refusal here
    /// means the ledger and the engine disagree.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientClaimBalance`] if `from` holds less
    /// than `amount`.
    fn burn(&mut self, from: AccountId, amount: Liquidity) -> Result<(), AmmError>;

    /// Claim tokens held by `who`.
    #[must_use]
    fn balance_of(&self, who: &AccountId) -> Liquidity;

    /// Claim tokens issued and not yet retired, across all pairs.
    #[must_use]
    fn total_supply(&self) -> Liquidity;
}
