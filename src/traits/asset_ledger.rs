//! Capability to move fungible assets between parties and the pool.

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::TransferError;

/// Moves quantities of named assets into and out of the pool's custody.
///
/// Balance storage, allowances and any other bookkeeping stay behind this
/// trait.  A movement either fully happens and returns `Ok(())`, or is
/// refused with a [`TransferError`] and changes nothing.
///
/// # Atomicity
///
/// When a later step of an operation fails, the engine reverts movements
/// it already made with the opposite call: a `transfer_into` is undone by
/// a `transfer_out` of the same asset, account and amount, and vice versa.
/// A ledger that refuses such a reversal leaves the operation partially
/// applied; the engine reports this with an `error!` event.
pub trait AssetLedger {
    /// Moves `amount` of `asset` from `from` into the pool.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the ledger refuses the movement.
    fn transfer_into(
        &mut self,
        asset: AssetId,
        from: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Moves `amount` of `asset` from the pool to `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the ledger refuses the movement.
    fn transfer_out(
        &mut self,
        asset: AssetId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError>;
}
