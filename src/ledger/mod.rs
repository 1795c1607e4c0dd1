//! Ledger state owned by the engine.
//!
//! [`ReserveLedger`] is the pool-side accounting.  [`AssetVault`] and
//! [`ClaimBook`] are self-contained in-memory implementations of the
//! [`AssetLedger`](crate::traits::AssetLedger) and
//! [`ClaimLedger`](crate::traits::ClaimLedger) collaborator traits, used by
//! hosts that keep everything in one process and by the tests.

mod asset_vault;
mod claim_book;
mod reserve_ledger;

pub use asset_vault::AssetVault;
pub use claim_book::ClaimBook;
pub use reserve_ledger::{ReserveLedger, ReserveRecord};
