//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use pair_amm::prelude::*;
//! ```
//!
//! This re-exports the domain types, collaborator traits, configuration,
//! error types and the engine itself so that consumers don't need to
//! import from individual submodules.

// Re-export domain types
pub use crate::domain::{
    AccountId, Amount, AssetId, Liquidity, PairKey, ProvideLiquidity, ProvideOutcome, Reserves,
    SwapExactIn, SwapOutcome, TxContext, WithdrawLiquidity, WithdrawOutcome,
};

// Re-export core traits
pub use crate::traits::{AssetLedger, ClaimLedger, FromConfig};

// Re-export math utilities
pub use crate::math::CheckedArithmetic;

// Re-export configuration
pub use crate::config::{BootstrapFloor, EngineConfig};

// Re-export error types
pub use crate::error::{AmmError, Result, TransferError};

// Re-export ledgers and the engine
pub use crate::engine::PoolEngine;
pub use crate::ledger::{AssetVault, ClaimBook, ReserveLedger};
