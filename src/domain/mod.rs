//! Value types of the pool ledger domain.
//!
//! Identifiers, quantities, pair keys, reserve entries, and the request
//! and outcome types of the engine entry points.  Quantities are 256-bit
//! newtypes with checked arithmetic.

mod account_id;
mod amount;
mod asset_id;
mod liquidity;
mod outcome;
mod pair_key;
mod requests;
mod reserves;
mod tx_context;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use liquidity::Liquidity;
pub use outcome::{ProvideOutcome, SwapOutcome, WithdrawOutcome};
pub use pair_key::PairKey;
pub use requests::{ProvideLiquidity, SwapExactIn, WithdrawLiquidity};
pub use reserves::Reserves;
pub use tx_context::TxContext;
