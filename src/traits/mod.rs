//! Seams between the pool engine and its collaborators.
//!
//! The engine owns pricing and reserve accounting only.  Moving assets and
//! keeping claim-token balances are delegated to an [`AssetLedger`] and a
//! [`ClaimLedger`]; [`FromConfig`] covers config-driven construction.

mod asset_ledger;
mod claim_ledger;
mod from_config;

pub use asset_ledger::AssetLedger;
pub use claim_ledger::ClaimLedger;
pub use from_config::FromConfig;
