//! Unified error types for the pool ledger.
//!
//! Every fallible operation across the crate returns [`AmmError`], so a
//! caller handles one enum whether the failure came from argument
//! validation, pricing, the reserve ledger or an asset ledger refusal.
//!
//! None of these errors is transient: each one is a precondition
//! violation or a collaborator refusal, and the operation that produced
//! it left no observable state change behind.

use crate::domain::AssetId;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

/// All failures surfaced by the pool engine and its components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmmError {
    /// Both sides of a pair name the same asset.
    #[error("pair requires two distinct assets")]
    IdenticalAssets,

    /// The request deadline lies before the host timestamp.
    #[error("deadline {deadline} expired (now {now})")]
    ExpiredDeadline {
        /// Deadline carried by the request.
        deadline: u64,
        /// Host timestamp at entry.
        now: u64,
    },

    /// The bootstrap deposit does not clear the minimum liquidity floor.
    #[error("initial liquidity does not clear the minimum floor")]
    InsufficientInitialLiquidity,

    /// The ratio-adjusted asset A deposit fell below `amount_a_min`.
    #[error("optimal asset A amount is below the requested minimum")]
    InsufficientAAmount,

    /// The ratio-adjusted asset B deposit fell below `amount_b_min`.
    #[error("optimal asset B amount is below the requested minimum")]
    InsufficientBAmount,

    /// The caller holds fewer claim tokens than it tries to redeem or burn.
    #[error("claim token balance too low")]
    InsufficientClaimBalance,

    /// An output amount fell below its caller-supplied floor.
    #[error("slippage floor not met")]
    SlippageExceeded,

    /// Swap paths must name exactly two assets.
    #[error("unsupported swap path of length {0}, expected 2")]
    UnsupportedPath(usize),

    /// The addressed ordered pair holds no reserves.
    #[error("pool does not exist for this ordered pair")]
    PoolDoesNotExist,

    /// The asset ledger refused a movement into or out of the pool.
    #[error("transfer of asset {asset} failed: {source}")]
    TransferFailed {
        /// Asset whose movement was refused.
        asset: AssetId,
        /// Refusal reported by the asset ledger.
        source: TransferError,
    },

    /// A subtraction would drive a balance below zero.
    #[error("underflow: {0}")]
    Underflow(&'static str),

    /// An intermediate value exceeded 256 bits.
    #[error("overflow: {0}")]
    Overflow(&'static str),

    /// A divisor was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A quantity is zero or too small to be meaningful.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// Engine configuration rejected during validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Refusal reported by an [`AssetLedger`](crate::traits::AssetLedger).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    /// The payer does not hold enough of the asset.
    #[error("payer balance too low")]
    InsufficientBalance,

    /// The pool's custody account does not hold enough of the asset.
    #[error("pool custody too low")]
    InsufficientCustody,

    /// The receiving balance would exceed the representable range.
    #[error("receiving balance overflow")]
    Overflow,

    /// The ledger declined the movement for its own reasons.
    #[error("rejected: {0}")]
    Rejected(&'static str),
}
