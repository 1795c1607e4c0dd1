//! Arguments of the three engine entry points.

use super::{AccountId, Amount, AssetId, Liquidity};

/// Deposit request for [`PoolEngine::provide_liquidity`](crate::engine::PoolEngine::provide_liquidity).
///
/// The desired amounts are upper bounds: against an existing pool one
/// side is scaled down to match the reserve ratio, and the scaled side
/// must not fall below its minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProvideLiquidity {
    /// First asset of the pair, in the order the pool is addressed.
    pub asset_a: AssetId,
    /// Second asset of the pair.
    pub asset_b: AssetId,
    /// Most of asset A the caller is willing to deposit.
    pub amount_a_desired: Amount,
    /// Most of asset B the caller is willing to deposit.
    pub amount_b_desired: Amount,
    /// Least of asset A the caller accepts to deposit.
    pub amount_a_min: Amount,
    /// Least of asset B the caller accepts to deposit.
    pub amount_b_min: Amount,
    /// Receiver of the minted claim tokens.
    pub recipient: AccountId,
    /// Last timestamp at which the request may execute.
    pub deadline: u64,
}

/// Redemption request for [`PoolEngine::withdraw_liquidity`](crate::engine::PoolEngine::withdraw_liquidity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawLiquidity {
    /// First asset of the pair, in the order the pool is addressed.
    pub asset_a: AssetId,
    /// Second asset of the pair.
    pub asset_b: AssetId,
    /// Claim tokens to burn from the caller.
    pub liquidity: Liquidity,
    /// Least of asset A the caller accepts to receive.
    pub amount_a_min: Amount,
    /// Least of asset B the caller accepts to receive.
    pub amount_b_min: Amount,
    /// Receiver of the withdrawn assets.
    pub recipient: AccountId,
    /// Last timestamp at which the request may execute.
    pub deadline: u64,
}

/// Trade request for [`PoolEngine::swap_exact_in`](crate::engine::PoolEngine::swap_exact_in).
///
/// `path` must hold exactly two assets, `[asset_in, asset_out]`, and is
/// resolved to the pool keyed by that exact order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwapExactIn {
    /// Exact quantity of `path[0]` sold.
    pub amount_in: Amount,
    /// Least of `path[1]` the caller accepts to receive.
    pub amount_out_min: Amount,
    /// `[asset_in, asset_out]`.
    pub path: Vec<AssetId>,
    /// Receiver of the bought asset.
    pub recipient: AccountId,
    /// Last timestamp at which the request may execute.
    pub deadline: u64,
}
