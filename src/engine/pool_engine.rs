//! Constant-product pool engine (zero fee).
//!
//! The swap invariant is `x × y = k`, where `x` and `y` are the reserves
//! of one ordered pair.  No fee is charged; floor rounding of the output
//! alone keeps `k` from decreasing.
//!
//! # Swap Algorithm (`path = [in, out]`)
//!
//! 1. `reserve_in`, `reserve_out` read for the exact key `(in, out)`
//! 2. `amount_in` moved from the caller into the pool
//! 3. `amount_out = amount_in × reserve_out / (reserve_in + amount_in)`,
//!    checked against `amount_out_min`
//! 4. `amount_out` moved from the pool to the recipient
//! 5. `reserve_in += amount_in`, `reserve_out -= amount_out`
//!
//! # Claim Tokens
//!
//! One claim-token supply `S` backs every pair.  Bootstrap deposits mint
//! `√(a × b)`; later deposits mint `min(a × S / Ra, b × S / Rb)`;
//! redemptions pay `L × Rx / S` of each side.
//!
//! # Atomicity
//!
//! All books sit behind one mutex.  Under the lock an operation applies
//! its changes through a journal, after every check that can run without
//! moving value (a swap's slippage check follows its input transfer).  If
//! a later step fails, the journal reverts the earlier ones newest-first,
//! so a failed call leaves no trace, not even an earlier transfer.  Nothing is copied; the cost of a call does not
//! grow with the number of accounts.

use parking_lot::Mutex;
use tracing::{debug, error, warn};

use super::journal::{Books, Journal};

use crate::config::EngineConfig;
use crate::domain::{
    AccountId, Amount, AssetId, Liquidity, PairKey, ProvideLiquidity, ProvideOutcome, Reserves,
    SwapExactIn, SwapOutcome, TxContext, WithdrawLiquidity, WithdrawOutcome,
};
use crate::error::{AmmError, Result};
use crate::ledger::{AssetVault, ClaimBook, ReserveLedger};
use crate::math::{bootstrap_liquidity, min, optimal_amount, proportional_share, swap_output};
use crate::traits::{AssetLedger, ClaimLedger, FromConfig};

/// A constant-product AMM over many ordered pairs sharing one claim token.
///
/// Generic over the asset ledger `A` and claim ledger `C`; the defaults
/// are the in-memory [`AssetVault`] and [`ClaimBook`].  The engine is
/// `Send + Sync` whenever both ledgers are `Send`, and every entry point
/// takes `&self`.
///
/// # Example
///
/// ```rust
/// use pair_amm::config::EngineConfig;
/// use pair_amm::domain::{AccountId, Amount, AssetId, ProvideLiquidity, TxContext};
/// use pair_amm::engine::PoolEngine;
///
/// let usdc = AssetId::from_bytes([1u8; 20]);
/// let weth = AssetId::from_bytes([2u8; 20]);
/// let alice = AccountId::from_bytes([0xa1; 20]);
///
/// let engine = PoolEngine::in_memory(EngineConfig::default()).expect("valid config");
/// engine.with_assets_mut(|vault| {
///     vault.credit(usdc, alice, Amount::new(1_000_000)).expect("credit");
///     vault.credit(weth, alice, Amount::new(4_000_000)).expect("credit");
/// });
///
/// let outcome = engine
///     .provide_liquidity(
///         &TxContext::new(alice, 0),
///         &ProvideLiquidity {
///             asset_a: usdc,
///             asset_b: weth,
///             amount_a_desired: Amount::new(1_000_000),
///             amount_b_desired: Amount::new(4_000_000),
///             amount_a_min: Amount::ZERO,
///             amount_b_min: Amount::ZERO,
///             recipient: alice,
///             deadline: 0,
///         },
///     )
///     .expect("bootstrap deposit");
/// assert_eq!(outcome.liquidity.to_string(), "2000000");
/// ```
#[derive(Debug)]
pub struct PoolEngine<A = AssetVault, C = ClaimBook> {
    config: EngineConfig,
    books: Mutex<Books<A, C>>,
}

impl PoolEngine<AssetVault, ClaimBook> {
    /// Creates an engine backed by empty in-memory ledgers.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineConfig::validate`] failures.
    pub fn in_memory(config: EngineConfig) -> Result<Self> {
        Self::new(config, AssetVault::new(), ClaimBook::new())
    }
}

impl<A, C> PoolEngine<A, C>
where
    A: AssetLedger,
    C: ClaimLedger,
{
    /// Creates an engine over the given collaborator ledgers and an empty
    /// reserve ledger.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineConfig::validate`] failures.
    pub fn new(config: EngineConfig, assets: A, claims: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            books: Mutex::new(Books {
                reserves: ReserveLedger::new(),
                assets,
                claims,
            }),
        })
    }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    // -- Entry points ---------------------------------------------------------

    /// Deposits a pair of assets and mints claim tokens to the recipient.
    ///
    /// An empty pool takes the desired amounts as-is and mints
    /// `isqrt(a × b)`.  An existing pool takes the largest deposit that
    /// preserves its reserve ratio within the desired amounts.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ExpiredDeadline`] if the request expired.
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::InsufficientInitialLiquidity`] if a bootstrap deposit
    ///   does not clear the configured floor.
    /// - [`AmmError::InsufficientAAmount`] / [`AmmError::InsufficientBAmount`]
    ///   if the ratio-adjusted side falls below its minimum.
    /// - [`AmmError::InvalidQuantity`] if the deposit would mint no shares.
    ///   This is a deliberate refusal: a deposit that buys zero claim
    ///   tokens would be a donation to existing holders, so it is never
    ///   taken.
    /// - [`AmmError::TransferFailed`] if the caller cannot pay.  A first
    ///   leg already pulled is returned.
    pub fn provide_liquidity(
        &self,
        ctx: &TxContext,
        request: &ProvideLiquidity,
    ) -> Result<ProvideOutcome> {
        ctx.ensure_before(request.deadline)?;
        let pair = PairKey::new(request.asset_a, request.asset_b)?;

        self.transact("provide_liquidity", |journal| {
            let reserves = journal.reserves(&pair);

            let (amount_a, amount_b, liquidity) = if reserves.is_empty() {
                let liquidity =
                    bootstrap_liquidity(request.amount_a_desired, request.amount_b_desired)?;
                if !self.config.admits_bootstrap(liquidity) {
                    return Err(AmmError::InsufficientInitialLiquidity);
                }
                (
                    request.amount_a_desired,
                    request.amount_b_desired,
                    liquidity,
                )
            } else {
                let (amount_a, amount_b) = ratio_deposit(request, reserves)?;
                let supply = journal.claims().total_supply().as_amount();
                let minted = min(
                    proportional_share(amount_a, supply, reserves.reserve_a)?,
                    proportional_share(amount_b, supply, reserves.reserve_b)?,
                );
                if minted.is_zero() {
                    return Err(AmmError::InvalidQuantity(
                        "deposit too small to mint liquidity",
                    ));
                }
                (amount_a, amount_b, Liquidity::from_u256(minted.get()))
            };

            journal.pull(pair.asset_a(), ctx.caller, amount_a)?;
            journal.pull(pair.asset_b(), ctx.caller, amount_b)?;
            journal.add_reserves(pair, amount_a, amount_b)?;
            journal.mint(request.recipient, liquidity)?;

            debug!(
                %pair,
                caller = %ctx.caller,
                %amount_a,
                %amount_b,
                %liquidity,
                "liquidity provided"
            );
            Ok(ProvideOutcome {
                amount_a,
                amount_b,
                liquidity,
            })
        })
    }

    /// Burns the caller's claim tokens and pays out the proportional share
    /// of the pair's reserves to the recipient.
    ///
    /// Claims are burned first, then reserves reduced, then assets sent.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ExpiredDeadline`] if the request expired.
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::InvalidQuantity`] if `liquidity` is zero, or if it
    ///   would redeem `(0, 0)`.  Both are deliberate refusals rather than
    ///   no-op successes: burning claims for nothing is never done, and a
    ///   zero withdrawal has nothing to burn.
    /// - [`AmmError::InsufficientClaimBalance`] if the caller holds fewer
    ///   claim tokens than `liquidity`.
    /// - [`AmmError::SlippageExceeded`] if either payout is below its minimum.
    /// - [`AmmError::TransferFailed`] if the asset ledger refuses a payout.
    pub fn withdraw_liquidity(
        &self,
        ctx: &TxContext,
        request: &WithdrawLiquidity,
    ) -> Result<WithdrawOutcome> {
        ctx.ensure_before(request.deadline)?;
        let pair = PairKey::new(request.asset_a, request.asset_b)?;
        if request.liquidity.is_zero() {
            return Err(AmmError::InvalidQuantity("cannot withdraw zero liquidity"));
        }

        self.transact("withdraw_liquidity", |journal| {
            if journal.claims().balance_of(&ctx.caller) < request.liquidity {
                return Err(AmmError::InsufficientClaimBalance);
            }

            let reserves = journal.reserves(&pair);
            let supply = journal.claims().total_supply().as_amount();
            let share = request.liquidity.as_amount();
            let amount_a = proportional_share(share, reserves.reserve_a, supply)?;
            let amount_b = proportional_share(share, reserves.reserve_b, supply)?;

            if amount_a.is_zero() && amount_b.is_zero() {
                return Err(AmmError::InvalidQuantity(
                    "withdrawal too small to return assets",
                ));
            }
            if amount_a < request.amount_a_min || amount_b < request.amount_b_min {
                return Err(AmmError::SlippageExceeded);
            }

            journal.burn(ctx.caller, request.liquidity)?;
            journal.sub_reserves(pair, amount_a, amount_b)?;
            journal.pay(pair.asset_a(), request.recipient, amount_a)?;
            journal.pay(pair.asset_b(), request.recipient, amount_b)?;

            debug!(
                %pair,
                caller = %ctx.caller,
                liquidity = %request.liquidity,
                %amount_a,
                %amount_b,
                "liquidity withdrawn"
            );
            Ok(WithdrawOutcome { amount_a, amount_b })
        })
    }

    /// Sells exactly `amount_in` of `path[0]` for `path[1]` against the
    /// pool keyed `(path[0], path[1])`.
    ///
    /// The input is taken before the output is checked against
    /// `amount_out_min`; if the output misses its floor, or the payout is
    /// refused, the input is returned.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ExpiredDeadline`] if the request expired.
    /// - [`AmmError::InvalidQuantity`] if `amount_in` is zero.
    /// - [`AmmError::UnsupportedPath`] unless `path` has exactly two assets.
    /// - [`AmmError::IdenticalAssets`] if both path entries are the same.
    /// - [`AmmError::PoolDoesNotExist`] if either reserve of the key is zero.
    /// - [`AmmError::SlippageExceeded`] if the output is below `amount_out_min`.
    /// - [`AmmError::TransferFailed`] if either asset movement is refused.
    pub fn swap_exact_in(&self, ctx: &TxContext, request: &SwapExactIn) -> Result<SwapOutcome> {
        ctx.ensure_before(request.deadline)?;
        if request.amount_in.is_zero() {
            return Err(AmmError::InvalidQuantity("swap amount must be non-zero"));
        }
        let pair = pair_from_path(&request.path)?;

        self.transact("swap_exact_in", |journal| {
            let reserves = journal.reserves(&pair);
            if reserves.has_zero_side() {
                return Err(AmmError::PoolDoesNotExist);
            }

            journal.pull(pair.asset_a(), ctx.caller, request.amount_in)?;

            let amount_out = swap_output(request.amount_in, reserves.reserve_a, reserves.reserve_b)?;
            if amount_out < request.amount_out_min {
                return Err(AmmError::SlippageExceeded);
            }

            journal.pay(pair.asset_b(), request.recipient, amount_out)?;
            journal.add_reserves(pair, request.amount_in, Amount::ZERO)?;
            journal.sub_reserves(pair, Amount::ZERO, amount_out)?;

            debug!(
                %pair,
                caller = %ctx.caller,
                amount_in = %request.amount_in,
                %amount_out,
                "swap executed"
            );
            Ok(SwapOutcome {
                amount_in: request.amount_in,
                amount_out,
            })
        })
    }

    // -- Queries --------------------------------------------------------------

    /// Reserves of the pool keyed exactly `(asset_a, asset_b)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if both assets are the same.
    pub fn reserves(&self, asset_a: AssetId, asset_b: AssetId) -> Result<Reserves> {
        let pair = PairKey::new(asset_a, asset_b)?;
        Ok(self.books.lock().reserves.get(&pair))
    }

    /// Claim tokens held by `who`.
    #[must_use]
    pub fn claim_balance_of(&self, who: &AccountId) -> Liquidity {
        self.books.lock().claims.balance_of(who)
    }

    /// Claim tokens outstanding across all pairs.
    #[must_use]
    pub fn claim_total_supply(&self) -> Liquidity {
        self.books.lock().claims.total_supply()
    }

    /// Amount of `asset_b` that matches `amount_a` of `asset_a` at the
    /// current reserve ratio of the pool `(asset_a, asset_b)`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::InvalidQuantity`] if `amount_a` is zero.
    /// - [`AmmError::PoolDoesNotExist`] if the pool holds no reserves.
    pub fn quote(&self, amount_a: Amount, asset_a: AssetId, asset_b: AssetId) -> Result<Amount> {
        if amount_a.is_zero() {
            return Err(AmmError::InvalidQuantity("quote amount must be non-zero"));
        }
        let reserves = self.reserves(asset_a, asset_b)?;
        if reserves.has_zero_side() {
            return Err(AmmError::PoolDoesNotExist);
        }
        optimal_amount(amount_a, reserves.reserve_a, reserves.reserve_b)
    }

    /// Output [`swap_exact_in`](Self::swap_exact_in) would produce right
    /// now, without moving anything.
    ///
    /// # Errors
    ///
    /// Same validation errors as [`swap_exact_in`](Self::swap_exact_in).
    pub fn quote_exact_in(&self, amount_in: Amount, path: &[AssetId]) -> Result<Amount> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidQuantity("swap amount must be non-zero"));
        }
        let pair = pair_from_path(path)?;
        let reserves = self.books.lock().reserves.get(&pair);
        if reserves.has_zero_side() {
            return Err(AmmError::PoolDoesNotExist);
        }
        swap_output(amount_in, reserves.reserve_a, reserves.reserve_b)
    }

    /// Snapshot of the reserve ledger, for host persistence.
    #[must_use]
    pub fn reserve_ledger(&self) -> ReserveLedger {
        self.books.lock().reserves.clone()
    }

    /// Runs `f` with shared access to the asset ledger under the engine lock.
    pub fn with_assets<R>(&self, f: impl FnOnce(&A) -> R) -> R {
        f(&self.books.lock().assets)
    }

    /// Runs `f` with exclusive access to the asset ledger under the engine
    /// lock, e.g. to fund accounts.  Changes made by `f` are kept.
    pub fn with_assets_mut<R>(&self, f: impl FnOnce(&mut A) -> R) -> R {
        f(&mut self.books.lock().assets)
    }

    /// Runs `f` with shared access to the claim ledger under the engine lock.
    pub fn with_claims<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&self.books.lock().claims)
    }

    // -- Internals ------------------------------------------------------------

    /// Runs `op` under the lock and reverts whatever it applied if it fails.
    fn transact<T>(
        &self,
        operation: &'static str,
        op: impl FnOnce(&mut Journal<'_, A, C>) -> Result<T>,
    ) -> Result<T> {
        let mut books = self.books.lock();
        debug!(operation, "operation started");
        let mut journal = Journal::new(&mut *books);
        match op(&mut journal) {
            Ok(value) => Ok(value),
            Err(err) => {
                let applied = journal.len();
                let unreverted = journal.unwind();
                if unreverted > 0 {
                    error!(operation, error = %err, applied, unreverted, "rollback incomplete");
                } else {
                    warn!(operation, error = %err, applied, "operation rolled back");
                }
                Err(err)
            }
        }
    }
}

impl<A, C> FromConfig<EngineConfig> for PoolEngine<A, C>
where
    A: AssetLedger + Default,
    C: ClaimLedger + Default,
{
    /// Creates an engine with empty default ledgers.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineConfig::validate`] failures.
    fn from_config(config: &EngineConfig) -> Result<Self> {
        Self::new(*config, A::default(), C::default())
    }
}

/// Largest deposit within the desired amounts that keeps the reserve ratio.
fn ratio_deposit(request: &ProvideLiquidity, reserves: Reserves) -> Result<(Amount, Amount)> {
    let amount_b_optimal = optimal_amount(
        request.amount_a_desired,
        reserves.reserve_a,
        reserves.reserve_b,
    )?;
    if amount_b_optimal <= request.amount_b_desired {
        if amount_b_optimal < request.amount_b_min {
            return Err(AmmError::InsufficientBAmount);
        }
        return Ok((request.amount_a_desired, amount_b_optimal));
    }

    let amount_a_optimal = optimal_amount(
        request.amount_b_desired,
        reserves.reserve_b,
        reserves.reserve_a,
    )?;
    if amount_a_optimal < request.amount_a_min {
        return Err(AmmError::InsufficientAAmount);
    }
    Ok((amount_a_optimal, request.amount_b_desired))
}

fn pair_from_path(path: &[AssetId]) -> Result<PairKey> {
    let [asset_in, asset_out] = path else {
        return Err(AmmError::UnsupportedPath(path.len()));
    };
    PairKey::new(*asset_in, *asset_out)
}
