//! # Pair AMM
//!
//! Ledger core of a constant-product automated market maker: ordered asset
//! pairs, reserve accounting, a zero-fee `x × y = k` swap and one
//! claim-token supply shared by every pair.
//!
//! This crate provides domain types, the pure liquidity math, the reserve
//! ledger, and a [`PoolEngine`](engine::PoolEngine) with three atomic entry
//! points:
//!
//! - **Provide liquidity**: deposit a pair of assets, mint claim tokens
//! - **Withdraw liquidity**: burn claim tokens, receive both assets
//! - **Swap exact in**: sell an exact input for as much output as the pool pays
//!
//! Pairs are **ordered**: `(X, Y)` and `(Y, X)` are unrelated pools.
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pair-amm = "0.1"
//! ```
//!
//! ## Bootstrap a pool and execute a swap
//!
//! ```rust
//! use pair_amm::config::EngineConfig;
//! use pair_amm::domain::{AccountId, Amount, AssetId, ProvideLiquidity, SwapExactIn, TxContext};
//! use pair_amm::engine::PoolEngine;
//!
//! // 1. Two assets and two accounts
//! let usdc = AssetId::from_bytes([1u8; 20]);
//! let weth = AssetId::from_bytes([2u8; 20]);
//! let alice = AccountId::from_bytes([0xa1; 20]);
//! let bob = AccountId::from_bytes([0xb0; 20]);
//!
//! // 2. An engine over in-memory ledgers, with funded accounts
//! let engine = PoolEngine::in_memory(EngineConfig::default()).expect("valid config");
//! engine.with_assets_mut(|vault| {
//!     vault.credit(usdc, alice, Amount::new(1_000_000)).expect("credit");
//!     vault.credit(weth, alice, Amount::new(4_000_000)).expect("credit");
//!     vault.credit(usdc, bob, Amount::new(1_000)).expect("credit");
//! });
//!
//! // 3. Alice bootstraps the (USDC, WETH) pool
//! let provided = engine
//!     .provide_liquidity(
//!         &TxContext::new(alice, 100),
//!         &ProvideLiquidity {
//!             asset_a: usdc,
//!             asset_b: weth,
//!             amount_a_desired: Amount::new(1_000_000),
//!             amount_b_desired: Amount::new(4_000_000),
//!             amount_a_min: Amount::ZERO,
//!             amount_b_min: Amount::ZERO,
//!             recipient: alice,
//!             deadline: 200,
//!         },
//!     )
//!     .expect("bootstrap");
//! assert_eq!(provided.liquidity.to_string(), "2000000");
//!
//! // 4. Bob sells 1 000 USDC for WETH
//! let swapped = engine
//!     .swap_exact_in(
//!         &TxContext::new(bob, 150),
//!         &SwapExactIn {
//!             amount_in: Amount::new(1_000),
//!             amount_out_min: Amount::new(3_900),
//!             path: vec![usdc, weth],
//!             recipient: bob,
//!             deadline: 200,
//!         },
//!     )
//!     .expect("swap succeeded");
//! assert_eq!(swapped.amount_out, Amount::new(3_996));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │     Host      │  TxContext (caller, timestamp) + request structs
//! └──────┬───────┘
//!        │ provide / withdraw / swap
//!        ▼
//! ┌──────────────┐
//! │  PoolEngine   │  validation, sequencing, journaled undo under one lock
//! └──┬────┬────┬──┘
//!    │    │    │
//!    │    │    └──────► ClaimLedger  (mint / burn / balances)
//!    │    └───────────► AssetLedger  (transfer in / out)
//!    ▼
//! ┌──────────────┐
//! │ ReserveLedger │  (asset_a, asset_b) → (reserve_a, reserve_b)
//! └──────┬───────┘
//!        │ priced by
//!        ▼
//! ┌──────────────┐
//! │ liquidity_math│  isqrt, optimal amount, swap output, proportional share
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Liquidity`](domain::Liquidity), [`PairKey`](domain::PairKey), requests and outcomes |
//! | [`math`]   | Checked arithmetic and the [`liquidity_math`](math::liquidity_math) functions |
//! | [`ledger`] | [`ReserveLedger`](ledger::ReserveLedger) plus in-memory asset and claim ledgers |
//! | [`traits`] | Collaborator seams: [`AssetLedger`](traits::AssetLedger), [`ClaimLedger`](traits::ClaimLedger), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`EngineConfig`](config::EngineConfig) and the bootstrap floor |
//! | [`engine`] | [`PoolEngine`](engine::PoolEngine) entry points and queries |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! The engine emits [`tracing`] events: `debug` on every committed
//! operation, `warn` on every rollback, `error` when a collaborator
//! refuses to revert a step, and `trace` for individual asset movements
//! in the in-memory vault.  Install any subscriber to see them.

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod math;
pub mod prelude;
pub mod traits;
