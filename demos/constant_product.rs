//! Constant Product pool ledger example (zero fee, ordered pairs).
//!
//! Demonstrates bootstrapping a pool (`x · y = k`), executing a swap,
//! adding and removing liquidity, and showing that the reversed pair is
//! a separate pool.
//!
//! # Run
//!
//! ```bash
//! cargo run --example constant_product
//! ```

use pair_amm::config::EngineConfig;
use pair_amm::domain::{
    AccountId, Amount, AssetId, Liquidity, ProvideLiquidity, SwapExactIn, TxContext,
    WithdrawLiquidity,
};
use pair_amm::engine::PoolEngine;
use pair_amm::error::AmmError;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Constant Product Pool Ledger (x · y = k) ===\n");

    // ── 1. Define assets and accounts ───────────────────────────────────
    let usdc = AssetId::from_bytes([1u8; 20]);
    let weth = AssetId::from_bytes([2u8; 20]);
    let alice = AccountId::from_bytes([0xa1; 20]);
    let bob = AccountId::from_bytes([0xb0; 20]);
    println!("Asset A (USDC): {usdc}");
    println!("Asset B (WETH): {weth}");

    // ── 2. Create the engine and fund the accounts ──────────────────────
    let config = EngineConfig::default();
    let engine = PoolEngine::in_memory(config)?;
    println!("\nEngine config: {config}");
    engine.with_assets_mut(|vault| -> Result<(), Box<dyn std::error::Error>> {
        vault.credit(usdc, alice, Amount::new(1_500_000))?;
        vault.credit(weth, alice, Amount::new(6_000_000))?;
        vault.credit(usdc, bob, Amount::new(10_000))?;
        Ok(())
    })?;

    let now = 1_700_000_000;
    let deadline = now + 300;

    // ── 3. Bootstrap the (USDC, WETH) pool ──────────────────────────────
    let provided = engine.provide_liquidity(
        &TxContext::new(alice, now),
        &ProvideLiquidity {
            asset_a: usdc,
            asset_b: weth,
            amount_a_desired: Amount::new(1_000_000),
            amount_b_desired: Amount::new(4_000_000),
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient: alice,
            deadline,
        },
    )?;
    println!("\n--- Bootstrap ---");
    println!("  Deposited:   {provided}");
    println!("  Reserves:    {}", engine.reserves(usdc, weth)?);

    // ── 4. Quote, then swap 10 000 USDC for WETH ────────────────────────
    let path = vec![usdc, weth];
    let quoted = engine.quote_exact_in(Amount::new(10_000), &path)?;
    let swapped = engine.swap_exact_in(
        &TxContext::new(bob, now + 1),
        &SwapExactIn {
            amount_in: Amount::new(10_000),
            amount_out_min: quoted,
            path,
            recipient: bob,
            deadline,
        },
    )?;
    println!("\n--- Swap: sell 10 000 USDC ---");
    println!("  Quoted out:  {quoted}");
    println!("  Executed:    {swapped}");
    println!("  Reserves:    {}", engine.reserves(usdc, weth)?);

    // ── 5. The reversed pair is a different pool ────────────────────────
    match engine.quote_exact_in(Amount::new(10_000), &[weth, usdc]) {
        Err(AmmError::PoolDoesNotExist) => println!("\n(WETH, USDC) has no pool: {}", AmmError::PoolDoesNotExist),
        other => println!("\nunexpected: {other:?}"),
    }

    // ── 6. Add liquidity at the current ratio ───────────────────────────
    let counterpart = engine.quote(Amount::new(500_000), usdc, weth)?;
    let added = engine.provide_liquidity(
        &TxContext::new(alice, now + 2),
        &ProvideLiquidity {
            asset_a: usdc,
            asset_b: weth,
            amount_a_desired: Amount::new(500_000),
            amount_b_desired: counterpart,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient: alice,
            deadline,
        },
    )?;
    println!("\n--- Add Liquidity ---");
    println!("  Deposited:   {added}");
    println!("  Total supply: {}", engine.claim_total_supply());

    // ── 7. Remove liquidity ─────────────────────────────────────────────
    let withdrawn = engine.withdraw_liquidity(
        &TxContext::new(alice, now + 3),
        &WithdrawLiquidity {
            asset_a: usdc,
            asset_b: weth,
            liquidity: Liquidity::new(100_000),
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient: alice,
            deadline,
        },
    )?;
    println!("\n--- Remove Liquidity ---");
    println!("  Burned:      100 000 claim units");
    println!("  Returned:    {withdrawn}");
    println!("  Reserves:    {}", engine.reserves(usdc, weth)?);
    println!("  Alice holds: {}", engine.claim_balance_of(&alice));

    println!("\n=== Done ===");
    Ok(())
}
