//! Property-based tests using `proptest` for pool invariants.
//!
//! 1. **Integer square root** is the exact floor over the full 256-bit range.
//! 2. **Product non-decrease**: `Ra × Rb` never shrinks across a swap.
//! 3. **Bounded output**: a swap never pays out the whole opposite reserve.
//! 4. **Round trip**: provide then withdraw returns no more than deposited,
//!    and draining a fresh pool leaves exactly the unreturned dust behind.
//! 5. **Rollback**: a failed call leaves every ledger untouched.
//! 6. **Ledger consistency** over random operation sequences: reserves are
//!    never one-sided and claim balances always sum to the total supply.

use alloy_primitives::U256;
use proptest::prelude::*;

use super::PoolEngine;
use crate::config::EngineConfig;
use crate::domain::{
    AccountId, Amount, AssetId, Liquidity, ProvideLiquidity, SwapExactIn, TxContext,
    WithdrawLiquidity,
};
use crate::error::AmmError;
use crate::math::isqrt;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const FUNDING: u128 = 1_000_000_000_000_000_000_000_000_000;

fn asset_x() -> AssetId {
    AssetId::from_bytes([0x11; 20])
}

fn asset_y() -> AssetId {
    AssetId::from_bytes([0x22; 20])
}

fn trader(i: u8) -> AccountId {
    AccountId::from_bytes([i; 20])
}

fn ctx(caller: AccountId) -> TxContext {
    TxContext::new(caller, 0)
}

fn funded_engine(accounts: u8) -> PoolEngine {
    let Ok(engine) = PoolEngine::in_memory(EngineConfig::default()) else {
        panic!("valid config");
    };
    for i in 1..=accounts {
        for asset in [asset_x(), asset_y()] {
            let Ok(()) = engine.with_assets_mut(|v| v.credit(asset, trader(i), Amount::new(FUNDING)))
            else {
                panic!("credit");
            };
        }
    }
    engine
}

fn provide_request(who: AccountId, a: u128, b: u128) -> ProvideLiquidity {
    ProvideLiquidity {
        asset_a: asset_x(),
        asset_b: asset_y(),
        amount_a_desired: Amount::new(a),
        amount_b_desired: Amount::new(b),
        amount_a_min: Amount::ZERO,
        amount_b_min: Amount::ZERO,
        recipient: who,
        deadline: 0,
    }
}

fn withdraw_request(who: AccountId, liquidity: Liquidity) -> WithdrawLiquidity {
    WithdrawLiquidity {
        asset_a: asset_x(),
        asset_b: asset_y(),
        liquidity,
        amount_a_min: Amount::ZERO,
        amount_b_min: Amount::ZERO,
        recipient: who,
        deadline: 0,
    }
}

fn swap_request(who: AccountId, amount_in: u128) -> SwapExactIn {
    SwapExactIn {
        amount_in: Amount::new(amount_in),
        amount_out_min: Amount::ZERO,
        path: vec![asset_x(), asset_y()],
        recipient: who,
        deadline: 0,
    }
}

fn bootstrapped(a: u128, b: u128) -> PoolEngine {
    let engine = funded_engine(3);
    let Ok(_) = engine.provide_liquidity(&ctx(trader(1)), &provide_request(trader(1), a, b)) else {
        panic!("bootstrap deposit");
    };
    engine
}

fn reserve_product(engine: &PoolEngine) -> U256 {
    let Ok(r) = engine.reserves(asset_x(), asset_y()) else {
        panic!("distinct assets");
    };
    r.reserve_a.get() * r.reserve_b.get()
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Reserve sizes whose bootstrap always clears the 1000-share floor.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=1_000_000_000_000_000_000_000u128
}

fn trade_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000_000_000_000u128
}

#[derive(Debug, Clone)]
enum Op {
    Provide { who: u8, a: u128, b: u128 },
    Withdraw { who: u8, per_mille: u16 },
    Swap { who: u8, amount_in: u128 },
}

fn swap_op_strategy() -> impl Strategy<Value = Op> {
    (1u8..=3, 1u128..=1_000_000_000u128).prop_map(|(who, amount_in)| Op::Swap { who, amount_in })
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u8..=3, 1u128..=1_000_000_000u128, 1u128..=1_000_000_000u128)
            .prop_map(|(who, a, b)| Op::Provide { who, a, b }),
        (1u8..=3, 1u16..=1_000).prop_map(|(who, per_mille)| Op::Withdraw { who, per_mille }),
        swap_op_strategy(),
    ]
}

// ---------------------------------------------------------------------------
// 1. Integer square root
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_isqrt_is_floor(limbs in any::<[u64; 4]>()) {
        let n = U256::from_limbs(limbs);
        let r = isqrt(n);
        prop_assert!(r * r <= n, "isqrt({}) = {} squares past n", n, r);
        let next = r + U256::from(1u64);
        if let Some(square) = next.checked_mul(next) {
            prop_assert!(square > n, "isqrt({}) = {} is not the floor", n, r);
        }
    }
}

// ---------------------------------------------------------------------------
// 2–3. Swaps
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_product_never_decreases(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in trade_strategy(),
    ) {
        let engine = bootstrapped(ra, rb);
        let before = reserve_product(&engine);
        let Ok(_) = engine.swap_exact_in(&ctx(trader(2)), &swap_request(trader(2), amount_in)) else {
            panic!("swap against live pool");
        };
        let after = reserve_product(&engine);
        prop_assert!(after >= before, "k decreased: {} -> {}", before, after);
    }

    #[test]
    fn prop_swap_output_below_reserve(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in trade_strategy(),
    ) {
        let engine = bootstrapped(ra, rb);
        let Ok(out) = engine.swap_exact_in(&ctx(trader(2)), &swap_request(trader(2), amount_in)) else {
            panic!("swap against live pool");
        };
        prop_assert!(out.amount_out < Amount::new(rb));
        let Ok(r) = engine.reserves(asset_x(), asset_y()) else {
            panic!("distinct assets");
        };
        prop_assert!(!r.reserve_b.is_zero());
    }
}

// ---------------------------------------------------------------------------
// 4–5. Round trip and rollback
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_provide_withdraw_round_trip(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        a in 1u128..=1_000_000_000_000u128,
        b in 1u128..=1_000_000_000_000u128,
    ) {
        let engine = bootstrapped(ra, rb);
        let provided = match engine.provide_liquidity(&ctx(trader(2)), &provide_request(trader(2), a, b)) {
            Ok(provided) => provided,
            Err(err) => {
                // dust deposits mint nothing and are refused
                prop_assert!(matches!(err, AmmError::InvalidQuantity(_)), "unexpected {}", err);
                return Ok(());
            }
        };
        prop_assert!(provided.amount_a <= Amount::new(a));
        prop_assert!(provided.amount_b <= Amount::new(b));

        let withdrawn = engine.withdraw_liquidity(
            &ctx(trader(2)),
            &withdraw_request(trader(2), provided.liquidity),
        );
        let Ok(withdrawn) = withdrawn else {
            panic!("withdrawing freshly minted claims");
        };
        prop_assert!(withdrawn.amount_a <= provided.amount_a);
        prop_assert!(withdrawn.amount_b <= provided.amount_b);
    }

    #[test]
    fn prop_bootstrap_then_drain_leaves_remainder(
        a in reserve_strategy(),
        b in reserve_strategy(),
    ) {
        let engine = funded_engine(1);
        let Ok(provided) = engine.provide_liquidity(&ctx(trader(1)), &provide_request(trader(1), a, b)) else {
            panic!("bootstrap deposit");
        };
        let Ok(withdrawn) = engine.withdraw_liquidity(
            &ctx(trader(1)),
            &withdraw_request(trader(1), provided.liquidity),
        ) else {
            panic!("withdrawing the whole supply");
        };
        prop_assert!(withdrawn.amount_a <= Amount::new(a));
        prop_assert!(withdrawn.amount_b <= Amount::new(b));

        let Ok(r) = engine.reserves(asset_x(), asset_y()) else {
            panic!("distinct assets");
        };
        let (Some(left_a), Some(left_b)) = (
            Amount::new(a).checked_sub(&withdrawn.amount_a),
            Amount::new(b).checked_sub(&withdrawn.amount_b),
        ) else {
            panic!("payout exceeds deposit");
        };
        prop_assert_eq!(r.as_tuple(), (left_a, left_b));
        prop_assert!(engine.claim_total_supply().is_zero());
    }

    #[test]
    fn prop_failed_swap_changes_nothing(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in trade_strategy(),
    ) {
        let engine = bootstrapped(ra, rb);
        let Ok(quoted) = engine.quote_exact_in(Amount::new(amount_in), &[asset_x(), asset_y()]) else {
            panic!("quote against live pool");
        };
        let ledger_before = engine.reserve_ledger();
        let assets_before = engine.with_assets(|v| v.clone());

        let mut request = swap_request(trader(2), amount_in);
        request.amount_out_min = Amount::from_u256(quoted.get() + U256::from(1u64));
        prop_assert_eq!(
            engine.swap_exact_in(&ctx(trader(2)), &request),
            Err(AmmError::SlippageExceeded)
        );
        prop_assert_eq!(engine.reserve_ledger(), ledger_before);
        prop_assert_eq!(engine.with_assets(|v| v.clone()), assets_before);
    }
}

// ---------------------------------------------------------------------------
// 6. Ledger consistency over sequences
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_ledgers_stay_consistent(
        first in swap_op_strategy(),
        rest in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let engine = bootstrapped(1_000_000_000, 1_000_000_000);
        let mut committed = 0usize;

        for op in std::iter::once(first).chain(rest) {
            // individual calls may be refused; consistency must hold regardless
            let outcome = match op {
                Op::Provide { who, a, b } => engine
                    .provide_liquidity(&ctx(trader(who)), &provide_request(trader(who), a, b))
                    .map(|_| ()),
                Op::Withdraw { who, per_mille } => {
                    let balance = engine.claim_balance_of(&trader(who)).get();
                    let share = balance * U256::from(per_mille) / U256::from(1_000u64);
                    engine
                        .withdraw_liquidity(
                            &ctx(trader(who)),
                            &withdraw_request(trader(who), Liquidity::from_u256(share)),
                        )
                        .map(|_| ())
                }
                Op::Swap { who, amount_in } => engine
                    .swap_exact_in(&ctx(trader(who)), &swap_request(trader(who), amount_in))
                    .map(|_| ()),
            };
            if outcome.is_ok() {
                committed += 1;
            }

            let Ok(r) = engine.reserves(asset_x(), asset_y()) else {
                panic!("distinct assets");
            };
            prop_assert_eq!(r.reserve_a.is_zero(), r.reserve_b.is_zero(), "one-sided reserves {}", r);

            let held = engine.with_claims(|book| {
                book.holders().fold(U256::ZERO, |acc, (_, balance)| acc + balance.get())
            });
            prop_assert_eq!(held, engine.claim_total_supply().get());

            let custody = engine.with_assets(|v| (v.custody_of(asset_x()), v.custody_of(asset_y())));
            prop_assert_eq!(custody, r.as_tuple());
        }
        prop_assert!(committed > 0, "every operation was refused");
    }
}
