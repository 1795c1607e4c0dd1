//! The pool engine: provide liquidity, withdraw liquidity, swap.
//!
//! [`PoolEngine`] ties the [`ReserveLedger`](crate::ledger::ReserveLedger),
//! the [`liquidity_math`](crate::math::liquidity_math) functions and the two
//! collaborator ledgers together, and runs every entry point as a single
//! atomic unit.

mod journal;
mod pool_engine;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use pool_engine::PoolEngine;
