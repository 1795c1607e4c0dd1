//! Arithmetic for pool accounting.
//!
//! [`CheckedArithmetic`] turns the `Option`-returning checked operations of
//! the domain quantities into typed errors.  The [`liquidity_math`] module
//! holds the pure pricing and share functions the engine is built on.

mod checked;
pub mod liquidity_math;

pub use checked::CheckedArithmetic;
pub use liquidity_math::{
    bootstrap_liquidity, isqrt, min, optimal_amount, proportional_share, swap_output,
};
