//! Pure pricing and share functions.
//!
//! Every function here is deterministic and side-effect free.  All
//! quantities are 256-bit, every product is checked, and every division
//! rounds towards zero, so minted shares, redemptions and swap outputs
//! never exceed their exact rational value.
//!
//! # Formulas
//!
//! ```text
//! bootstrap shares   = isqrt(amount_a × amount_b)
//! optimal counterpart = amount × reserve_out / reserve_in
//! swap output         = amount_in × reserve_out / (reserve_in + amount_in)
//! proportional share  = amount × numerator / denominator
//! ```
//!
//! The swap output carries no fee term.

use alloy_primitives::U256;

use super::CheckedArithmetic;
use crate::domain::{Amount, Liquidity};
use crate::error::AmmError;

/// Integer square root: the largest `r` with `r × r ≤ n`.
///
/// Babylonian iteration seeded at `n / 2 + 1`, stopping as soon as the
/// next iterate no longer decreases.  Inputs `1..=3` return `1` and `0`
/// returns `0`.  The result is bit-exact and never rounds up.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use pair_amm::math::isqrt;
///
/// assert_eq!(isqrt(U256::from(4_000_000_000_000u64)), U256::from(2_000_000u64));
/// assert_eq!(isqrt(U256::from(8u64)), U256::from(2u64));
/// ```
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    let three = U256::from(3u64);
    if n > three {
        let two = U256::from(2u64);
        let mut z = n;
        let mut x = n / two + U256::from(1u64);
        while x < z {
            z = x;
            x = (n / x + x) / two;
        }
        z
    } else if n.is_zero() {
        U256::ZERO
    } else {
        U256::from(1u64)
    }
}

/// Claim tokens minted for the first deposit into an empty pool.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if `amount_a × amount_b` exceeds 256 bits.
pub fn bootstrap_liquidity(amount_a: Amount, amount_b: Amount) -> Result<Liquidity, AmmError> {
    let product = amount_a
        .checked_mul(&amount_b)
        .ok_or(AmmError::Overflow("bootstrap product overflow"))?;
    Ok(Liquidity::from_u256(isqrt(product.get())))
}

/// Counterpart deposit that preserves the current reserve ratio:
/// `floor(amount_desired × reserve_out / reserve_in)`.
///
/// # Errors
///
/// - [`AmmError::Overflow`] if the product exceeds 256 bits.
/// - [`AmmError::DivisionByZero`] if `reserve_in` is zero.
pub fn optimal_amount(
    amount_desired: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, AmmError> {
    proportional_share(amount_desired, reserve_out, reserve_in)
}

/// Output of an exact-input trade under `x · y = k` with zero fee:
/// `floor(amount_in × reserve_out / (reserve_in + amount_in))`.
///
/// The result is always strictly less than `reserve_out` and the reserve
/// product never decreases after the trade is applied.
///
/// # Errors
///
/// - [`AmmError::Overflow`] if the numerator or denominator exceeds 256 bits.
/// - [`AmmError::DivisionByZero`] if both `reserve_in` and `amount_in` are zero.
pub fn swap_output(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, AmmError> {
    let numerator = amount_in.safe_mul(&reserve_out)?;
    let denominator = reserve_in.safe_add(&amount_in)?;
    numerator.safe_div(&denominator)
}

/// `floor(amount × numerator / denominator)`.
///
/// Used to size mints against reserves and redemptions against supply.
///
/// # Errors
///
/// - [`AmmError::Overflow`] if `amount × numerator` exceeds 256 bits.
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
pub fn proportional_share(
    amount: Amount,
    numerator: Amount,
    denominator: Amount,
) -> Result<Amount, AmmError> {
    amount.safe_mul(&numerator)?.safe_div(&denominator)
}

/// The smaller of `a` and `b`; equal inputs return `a`.
#[must_use]
pub fn min<T: Ord>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}
