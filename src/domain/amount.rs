//! Raw asset amount with checked 256-bit arithmetic.

use core::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// A raw asset quantity in the asset's smallest unit.
///
/// Backed by a 256-bit unsigned integer so that `amount × reserve`
/// products never wrap.  `Amount` never interprets decimals.
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of panicking.  Division always
/// rounds towards zero.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(U256);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Maximum representable amount.
    pub const MAX: Self = Self(U256::MAX);

    /// Creates a new `Amount` from a `u128` value.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(value: u128) -> Self {
        Self(U256::from_limbs([value as u64, (value >> 64) as u64, 0, 0]))
    }

    /// Wraps a full-width 256-bit value.
    pub const fn from_u256(value: U256) -> Self {
        Self(value)
    }

    /// Returns the underlying 256-bit value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        self.0.checked_mul(other.0).map(Self)
    }

    /// Floor division. Returns `None` if `divisor` is zero.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self) -> Option<Self> {
        self.0.checked_div(divisor.0).map(Self)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self::new(value)
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Construction & accessors -------------------------------------------

    #[test]
    fn new_and_get() {
        assert_eq!(Amount::new(42).get(), U256::from(42u64));
    }

    #[test]
    fn new_keeps_high_limb() {
        let a = Amount::new(u128::MAX);
        assert_eq!(a.get(), U256::from(u128::MAX));
    }

    #[test]
    fn constants() {
        assert!(Amount::ZERO.is_zero());
        assert_eq!(Amount::MAX.get(), U256::MAX);
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn display_is_decimal() {
        assert_eq!(format!("{}", Amount::new(1_000_000)), "1000000");
    }

    #[test]
    fn ordering() {
        assert!(Amount::new(1) < Amount::new(2));
        assert!(Amount::new(u128::MAX) < Amount::MAX);
    }

    // -- Checked arithmetic ---------------------------------------------------

    #[test]
    fn add_past_u128_does_not_wrap() {
        let a = Amount::new(u128::MAX);
        let Some(sum) = a.checked_add(&Amount::new(1)) else {
            panic!("256-bit sum must fit");
        };
        assert_eq!(sum.get(), U256::from(u128::MAX) + U256::from(1u64));
    }

    #[test]
    fn add_overflow() {
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
    }

    #[test]
    fn sub_underflow() {
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
        assert_eq!(Amount::new(5).checked_sub(&Amount::new(5)), Some(Amount::ZERO));
    }

    #[test]
    fn mul_of_two_u128_fits() {
        let a = Amount::new(u128::MAX);
        assert!(a.checked_mul(&a).is_some());
        assert_eq!(Amount::MAX.checked_mul(&Amount::new(2)), None);
    }

    #[test]
    fn div_rounds_down() {
        assert_eq!(Amount::new(10).checked_div(&Amount::new(3)), Some(Amount::new(3)));
        assert_eq!(Amount::new(1).checked_div(&Amount::new(2)), Some(Amount::ZERO));
    }

    #[test]
    fn div_by_zero() {
        assert_eq!(Amount::new(100).checked_div(&Amount::ZERO), None);
    }
}
