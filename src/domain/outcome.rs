//! Results of the three engine entry points.

use core::fmt;

use super::{Amount, Liquidity};

/// What a committed deposit moved and minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProvideOutcome {
    /// Asset A actually deposited.
    pub amount_a: Amount,
    /// Asset B actually deposited.
    pub amount_b: Amount,
    /// Claim tokens issued to the recipient.
    pub liquidity: Liquidity,
}

/// What a committed redemption paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawOutcome {
    /// Asset A sent to the recipient.
    pub amount_a: Amount,
    /// Asset B sent to the recipient.
    pub amount_b: Amount,
}

/// What a committed trade exchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    /// Input asset taken from the caller.
    pub amount_in: Amount,
    /// Output asset sent to the recipient.
    pub amount_out: Amount,
}

impl fmt::Display for ProvideOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Provide(a={}, b={}, liquidity={})",
            self.amount_a, self.amount_b, self.liquidity
        )
    }
}

impl fmt::Display for WithdrawOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Withdraw(a={}, b={})", self.amount_a, self.amount_b)
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Swap(in={}, out={})", self.amount_in, self.amount_out)
    }
}
