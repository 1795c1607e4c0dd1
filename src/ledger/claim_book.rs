//! In-memory claim-token ledger.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, Liquidity};
use crate::error::AmmError;
use crate::traits::ClaimLedger;

/// Claim-token balances plus the global supply counter.
///
/// Holders whose balance drops to zero are removed, so
/// [`holders`](Self::holders) lists only accounts with a positive balance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimBook {
    balances: HashMap<AccountId, Liquidity>,
    total_supply: Liquidity,
}

impl ClaimBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates over holders with a positive balance.
    pub fn holders(&self) -> impl Iterator<Item = (&AccountId, &Liquidity)> {
        self.balances.iter()
    }
}

impl ClaimLedger for ClaimBook {
    fn mint(&mut self, to: AccountId, amount: Liquidity) -> Result<(), AmmError> {
        if amount.is_zero() {
            return Ok(());
        }
        let supply = self
            .total_supply
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("claim supply overflow"))?;
        let balance = self
            .balance_of(&to)
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("claim balance overflow"))?;
        self.total_supply = supply;
        self.balances.insert(to, balance);
        Ok(())
    }

    fn burn(&mut self, from: AccountId, amount: Liquidity) -> Result<(), AmmError> {
        let balance = self
            .balance_of(&from)
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientClaimBalance)?;
        let supply = self
            .total_supply
            .checked_sub(&amount)
            .ok_or(AmmError::Underflow("claim supply below zero"))?;
        self.total_supply = supply;
        if balance.is_zero() {
            self.balances.remove(&from);
        } else {
            self.balances.insert(from, balance);
        }
        Ok(())
    }

    fn balance_of(&self, who: &AccountId) -> Liquidity {
        self.balances.get(who).copied().unwrap_or_default()
    }

    fn total_supply(&self) -> Liquidity {
        self.total_supply
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn alice() -> AccountId {
        AccountId::from_bytes([0xa1; 20])
    }

    fn bob() -> AccountId {
        AccountId::from_bytes([0xb0; 20])
    }

    fn supply_matches_balances(book: &ClaimBook) -> bool {
        let sum = book
            .holders()
            .fold(Liquidity::ZERO, |acc, (_, bal)| {
                acc.checked_add(bal).unwrap_or(Liquidity::ZERO)
            });
        sum == book.total_supply()
    }

    #[test]
    fn mint_credits_holder_and_supply() {
        let mut book = ClaimBook::new();
        let Ok(()) = book.mint(alice(), Liquidity::new(500)) else {
            panic!("expected Ok");
        };
        let Ok(()) = book.mint(bob(), Liquidity::new(250)) else {
            panic!("expected Ok");
        };
        assert_eq!(book.balance_of(&alice()), Liquidity::new(500));
        assert_eq!(book.total_supply(), Liquidity::new(750));
        assert!(supply_matches_balances(&book));
    }

    #[test]
    fn burn_debits_holder_and_supply() {
        let mut book = ClaimBook::new();
        let Ok(()) = book.mint(alice(), Liquidity::new(500)) else {
            panic!("expected Ok");
        };
        let Ok(()) = book.burn(alice(), Liquidity::new(200)) else {
            panic!("expected Ok");
        };
        assert_eq!(book.balance_of(&alice()), Liquidity::new(300));
        assert_eq!(book.total_supply(), Liquidity::new(300));
        assert!(supply_matches_balances(&book));
    }

    #[test]
    fn burn_more_than_balance_rejected_without_change() {
        let mut book = ClaimBook::new();
        let Ok(()) = book.mint(alice(), Liquidity::new(10)) else {
            panic!("expected Ok");
        };
        let Ok(()) = book.mint(bob(), Liquidity::new(10)) else {
            panic!("expected Ok");
        };
        assert_eq!(
            book.burn(alice(), Liquidity::new(11)),
            Err(AmmError::InsufficientClaimBalance)
        );
        assert_eq!(book.total_supply(), Liquidity::new(20));
    }

    #[test]
    fn burning_whole_balance_drops_holder() {
        let mut book = ClaimBook::new();
        let Ok(()) = book.mint(alice(), Liquidity::new(10)) else {
            panic!("expected Ok");
        };
        let Ok(()) = book.burn(alice(), Liquidity::new(10)) else {
            panic!("expected Ok");
        };
        assert_eq!(book.holders().count(), 0);
        assert!(book.total_supply().is_zero());
    }

    #[test]
    fn zero_mint_is_noop() {
        let mut book = ClaimBook::new();
        let Ok(()) = book.mint(alice(), Liquidity::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(book.holders().count(), 0);
    }
}
