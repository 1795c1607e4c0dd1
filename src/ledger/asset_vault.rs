//! In-memory asset ledger with pool custody.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::TransferError;
use crate::traits::AssetLedger;

/// Per-account asset balances and the pool's custody balance per asset.
///
/// Zero balances are not stored: an account whose last asset drains is
/// removed, as is a custody entry that reaches zero.
///
/// [`credit`](Self::credit) funds an account out of thin air; it stands in
/// for whatever issuance the real asset ledger has and is meant for hosts
/// and tests seeding state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetVault {
    balances: HashMap<AccountId, HashMap<AssetId, Amount>>,
    custody: HashMap<AssetId, Amount>,
}

impl AssetVault {
    /// Creates an empty vault.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` of `asset` to `who`'s balance.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Overflow`] if the balance would exceed 256 bits.
    pub fn credit(
        &mut self,
        asset: AssetId,
        who: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let next = self
            .balance_of(asset, &who)
            .checked_add(&amount)
            .ok_or(TransferError::Overflow)?;
        self.set_balance(asset, who, next);
        Ok(())
    }

    /// Balance of `asset` held by `who`.
    #[must_use]
    pub fn balance_of(&self, asset: AssetId, who: &AccountId) -> Amount {
        self.balances
            .get(who)
            .and_then(|assets| assets.get(&asset))
            .copied()
            .unwrap_or_default()
    }

    /// Quantity of `asset` held in pool custody, across all pairs.
    #[must_use]
    pub fn custody_of(&self, asset: AssetId) -> Amount {
        self.custody.get(&asset).copied().unwrap_or_default()
    }

    /// Number of accounts holding a positive balance of some asset.
    #[must_use]
    pub fn accounts(&self) -> usize {
        self.balances.len()
    }

    fn set_custody(&mut self, asset: AssetId, amount: Amount) {
        if amount.is_zero() {
            self.custody.remove(&asset);
        } else {
            self.custody.insert(asset, amount);
        }
    }

    fn set_balance(&mut self, asset: AssetId, who: AccountId, amount: Amount) {
        if !amount.is_zero() {
            self.balances.entry(who).or_default().insert(asset, amount);
            return;
        }
        if let Some(assets) = self.balances.get_mut(&who) {
            assets.remove(&asset);
            if assets.is_empty() {
                self.balances.remove(&who);
            }
        }
    }
}

impl AssetLedger for AssetVault {
    fn transfer_into(
        &mut self,
        asset: AssetId,
        from: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let payer = self
            .balance_of(asset, &from)
            .checked_sub(&amount)
            .ok_or(TransferError::InsufficientBalance)?;
        let custody = self
            .custody_of(asset)
            .checked_add(&amount)
            .ok_or(TransferError::Overflow)?;
        self.set_balance(asset, from, payer);
        self.set_custody(asset, custody);
        trace!(%asset, %from, %amount, "asset moved into custody");
        Ok(())
    }

    fn transfer_out(
        &mut self,
        asset: AssetId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let custody = self
            .custody_of(asset)
            .checked_sub(&amount)
            .ok_or(TransferError::InsufficientCustody)?;
        let payee = self
            .balance_of(asset, &to)
            .checked_add(&amount)
            .ok_or(TransferError::Overflow)?;
        self.set_custody(asset, custody);
        self.set_balance(asset, to, payee);
        trace!(%asset, %to, %amount, "asset released from custody");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn usdc() -> AssetId {
        AssetId::from_bytes([1u8; 20])
    }

    fn alice() -> AccountId {
        AccountId::from_bytes([0xa1; 20])
    }

    fn funded(amount: u128) -> AssetVault {
        let mut vault = AssetVault::new();
        let Ok(()) = vault.credit(usdc(), alice(), Amount::new(amount)) else {
            panic!("expected Ok");
        };
        vault
    }

    #[test]
    fn transfer_into_moves_to_custody() {
        let mut vault = funded(1_000);
        let Ok(()) = vault.transfer_into(usdc(), alice(), Amount::new(400)) else {
            panic!("expected Ok");
        };
        assert_eq!(vault.balance_of(usdc(), &alice()), Amount::new(600));
        assert_eq!(vault.custody_of(usdc()), Amount::new(400));
    }

    #[test]
    fn transfer_into_refuses_overdraft() {
        let mut vault = funded(100);
        assert_eq!(
            vault.transfer_into(usdc(), alice(), Amount::new(101)),
            Err(TransferError::InsufficientBalance)
        );
        assert_eq!(vault.balance_of(usdc(), &alice()), Amount::new(100));
        assert!(vault.custody_of(usdc()).is_zero());
    }

    #[test]
    fn transfer_out_pays_from_custody() {
        let mut vault = funded(1_000);
        let Ok(()) = vault.transfer_into(usdc(), alice(), Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        let bob = AccountId::from_bytes([0xb0; 20]);
        let Ok(()) = vault.transfer_out(usdc(), bob, Amount::new(250)) else {
            panic!("expected Ok");
        };
        assert_eq!(vault.balance_of(usdc(), &bob), Amount::new(250));
        assert_eq!(vault.custody_of(usdc()), Amount::new(750));
    }

    #[test]
    fn transfer_out_refuses_beyond_custody() {
        let mut vault = funded(10);
        assert_eq!(
            vault.transfer_out(usdc(), alice(), Amount::new(1)),
            Err(TransferError::InsufficientCustody)
        );
    }
    #[test]
    fn drained_balances_are_not_kept() {
        let mut vault = funded(500);
        let Ok(()) = vault.transfer_into(usdc(), alice(), Amount::new(500)) else {
            panic!("expected Ok");
        };
        assert_eq!(vault.accounts(), 0);
        assert_eq!(vault.custody_of(usdc()), Amount::new(500));

        let Ok(()) = vault.transfer_out(usdc(), alice(), Amount::new(500)) else {
            panic!("expected Ok");
        };
        assert_eq!(vault, funded(500));
    }

    #[test]
    fn zero_credit_leaves_no_entry() {
        let mut vault = AssetVault::new();
        let Ok(()) = vault.credit(usdc(), alice(), Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(vault, AssetVault::new());
    }
}
