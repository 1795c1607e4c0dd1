//! Undo log for one engine operation.
//!
//! Every change an operation makes to the books goes through a [`Journal`],
//! which records it as a [`Step`].  On failure the steps are replayed
//! newest-first with their inverse movement, so only what the operation
//! touched is restored.

use tracing::error;

use crate::domain::{AccountId, Amount, AssetId, Liquidity, PairKey, Reserves};
use crate::error::{AmmError, Result};
use crate::ledger::ReserveLedger;
use crate::traits::{AssetLedger, ClaimLedger};

/// Everything an operation may change, guarded by the engine mutex.
#[derive(Debug)]
pub(super) struct Books<A, C> {
    pub(super) reserves: ReserveLedger,
    pub(super) assets: A,
    pub(super) claims: C,
}

/// A change already applied to the books.
#[derive(Debug, Clone, Copy)]
enum Step {
    Pulled {
        asset: AssetId,
        from: AccountId,
        amount: Amount,
    },
    Paid {
        asset: AssetId,
        to: AccountId,
        amount: Amount,
    },
    ReservesAdded {
        pair: PairKey,
        delta_a: Amount,
        delta_b: Amount,
    },
    ReservesRemoved {
        pair: PairKey,
        delta_a: Amount,
        delta_b: Amount,
    },
    Minted {
        to: AccountId,
        amount: Liquidity,
    },
    Burned {
        from: AccountId,
        amount: Liquidity,
    },
}

/// Mutable access to the books that remembers how to take it back.
pub(super) struct Journal<'a, A, C> {
    books: &'a mut Books<A, C>,
    steps: Vec<Step>,
}

impl<'a, A, C> Journal<'a, A, C>
where
    A: AssetLedger,
    C: ClaimLedger,
{
    pub(super) fn new(books: &'a mut Books<A, C>) -> Self {
        Self {
            books,
            steps: Vec::new(),
        }
    }

    pub(super) fn reserves(&self, pair: &PairKey) -> Reserves {
        self.books.reserves.get(pair)
    }

    pub(super) fn claims(&self) -> &C {
        &self.books.claims
    }

    /// Number of changes applied so far.
    pub(super) fn len(&self) -> usize {
        self.steps.len()
    }

    /// Moves `amount` of `asset` from `from` into pool custody.
    pub(super) fn pull(&mut self, asset: AssetId, from: AccountId, amount: Amount) -> Result<()> {
        transfer_into(&mut self.books.assets, asset, from, amount)?;
        self.steps.push(Step::Pulled {
            asset,
            from,
            amount,
        });
        Ok(())
    }

    /// Moves `amount` of `asset` from pool custody to `to`.
    pub(super) fn pay(&mut self, asset: AssetId, to: AccountId, amount: Amount) -> Result<()> {
        transfer_out(&mut self.books.assets, asset, to, amount)?;
        self.steps.push(Step::Paid { asset, to, amount });
        Ok(())
    }

    pub(super) fn add_reserves(
        &mut self,
        pair: PairKey,
        delta_a: Amount,
        delta_b: Amount,
    ) -> Result<()> {
        self.books.reserves.add(pair, delta_a, delta_b)?;
        self.steps.push(Step::ReservesAdded {
            pair,
            delta_a,
            delta_b,
        });
        Ok(())
    }

    pub(super) fn sub_reserves(
        &mut self,
        pair: PairKey,
        delta_a: Amount,
        delta_b: Amount,
    ) -> Result<()> {
        self.books.reserves.sub(pair, delta_a, delta_b)?;
        self.steps.push(Step::ReservesRemoved {
            pair,
            delta_a,
            delta_b,
        });
        Ok(())
    }

    pub(super) fn mint(&mut self, to: AccountId, amount: Liquidity) -> Result<()> {
        self.books.claims.mint(to, amount)?;
        self.steps.push(Step::Minted { to, amount });
        Ok(())
    }

    pub(super) fn burn(&mut self, from: AccountId, amount: Liquidity) -> Result<()> {
        self.books.claims.burn(from, amount)?;
        self.steps.push(Step::Burned { from, amount });
        Ok(())
    }

    /// Reverts every recorded step, newest first, and returns how many of
    /// them the collaborators refused to revert.
    pub(super) fn unwind(self) -> usize {
        let Self { books, steps } = self;
        let mut unreverted = 0;
        for step in steps.into_iter().rev() {
            let reverted = match step {
                Step::Pulled {
                    asset,
                    from,
                    amount,
                } => transfer_out(&mut books.assets, asset, from, amount),
                Step::Paid { asset, to, amount } => {
                    transfer_into(&mut books.assets, asset, to, amount)
                }
                Step::ReservesAdded {
                    pair,
                    delta_a,
                    delta_b,
                } => books.reserves.sub(pair, delta_a, delta_b),
                Step::ReservesRemoved {
                    pair,
                    delta_a,
                    delta_b,
                } => books.reserves.add(pair, delta_a, delta_b),
                Step::Minted { to, amount } => books.claims.burn(to, amount),
                Step::Burned { from, amount } => books.claims.mint(from, amount),
            };
            if let Err(err) = reverted {
                unreverted += 1;
                error!(?step, error = %err, "could not revert step");
            }
        }
        unreverted
    }
}

fn transfer_into<A: AssetLedger>(
    assets: &mut A,
    asset: AssetId,
    from: AccountId,
    amount: Amount,
) -> Result<()> {
    assets
        .transfer_into(asset, from, amount)
        .map_err(|source| AmmError::TransferFailed { asset, source })
}

fn transfer_out<A: AssetLedger>(
    assets: &mut A,
    asset: AssetId,
    to: AccountId,
    amount: Amount,
) -> Result<()> {
    assets
        .transfer_out(asset, to, amount)
        .map_err(|source| AmmError::TransferFailed { asset, source })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::ledger::{AssetVault, ClaimBook};

    fn usdc() -> AssetId {
        AssetId::from_bytes([1u8; 20])
    }

    fn weth() -> AssetId {
        AssetId::from_bytes([2u8; 20])
    }

    fn alice() -> AccountId {
        AccountId::from_bytes([0xa1; 20])
    }

    fn books() -> Books<AssetVault, ClaimBook> {
        let mut assets = AssetVault::new();
        for asset in [usdc(), weth()] {
            let Ok(()) = assets.credit(asset, alice(), Amount::new(1_000)) else {
                panic!("credit");
            };
        }
        Books {
            reserves: ReserveLedger::new(),
            assets,
            claims: ClaimBook::new(),
        }
    }

    #[test]
    fn unwind_restores_every_book() {
        let Ok(pair) = PairKey::new(usdc(), weth()) else {
            panic!("distinct assets");
        };
        let mut books = books();
        let assets_before = books.assets.clone();

        let mut journal = Journal::new(&mut books);
        let Ok(()) = journal.pull(usdc(), alice(), Amount::new(400)) else {
            panic!("pull");
        };
        let Ok(()) = journal.pull(weth(), alice(), Amount::new(100)) else {
            panic!("pull");
        };
        let Ok(()) = journal.add_reserves(pair, Amount::new(400), Amount::new(100)) else {
            panic!("add");
        };
        let Ok(()) = journal.mint(alice(), Liquidity::new(200)) else {
            panic!("mint");
        };
        let Ok(()) = journal.burn(alice(), Liquidity::new(50)) else {
            panic!("burn");
        };
        let Ok(()) = journal.sub_reserves(pair, Amount::new(40), Amount::new(10)) else {
            panic!("sub");
        };
        let Ok(()) = journal.pay(usdc(), alice(), Amount::new(40)) else {
            panic!("pay");
        };
        assert_eq!(journal.len(), 7);
        assert_eq!(journal.unwind(), 0);

        assert_eq!(books.assets, assets_before);
        assert!(books.reserves.get(&pair).is_empty());
        assert_eq!(books.claims, ClaimBook::new());
    }

    #[test]
    fn refused_step_is_not_recorded() {
        let mut books = books();
        let mut journal = Journal::new(&mut books);
        let refused = journal.pull(usdc(), alice(), Amount::new(1_001));
        assert!(matches!(refused, Err(AmmError::TransferFailed { .. })));
        assert_eq!(journal.len(), 0);
        assert_eq!(journal.unwind(), 0);
        assert_eq!(books.assets.balance_of(usdc(), &alice()), Amount::new(1_000));
    }
}
