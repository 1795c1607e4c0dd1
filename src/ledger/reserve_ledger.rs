//! Per-pair reserve accounting.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, PairKey, Reserves};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Reserves of every pool, keyed by ordered [`PairKey`].
///
/// Entries are created implicitly by the first [`add`](Self::add) and read
/// as `(0, 0)` when missing.  The ledger has no locking of its own; the
/// engine is its only mutator.
///
/// Serializes as a flat list of [`ReserveRecord`]s so hosts can persist it
/// with any serde format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ReserveRecord>", into = "Vec<ReserveRecord>")]
pub struct ReserveLedger {
    entries: HashMap<PairKey, Reserves>,
}

/// One persisted ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveRecord {
    /// Pool key.
    pub pair: PairKey,
    /// Reserves held for that key.
    pub reserves: Reserves,
}

impl ReserveLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the reserves for `pair`, `(0, 0)` if it was never funded.
    #[must_use]
    pub fn get(&self, pair: &PairKey) -> Reserves {
        self.entries.get(pair).copied().unwrap_or_default()
    }

    /// Increases both reserves of `pair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if either side would exceed 256 bits;
    /// the entry is left unchanged.
    pub fn add(&mut self, pair: PairKey, delta_a: Amount, delta_b: Amount) -> Result<(), AmmError> {
        let current = self.get(&pair);
        let next = Reserves::new(
            current.reserve_a.safe_add(&delta_a)?,
            current.reserve_b.safe_add(&delta_b)?,
        );
        self.entries.insert(pair, next);
        Ok(())
    }

    /// Decreases both reserves of `pair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if either delta exceeds its reserve;
    /// the entry is left unchanged.
    pub fn sub(&mut self, pair: PairKey, delta_a: Amount, delta_b: Amount) -> Result<(), AmmError> {
        let current = self.get(&pair);
        let reserve_a = current
            .reserve_a
            .checked_sub(&delta_a)
            .ok_or(AmmError::Underflow("reserve_a below zero"))?;
        let reserve_b = current
            .reserve_b
            .checked_sub(&delta_b)
            .ok_or(AmmError::Underflow("reserve_b below zero"))?;
        self.entries.insert(pair, Reserves::new(reserve_a, reserve_b));
        Ok(())
    }

    /// Iterates over every key the ledger has seen, including drained ones.
    pub fn pairs(&self) -> impl Iterator<Item = (&PairKey, &Reserves)> {
        self.entries.iter()
    }

    /// Number of keys the ledger has seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no pair was ever funded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<ReserveRecord>> for ReserveLedger {
    fn from(records: Vec<ReserveRecord>) -> Self {
        Self {
            entries: records
                .into_iter()
                .map(|record| (record.pair, record.reserves))
                .collect(),
        }
    }
}

impl From<ReserveLedger> for Vec<ReserveRecord> {
    fn from(ledger: ReserveLedger) -> Self {
        let mut records: Vec<ReserveRecord> = ledger
            .entries
            .into_iter()
            .map(|(pair, reserves)| ReserveRecord { pair, reserves })
            .collect();
        records.sort_by_key(|record| record.pair);
        records
    }
}
