//! Per-call transaction framing.

use super::AccountId;
use crate::error::AmmError;

/// Who is acting and when.
///
/// Every engine entry point receives the acting principal explicitly
/// instead of reading it from ambient state.  `timestamp` is the host's
/// clock reading for the call and is compared against the request's
/// deadline exactly once, at entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxContext {
    /// The acting principal: payer of deposits and holder of burned claims.
    pub caller: AccountId,
    /// Host timestamp of the call.
    pub timestamp: u64,
}

impl TxContext {
    /// Creates a context for `caller` at `timestamp`.
    #[must_use]
    pub const fn new(caller: AccountId, timestamp: u64) -> Self {
        Self { caller, timestamp }
    }

    /// Checks that `deadline` has not passed.
    ///
    /// A request is still valid at the instant of its deadline.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ExpiredDeadline`] if `timestamp > deadline`.
    pub const fn ensure_before(&self, deadline: u64) -> Result<(), AmmError> {
        if self.timestamp > deadline {
            return Err(AmmError::ExpiredDeadline {
                deadline,
                now: self.timestamp,
            });
        }
        Ok(())
    }
}
