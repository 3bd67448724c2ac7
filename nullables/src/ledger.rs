//! Nullable ledger: balance reads that lag behind debits.

use brutacritic_ledger::{CreditLedger, InMemoryLedger, LedgerError};
use brutacritic_types::{Credits, UserId};
use std::sync::Mutex;

/// Wraps an [`InMemoryLedger`] but answers `balance` with a value captured
/// earlier, as if another request spent credits between this request's read
/// and its debit.
pub struct StaleReadLedger {
    inner: InMemoryLedger,
    stale: Mutex<Option<Credits>>,
}

impl StaleReadLedger {
    pub fn new(inner: InMemoryLedger) -> Self {
        Self {
            inner,
            stale: Mutex::new(None),
        }
    }

    /// Freeze the next `balance` reads at `user`'s current balance, then
    /// spend `concurrent_spend` behind the reader's back.
    pub fn race(&self, user: &UserId, concurrent_spend: Credits) -> Result<(), LedgerError> {
        let seen = self.inner.balance(user)?;
        *self.stale.lock().map_err(|_| LedgerError::Poisoned)? = Some(seen);
        self.inner.debit_if_at_least(user, concurrent_spend)?;
        Ok(())
    }

    /// The real balance, bypassing the stale read.
    pub fn actual_balance(&self, user: &UserId) -> Result<Credits, LedgerError> {
        self.inner.balance(user)
    }
}

impl CreditLedger for StaleReadLedger {
    fn open_account(&self, user: &UserId, starting: Credits) -> Result<(), LedgerError> {
        self.inner.open_account(user, starting)
    }

    fn balance(&self, user: &UserId) -> Result<Credits, LedgerError> {
        match *self.stale.lock().map_err(|_| LedgerError::Poisoned)? {
            Some(seen) => Ok(seen),
            None => self.inner.balance(user),
        }
    }

    fn credit(&self, user: &UserId, amount: Credits) -> Result<Credits, LedgerError> {
        self.inner.credit(user, amount)
    }

    fn debit_if_at_least(&self, user: &UserId, cost: Credits) -> Result<Credits, LedgerError> {
        self.inner.debit_if_at_least(user, cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lag_after_a_race() {
        let user = UserId::new("u");
        let ledger = StaleReadLedger::new(InMemoryLedger::with_accounts([(user.clone(), 100)]));
        ledger.race(&user, 60).unwrap();
        assert_eq!(ledger.balance(&user), Ok(100));
        assert_eq!(ledger.actual_balance(&user), Ok(40));
        assert!(ledger.debit_if_at_least(&user, 49).is_err());
    }
}
