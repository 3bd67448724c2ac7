//! Thread-safe in-memory ledger.

use crate::error::LedgerError;
use crate::CreditLedger;
use brutacritic_types::{Credits, UserId};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// An in-memory credit ledger. Every operation holds one lock for its whole
/// read-modify-write.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: Mutex<HashMap<UserId, Credits>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger with pre-opened accounts.
    pub fn with_accounts<I>(accounts: I) -> Self
    where
        I: IntoIterator<Item = (UserId, Credits)>,
    {
        Self {
            balances: Mutex::new(accounts.into_iter().collect()),
        }
    }

    pub fn account_count(&self) -> Result<usize, LedgerError> {
        Ok(self.lock()?.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<UserId, Credits>>, LedgerError> {
        self.balances.lock().map_err(|_| LedgerError::Poisoned)
    }
}

impl CreditLedger for InMemoryLedger {
    fn open_account(&self, user: &UserId, starting: Credits) -> Result<(), LedgerError> {
        if starting < 0 {
            return Err(LedgerError::NegativeAmount(starting));
        }
        let mut balances = self.lock()?;
        if balances.contains_key(user) {
            return Err(LedgerError::AccountExists(user.to_string()));
        }
        balances.insert(user.clone(), starting);
        tracing::debug!(user = %user, starting, "opened credit account");
        Ok(())
    }

    fn balance(&self, user: &UserId) -> Result<Credits, LedgerError> {
        self.lock()?
            .get(user)
            .copied()
            .ok_or_else(|| LedgerError::UnknownAccount(user.to_string()))
    }

    fn credit(&self, user: &UserId, amount: Credits) -> Result<Credits, LedgerError> {
        if amount < 0 {
            return Err(LedgerError::NegativeAmount(amount));
        }
        let mut balances = self.lock()?;
        let balance = balances
            .get_mut(user)
            .ok_or_else(|| LedgerError::UnknownAccount(user.to_string()))?;
        *balance = balance.checked_add(amount).ok_or(LedgerError::Overflow)?;
        Ok(*balance)
    }

    fn debit_if_at_least(&self, user: &UserId, cost: Credits) -> Result<Credits, LedgerError> {
        if cost < 0 {
            return Err(LedgerError::NegativeAmount(cost));
        }
        let mut balances = self.lock()?;
        let balance = balances
            .get_mut(user)
            .ok_or_else(|| LedgerError::UnknownAccount(user.to_string()))?;
        if *balance < cost {
            return Err(LedgerError::InsufficientCredits {
                needed: cost,
                available: *balance,
            });
        }
        *balance -= cost;
        Ok(*balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::earn;
    use brutacritic_types::TrustParams;
    use std::sync::Arc;
    use std::thread;

    fn user() -> UserId {
        UserId::new("user1")
    }

    #[test]
    fn open_credit_and_debit() {
        let ledger = InMemoryLedger::new();
        ledger.open_account(&user(), 100).unwrap();
        assert_eq!(ledger.credit(&user(), 10), Ok(110));
        assert_eq!(ledger.debit_if_at_least(&user(), 49), Ok(61));
        assert_eq!(ledger.balance(&user()), Ok(61));
    }

    #[test]
    fn failed_debit_leaves_balance_untouched() {
        let ledger = InMemoryLedger::with_accounts([(user(), 50)]);
        assert_eq!(
            ledger.debit_if_at_least(&user(), 64),
            Err(LedgerError::InsufficientCredits {
                needed: 64,
                available: 50
            })
        );
        assert_eq!(ledger.balance(&user()), Ok(50));
    }

    #[test]
    fn exact_balance_can_be_spent() {
        let ledger = InMemoryLedger::with_accounts([(user(), 49)]);
        assert_eq!(ledger.debit_if_at_least(&user(), 49), Ok(0));
    }

    #[test]
    fn unknown_and_duplicate_accounts() {
        let ledger = InMemoryLedger::new();
        assert!(matches!(
            ledger.balance(&user()),
            Err(LedgerError::UnknownAccount(_))
        ));
        ledger.open_account(&user(), 0).unwrap();
        assert!(matches!(
            ledger.open_account(&user(), 5),
            Err(LedgerError::AccountExists(_))
        ));
    }

    #[test]
    fn negative_amounts_rejected() {
        let ledger = InMemoryLedger::with_accounts([(user(), 10)]);
        assert_eq!(ledger.credit(&user(), -1), Err(LedgerError::NegativeAmount(-1)));
        assert_eq!(
            ledger.debit_if_at_least(&user(), -1),
            Err(LedgerError::NegativeAmount(-1))
        );
    }

    #[test]
    fn earn_grants_configured_reward() {
        let ledger = InMemoryLedger::with_accounts([(user(), 100)]);
        assert_eq!(earn(&ledger, &user(), &TrustParams::brutacritic_defaults()), Ok(110));
    }

    #[test]
    fn concurrent_debits_never_overspend() {
        let ledger = Arc::new(InMemoryLedger::with_accounts([(user(), 100)]));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                thread::spawn(move || ledger.debit_if_at_least(&user(), 49).is_ok())
            })
            .collect();
        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 2);
        assert_eq!(ledger.balance(&user()), Ok(2));
    }
}
