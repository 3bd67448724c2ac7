//! Credit ledger.
//!
//! Balances belong to the caller, not the trust engine. The engine reads a
//! balance, prices a vote, and hands the cost back; the ledger then debits
//! it through [`CreditLedger::debit_if_at_least`], which checks and subtracts
//! in one step so two concurrent votes cannot both spend the same credits.

pub mod error;
pub mod memory;

pub use error::LedgerError;
pub use memory::InMemoryLedger;

use brutacritic_types::{Credits, TrustParams, UserId};

/// Storage for per-user credit balances.
pub trait CreditLedger: Send + Sync {
    /// Create an account with `starting` credits. Fails if it already exists.
    fn open_account(&self, user: &UserId, starting: Credits) -> Result<(), LedgerError>;

    /// Current balance.
    fn balance(&self, user: &UserId) -> Result<Credits, LedgerError>;

    /// Add credits, returning the new balance.
    fn credit(&self, user: &UserId, amount: Credits) -> Result<Credits, LedgerError>;

    /// Subtract `cost` only if the balance still covers it, returning the new
    /// balance. Leaves the balance untouched on failure.
    fn debit_if_at_least(&self, user: &UserId, cost: Credits) -> Result<Credits, LedgerError>;
}

/// Grant the per-action reward configured in `params`.
pub fn earn<L: CreditLedger + ?Sized>(
    ledger: &L,
    user: &UserId,
    params: &TrustParams,
) -> Result<Credits, LedgerError> {
    ledger.credit(user, params.earn_credits_reward)
}
