//! Ledger errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("insufficient credits: need {needed}, have {available}")]
    InsufficientCredits { needed: i64, available: i64 },

    #[error("no credit account for user {0}")]
    UnknownAccount(String),

    #[error("credit account for user {0} already exists")]
    AccountExists(String),

    #[error("amount must be non-negative, got {0}")]
    NegativeAmount(i64),

    #[error("arithmetic overflow in credit balance")]
    Overflow,

    #[error("ledger lock poisoned")]
    Poisoned,
}
