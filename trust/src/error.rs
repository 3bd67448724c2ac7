//! Orchestrator errors.
//!
//! Ineligibility is not here: a review that falls short of proof of play is
//! an ordinary verdict, returned as a value.

use brutacritic_humanity::HumanityError;
use brutacritic_ledger::LedgerError;
use brutacritic_voting::VotingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrustError {
    #[error("user has not passed a humanity check")]
    NotHuman,

    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] VotingError),

    #[error("humanity proof expired: {age_secs}s old, window is {window_secs}s")]
    ProofExpired { age_secs: u64, window_secs: u64 },

    #[error("humanity verification error: {0}")]
    Humanity(HumanityError),

    #[error("insufficient credits: vote costs {cost}, balance is {balance}")]
    InsufficientCredits { cost: i64, balance: i64 },

    #[error("ledger error: {0}")]
    Ledger(LedgerError),
}

impl From<HumanityError> for TrustError {
    fn from(e: HumanityError) -> Self {
        match e {
            HumanityError::ProofExpired {
                age_secs,
                window_secs,
            } => Self::ProofExpired {
                age_secs,
                window_secs,
            },
            other => Self::Humanity(other),
        }
    }
}

impl From<LedgerError> for TrustError {
    fn from(e: LedgerError) -> Self {
        match e {
            LedgerError::InsufficientCredits { needed, available } => Self::InsufficientCredits {
                cost: needed,
                balance: available,
            },
            other => Self::Ledger(other),
        }
    }
}
