//! Humanity verification errors.
//!
//! A low score is not an error; verifiers return `Ok(false)` for it.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum HumanityError {
    #[error("humanity proof expired: {age_secs}s old, window is {window_secs}s")]
    ProofExpired { age_secs: u64, window_secs: u64 },

    #[error("malformed humanity proof: {0}")]
    MalformedProof(String),

    #[error("expected {expected} answers, got {got}")]
    AnswerCountMismatch { expected: usize, got: usize },

    #[error("unknown humanity strategy: {0}")]
    UnknownStrategy(String),
}
