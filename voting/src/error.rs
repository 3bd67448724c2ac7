//! Vote pricing errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VotingError {
    #[error("vote intensity must be between {min} and {max}, got {got}")]
    InvalidIntensity { got: u32, min: u32, max: u32 },
}
