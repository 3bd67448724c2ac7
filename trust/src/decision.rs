//! Decisions returned to callers.

use brutacritic_types::{Credits, VoteTransaction};
use serde::{Deserialize, Serialize};

/// Outcome of pricing a vote against a budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteAuthorization {
    pub authorized: bool,
    /// Credits the caller must debit if it records the vote.
    pub cost: u64,
    /// The budget the vote was checked against.
    pub budget: Credits,
}

impl VoteAuthorization {
    /// Budget left once the cost is debited; `None` when not authorized.
    pub fn remaining_after(&self) -> Option<Credits> {
        self.authorized
            .then(|| self.budget - Credits::try_from(self.cost).unwrap_or(Credits::MAX))
    }
}

/// A vote that was authorized and paid for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReceipt {
    pub transaction: VoteTransaction,
    pub cost: u64,
    pub balance_after: Credits,
}
