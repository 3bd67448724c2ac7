//! Decision counters.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Every decision kind the orchestrator counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    VoteAuthorized,
    VoteDeclined,
    ReviewVerified,
    ReviewIneligible,
    NotHuman,
    HumanityPassed,
    HumanityFailed,
}

impl Decision {
    pub const ALL: [Decision; 7] = [
        Self::VoteAuthorized,
        Self::VoteDeclined,
        Self::ReviewVerified,
        Self::ReviewIneligible,
        Self::NotHuman,
        Self::HumanityPassed,
        Self::HumanityFailed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VoteAuthorized => "votes_authorized",
            Self::VoteDeclined => "votes_declined",
            Self::ReviewVerified => "reviews_verified",
            Self::ReviewIneligible => "reviews_ineligible",
            Self::NotHuman => "not_human",
            Self::HumanityPassed => "humanity_passed",
            Self::HumanityFailed => "humanity_failed",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Lock-free counters, one per [`Decision`].
#[derive(Debug, Default)]
pub struct DecisionStats {
    counters: [AtomicU64; Decision::ALL.len()],
}

impl DecisionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, decision: Decision) {
        self.counters[decision.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self, decision: Decision) -> u64 {
        self.counters[decision.index()].load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> BTreeMap<&'static str, u64> {
        Decision::ALL
            .into_iter()
            .map(|d| (d.as_str(), self.get(d)))
            .collect()
    }
}
