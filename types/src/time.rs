//! Timestamp type used throughout the trust engine.
//!
//! Timestamps are Unix epoch seconds (UTC). Platform connectors report
//! `last_played` in this unit and proof sources stamp proofs with it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Get the current system time as a `Timestamp`.
    ///
    /// A clock set before the Unix epoch reads as [`Timestamp::EPOCH`].
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Seconds elapsed since this timestamp (relative to `now`).
    ///
    /// A timestamp in the future relative to `now` has elapsed zero seconds.
    pub fn elapsed_since(&self, now: Timestamp) -> u64 {
        now.0.saturating_sub(self.0)
    }

    /// Whether this timestamp lies strictly more than `window_secs` before `now`.
    pub fn is_older_than(&self, window_secs: u64, now: Timestamp) -> bool {
        self.elapsed_since(now) > window_secs
    }

    /// This timestamp moved back by `secs`, saturating at the epoch.
    pub fn saturating_sub_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_sub(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_saturates_for_future_timestamps() {
        let later = Timestamp::new(1_000);
        assert_eq!(later.elapsed_since(Timestamp::new(400)), 0);
        assert_eq!(Timestamp::new(400).elapsed_since(later), 600);
    }

    #[test]
    fn window_boundary_is_not_older() {
        let now = Timestamp::new(10_000);
        assert!(!now.saturating_sub_secs(300).is_older_than(300, now));
        assert!(now.saturating_sub_secs(301).is_older_than(300, now));
    }

    #[test]
    fn serializes_as_bare_seconds() {
        let json = serde_json::to_string(&Timestamp::new(1709424000)).unwrap();
        assert_eq!(json, "1709424000");
    }
}
