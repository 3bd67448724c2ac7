//! Nullable clock: proof and vote timestamps under test control.

use brutacritic_types::Timestamp;
use std::cell::Cell;

/// Wall time for tests, in unix seconds.
///
/// Proof freshness is judged against `now`, so tests age a captured proof by
/// advancing this clock rather than by sleeping.
pub struct NullClock {
    secs: Cell<u64>,
}

impl NullClock {
    pub fn new(start_secs: u64) -> Self {
        Self {
            secs: Cell::new(start_secs),
        }
    }

    pub fn now(&self) -> Timestamp {
        Timestamp::new(self.secs.get())
    }

    /// The instant `secs` before now, for back-dating a proof.
    pub fn ago(&self, secs: u64) -> Timestamp {
        self.now().saturating_sub_secs(secs)
    }

    pub fn advance(&self, secs: u64) {
        self.secs.set(self.secs.get().saturating_add(secs));
    }

    pub fn advance_minutes(&self, minutes: u64) {
        self.advance(minutes.saturating_mul(60));
    }

    pub fn set(&self, secs: u64) {
        self.secs.set(secs);
    }
}
