//! Recorded vote transactions.

use crate::id::SubjectId;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// A vote of some intensity cast on one subject.
///
/// The intensity is kept exactly as recorded. Range checks happen when the
/// transaction is priced, so a corrupt history is reported rather than
/// silently repaired.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTransaction {
    pub subject_id: SubjectId,
    pub intensity: u32,
    pub timestamp: Timestamp,
}

impl VoteTransaction {
    pub fn new(subject_id: SubjectId, intensity: u32, timestamp: Timestamp) -> Self {
        Self {
            subject_id,
            intensity,
            timestamp,
        }
    }
}
