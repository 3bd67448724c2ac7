//! Humanity proofs handed to the verifier by a proof source.

use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// The finished output of a liveness capture or knowledge challenge.
///
/// Not `Clone`: a proof is moved into the verifier and cannot be replayed
/// from the same value.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct BiometricProof {
    /// Confidence [0.0, 1.0] that the capture came from a live human.
    pub liveness_score: f64,
    /// Opaque uniqueness signature produced by the source.
    pub unique_hash: String,
    /// When the proof was produced.
    pub timestamp: Timestamp,
}

impl BiometricProof {
    pub fn new(liveness_score: f64, unique_hash: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            liveness_score,
            unique_hash: unique_hash.into(),
            timestamp,
        }
    }
}
