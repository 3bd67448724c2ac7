//! Nullable proof source: canned humanity proofs.

use brutacritic_types::{BiometricProof, Timestamp};

/// Produces proofs with a fixed score and signature, stamped at the time
/// requested.
#[derive(Clone, Debug)]
pub struct NullProofSource {
    liveness_score: f64,
    unique_hash: String,
}

impl NullProofSource {
    pub fn new(liveness_score: f64, unique_hash: impl Into<String>) -> Self {
        Self {
            liveness_score,
            unique_hash: unique_hash.into(),
        }
    }

    /// A confident capture from a live human.
    pub fn human() -> Self {
        Self::new(0.98, "0xHuman_12345_Unique_Signature")
    }

    /// A capture that looks like a replay or spoof.
    pub fn spoof() -> Self {
        Self::new(0.42, "0xSpoof_00000")
    }

    pub fn capture(&self, at: Timestamp) -> BiometricProof {
        BiometricProof::new(self.liveness_score, self.unique_hash.clone(), at)
    }
}

impl Default for NullProofSource {
    fn default() -> Self {
        Self::human()
    }
}
