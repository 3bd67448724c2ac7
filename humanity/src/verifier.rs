//! The humanity verifier capability and its liveness strategy.

use crate::error::HumanityError;
use brutacritic_types::{BiometricProof, Timestamp, TrustParams};

/// A pluggable humanity check.
///
/// Implementations must reject stale proofs with
/// [`HumanityError::ProofExpired`] before looking at the score, and report a
/// low score as `Ok(false)`.
pub trait HumanityVerifier: Send + Sync {
    /// Human-readable name of this strategy.
    fn name(&self) -> &str;

    /// Consume `proof` and decide whether it shows a live human at `now`.
    fn verify(&self, proof: BiometricProof, now: Timestamp) -> Result<bool, HumanityError>;
}

/// Accepts any proof that is fresh and confident enough.
#[derive(Clone, Debug)]
pub struct LivenessVerifier {
    threshold: f64,
    freshness_secs: u64,
}

impl Default for LivenessVerifier {
    fn default() -> Self {
        Self::from_params(&TrustParams::brutacritic_defaults())
    }
}

impl LivenessVerifier {
    pub fn new(threshold: f64, freshness_secs: u64) -> Self {
        Self {
            threshold,
            freshness_secs,
        }
    }

    pub fn from_params(params: &TrustParams) -> Self {
        Self::new(params.liveness_threshold, params.proof_freshness_secs)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn freshness_secs(&self) -> u64 {
        self.freshness_secs
    }
}

impl HumanityVerifier for LivenessVerifier {
    fn name(&self) -> &str {
        "liveness"
    }

    fn verify(&self, proof: BiometricProof, now: Timestamp) -> Result<bool, HumanityError> {
        check_proof(&proof, self.threshold, self.freshness_secs, now)
    }
}

/// Freshness first, then score sanity, then the threshold.
pub(crate) fn check_proof(
    proof: &BiometricProof,
    threshold: f64,
    freshness_secs: u64,
    now: Timestamp,
) -> Result<bool, HumanityError> {
    check_freshness(proof, freshness_secs, now)?;
    score_proof(proof, threshold)
}

pub(crate) fn check_freshness(
    proof: &BiometricProof,
    freshness_secs: u64,
    now: Timestamp,
) -> Result<(), HumanityError> {
    if proof.timestamp.is_older_than(freshness_secs, now) {
        return Err(HumanityError::ProofExpired {
            age_secs: proof.timestamp.elapsed_since(now),
            window_secs: freshness_secs,
        });
    }
    Ok(())
}

pub(crate) fn score_proof(proof: &BiometricProof, threshold: f64) -> Result<bool, HumanityError> {
    let score = proof.liveness_score;
    if !score.is_finite() || !(0.0..=1.0).contains(&score) {
        return Err(HumanityError::MalformedProof(format!(
            "liveness score {score} outside [0, 1]"
        )));
    }

    if score < threshold {
        tracing::warn!(score, threshold, "liveness check failed: potential bot or spoof");
        return Ok(false);
    }

    Ok(true)
}
