//! Trust parameters: every threshold the engine applies, as data.

use serde::{Deserialize, Serialize};

/// All tunable thresholds of the trust engine.
///
/// Loaded from the `[params]` table of the trust config; omitted fields take
/// the defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustParams {
    // ── Proof of play ────────────────────────────────────────────────────
    /// Minimum playtime for any verified review. Models storefront refund windows.
    /// Default: 120 minutes.
    pub baseline_playtime_minutes: u64,

    /// Minimum playtime for titles matching a deep-dive marker.
    /// Default: 1800 minutes (30 hours).
    pub deep_dive_playtime_minutes: u64,

    /// Case-sensitive title substrings that mark a deep-dive title.
    pub deep_dive_markers: Vec<String>,

    // ── Humanity ─────────────────────────────────────────────────────────
    /// Minimum liveness score that counts as human.
    pub liveness_threshold: f64,

    /// Maximum proof age in seconds. Default: 300 (5 minutes).
    pub proof_freshness_secs: u64,

    // ── Credits ──────────────────────────────────────────────────────────
    /// Balance granted when a ledger account is opened.
    pub starting_credits: i64,

    /// Credits granted per "earn" action.
    pub earn_credits_reward: i64,
}

impl TrustParams {
    /// The production defaults.
    pub fn brutacritic_defaults() -> Self {
        Self {
            baseline_playtime_minutes: 120,
            deep_dive_playtime_minutes: 1800,
            deep_dive_markers: ["Elden", "Starfield", "Halo", "Baldur"]
                .into_iter()
                .map(String::from)
                .collect(),
            liveness_threshold: 0.9,
            proof_freshness_secs: 300,
            starting_credits: 100,
            earn_credits_reward: 10,
        }
    }
}

impl Default for TrustParams {
    fn default() -> Self {
        Self::brutacritic_defaults()
    }
}
