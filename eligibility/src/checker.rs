//! Playtime eligibility checker.

use crate::markers::DeepDiveMarkers;
use crate::verdict::{EligibilityVerdict, IneligibilityReason};
use brutacritic_types::{GameLibraryEntry, TrustParams};

/// Applies the baseline and deep-dive playtime bars to library entries.
#[derive(Clone, Debug)]
pub struct PlaytimeEligibilityChecker {
    baseline_minutes: u64,
    deep_dive_minutes: u64,
    markers: DeepDiveMarkers,
}

impl Default for PlaytimeEligibilityChecker {
    fn default() -> Self {
        Self::from_params(&TrustParams::brutacritic_defaults())
    }
}

impl PlaytimeEligibilityChecker {
    pub fn new(baseline_minutes: u64, deep_dive_minutes: u64, markers: DeepDiveMarkers) -> Self {
        Self {
            baseline_minutes,
            deep_dive_minutes,
            markers,
        }
    }

    pub fn from_params(params: &TrustParams) -> Self {
        Self::new(
            params.baseline_playtime_minutes,
            params.deep_dive_playtime_minutes,
            DeepDiveMarkers::new(params.deep_dive_markers.iter().cloned()),
        )
    }

    pub fn markers(&self) -> &DeepDiveMarkers {
        &self.markers
    }

    /// Decide whether `entry` supports a verified review.
    pub fn verify(&self, entry: &GameLibraryEntry) -> EligibilityVerdict {
        let played = entry.playtime_minutes;

        if played < self.baseline_minutes {
            tracing::debug!(
                game = %entry.id,
                platform = %entry.platform,
                played,
                "inside refund window"
            );
            return EligibilityVerdict::Ineligible(IneligibilityReason::RefundWindow {
                required_minutes: self.baseline_minutes,
                played_minutes: played,
            });
        }

        if let Some(marker) = self.markers.matching(&entry.title) {
            if played < self.deep_dive_minutes {
                tracing::debug!(
                    game = %entry.id,
                    platform = %entry.platform,
                    marker,
                    played,
                    "deep dive threshold unmet"
                );
                return EligibilityVerdict::Ineligible(IneligibilityReason::DeepDive {
                    marker: marker.to_string(),
                    required_minutes: self.deep_dive_minutes,
                    played_minutes: played,
                });
            }
        }

        EligibilityVerdict::Verified
    }

    /// Minutes still needed before `entry` qualifies; zero once it does.
    pub fn minutes_remaining(&self, entry: &GameLibraryEntry) -> u64 {
        match self.verify(entry) {
            EligibilityVerdict::Verified => 0,
            EligibilityVerdict::Ineligible(reason) => {
                // A short deep-dive title owes the full deep-dive bar, not just the baseline.
                let required = if self.markers.matches(&entry.title) {
                    self.deep_dive_minutes.max(reason.required_minutes())
                } else {
                    reason.required_minutes()
                };
                required.saturating_sub(entry.playtime_minutes)
            }
        }
    }

    /// Verdicts for a whole library, keyed by entry id, in input order.
    pub fn verify_library<'a>(
        &self,
        entries: &'a [GameLibraryEntry],
    ) -> Vec<(&'a str, EligibilityVerdict)> {
        entries
            .iter()
            .map(|e| (e.id.as_str(), self.verify(e)))
            .collect()
    }
}
