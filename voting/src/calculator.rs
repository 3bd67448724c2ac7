//! Cost and budget arithmetic for quadratic votes.

use crate::error::VotingError;
use brutacritic_types::{Credits, VoteTransaction};
use serde::{Deserialize, Serialize};

/// Smallest intensity a vote may carry.
pub const MIN_INTENSITY: u32 = 1;
/// Largest intensity a single actor may put on one subject in one action.
pub const MAX_INTENSITY: u32 = 10;

/// One row of the pricing table shown next to the vote slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    pub intensity: u32,
    pub cost: u64,
}

const fn build_pricing_table() -> [PricingTier; MAX_INTENSITY as usize] {
    let mut table = [PricingTier { intensity: 0, cost: 0 }; MAX_INTENSITY as usize];
    let mut i = 0;
    while i < table.len() {
        let intensity = i as u32 + MIN_INTENSITY;
        table[i] = PricingTier {
            intensity,
            cost: intensity as u64 * intensity as u64,
        };
        i += 1;
    }
    table
}

static PRICING_TABLE: [PricingTier; MAX_INTENSITY as usize] = build_pricing_table();

/// Stateless quadratic-voting calculator.
#[derive(Clone, Copy, Debug, Default)]
pub struct VoteCostCalculator;

impl VoteCostCalculator {
    /// Credit cost of a vote: `intensity²`.
    pub fn cost(&self, intensity: u32) -> Result<u64, VotingError> {
        if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&intensity) {
            return Err(VotingError::InvalidIntensity {
                got: intensity,
                min: MIN_INTENSITY,
                max: MAX_INTENSITY,
            });
        }
        let i = u64::from(intensity);
        Ok(i * i)
    }

    /// Budget left after paying for every transaction in `history`.
    ///
    /// Fails on the first out-of-range intensity instead of skipping it.
    /// The result is negative when the history overspends `total_budget`.
    pub fn remaining_budget(
        &self,
        total_budget: Credits,
        history: &[VoteTransaction],
    ) -> Result<Credits, VotingError> {
        let spent = history.iter().try_fold(0u64, |sum, tx| {
            self.cost(tx.intensity).map(|c| sum.saturating_add(c))
        })?;
        Ok(total_budget.saturating_sub(credits_from(spent)))
    }

    /// Whether `current_budget` covers a vote of `intensity`.
    pub fn can_afford(&self, current_budget: Credits, intensity: u32) -> Result<bool, VotingError> {
        let cost = self.cost(intensity)?;
        Ok(current_budget >= credits_from(cost))
    }

    /// The largest intensity `current_budget` covers, if any.
    pub fn max_affordable_intensity(&self, current_budget: Credits) -> Option<u32> {
        PRICING_TABLE
            .iter()
            .rev()
            .find(|tier| current_budget >= credits_from(tier.cost))
            .map(|tier| tier.intensity)
    }

    /// `(intensity, cost)` for every valid intensity, ascending.
    pub fn pricing_table(&self) -> &'static [PricingTier] {
        &PRICING_TABLE
    }
}

fn credits_from(cost: u64) -> Credits {
    Credits::try_from(cost).unwrap_or(Credits::MAX)
}
