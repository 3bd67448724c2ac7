//! Quadratic vote pricing.
//!
//! Casting `n` votes worth of intensity on one subject costs `n²` credits, so
//! concentrating influence is disproportionately expensive. A single action
//! may carry at most [`MAX_INTENSITY`] votes.
//!
//! | intensity | 1 | 2 | 3 | ... | 10  |
//! |-----------|---|---|---|-----|-----|
//! | cost      | 1 | 4 | 9 | ... | 100 |

pub mod calculator;
pub mod error;

pub use calculator::{PricingTier, VoteCostCalculator, MAX_INTENSITY, MIN_INTENSITY};
pub use error::VotingError;
