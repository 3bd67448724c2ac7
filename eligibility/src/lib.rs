//! Proof-of-play eligibility.
//!
//! A library entry qualifies its owner to post a verified review when its
//! recorded playtime clears two bars:
//! 1. **Baseline**: past the storefront refund window (default 2 hours).
//! 2. **Deep dive**: titles matching a configured marker need far more
//!    (default 30 hours) before a review is credible.
//!
//! Falling short is an ordinary [`EligibilityVerdict`], not an error.

pub mod checker;
pub mod markers;
pub mod verdict;

pub use checker::PlaytimeEligibilityChecker;
pub use markers::DeepDiveMarkers;
pub use verdict::{EligibilityVerdict, IneligibilityReason};
