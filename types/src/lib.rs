//! Value objects shared across the BrutaCritic trust engine.
//!
//! Every type here is created once and consumed once: library entries come
//! from platform connectors, proofs from humanity-proof sources, and vote
//! transactions from the caller's history. None of them is mutated in place.

pub mod id;
pub mod params;
pub mod platform;
pub mod proof;
pub mod time;
pub mod vote;

pub use id::{SubjectId, UserId};
pub use params::TrustParams;
pub use platform::{GameLibraryEntry, ParsePlatformError, Platform};
pub use proof::BiometricProof;
pub use time::Timestamp;
pub use vote::VoteTransaction;

/// A credit balance. Signed so that an overspent history yields a negative
/// remaining budget instead of wrapping.
pub type Credits = i64;
