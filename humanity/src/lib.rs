//! Humanity verification (Sybil resistance).
//!
//! Before a user may vote or review, a fresh proof that they are a live,
//! unique human must pass a [`HumanityVerifier`]. The engine does not care
//! how the proof was captured; only that it is recent and confident enough.
//!
//! Strategies are interchangeable and chosen at composition time through
//! [`HumanityStrategy`]:
//! - [`LivenessVerifier`] for camera-based liveness captures.
//! - [`KnowledgeChallenge`] for quiz-based checks, which both grade answers
//!   into a proof and verify proofs produced by their own question bank.

pub mod challenge;
pub mod error;
pub mod strategy;
pub mod verifier;

pub use challenge::{ChallengeQuestion, KnowledgeChallenge, QuestionBank};
pub use error::HumanityError;
pub use strategy::HumanityStrategy;
pub use verifier::{HumanityVerifier, LivenessVerifier};
