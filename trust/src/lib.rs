//! The BrutaCritic trust engine's orchestration surface.
//!
//! [`TrustOrchestrator`] is the only component that sees all three rule
//! modules at once. For a concrete action it answers:
//! - **Vote**: is the user human, and does their budget cover `intensity²`?
//! - **Review**: is the user human, and does the library entry prove play?
//!
//! Every external fact (balance, humanity, library entry) is passed in by the
//! caller. The one exception is [`TrustOrchestrator::cast_vote`], which takes
//! the caller's ledger so that authorize-then-debit happens as one step.

pub mod config;
pub mod context;
pub mod decision;
pub mod error;
pub mod orchestrator;
pub mod stats;

pub use config::{ConfigError, TrustConfig};
pub use context::UserContext;
pub use decision::{VoteAuthorization, VoteReceipt};
pub use error::TrustError;
pub use orchestrator::TrustOrchestrator;
pub use stats::{Decision, DecisionStats};
