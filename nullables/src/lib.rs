//! Nullable infrastructure for deterministic testing.
//!
//! The trust engine takes every external fact as an argument. These stand-ins
//! produce those facts deterministically:
//! - [`NullClock`]: time that only moves when told to.
//! - [`NullProofSource`]: humanity proofs with a chosen score.
//! - [`StaleReadLedger`]: a ledger whose balance reads lag its debits, to
//!   exercise the authorize-then-debit race.
//!
//! Fixture platform libraries live with the connectors in
//! `brutacritic-library`, since they are also a configurable backend.

pub mod clock;
pub mod ledger;
pub mod proof;

pub use clock::NullClock;
pub use ledger::StaleReadLedger;
pub use proof::NullProofSource;
