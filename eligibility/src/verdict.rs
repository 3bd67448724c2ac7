//! Eligibility verdicts.

use brutacritic_utils::format_playtime;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Why an entry does not (yet) qualify.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IneligibilityReason {
    /// Playtime is still inside the storefront refund window.
    RefundWindow { required_minutes: u64, played_minutes: u64 },
    /// A deep-dive title has not been played long enough.
    DeepDive {
        marker: String,
        required_minutes: u64,
        played_minutes: u64,
    },
}

impl IneligibilityReason {
    pub fn required_minutes(&self) -> u64 {
        match self {
            Self::RefundWindow { required_minutes, .. } | Self::DeepDive { required_minutes, .. } => {
                *required_minutes
            }
        }
    }

    pub fn played_minutes(&self) -> u64 {
        match self {
            Self::RefundWindow { played_minutes, .. } | Self::DeepDive { played_minutes, .. } => {
                *played_minutes
            }
        }
    }
}

impl fmt::Display for IneligibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RefundWindow { required_minutes, .. } => write!(
                f,
                "<{} playtime — refund window",
                format_playtime(*required_minutes)
            ),
            Self::DeepDive { required_minutes, .. } => write!(
                f,
                "deep dive: requires {}+",
                format_playtime(*required_minutes)
            ),
        }
    }
}

/// Outcome of a proof-of-play check. A reason exists exactly when the entry
/// is not verified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EligibilityVerdict {
    Verified,
    Ineligible(IneligibilityReason),
}

impl EligibilityVerdict {
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }

    /// Human-readable reason, present iff the entry is not verified.
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Verified => None,
            Self::Ineligible(reason) => Some(reason.to_string()),
        }
    }
}

/// Serialises as `{ "verified": bool, "reason"?: string }`.
impl Serialize for EligibilityVerdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Verified => {
                let mut s = serializer.serialize_struct("EligibilityVerdict", 1)?;
                s.serialize_field("verified", &true)?;
                s.end()
            }
            Self::Ineligible(reason) => {
                let mut s = serializer.serialize_struct("EligibilityVerdict", 2)?;
                s.serialize_field("verified", &false)?;
                s.serialize_field("reason", &reason.to_string())?;
                s.end()
            }
        }
    }
}
