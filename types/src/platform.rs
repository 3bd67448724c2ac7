//! Storefront platforms and the library entries their connectors produce.

use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A storefront a reviewer can link for proof of play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Steam,
    Epic,
    Xbox,
    Ubisoft,
}

impl Platform {
    pub const ALL: [Platform; 4] = [Self::Steam, Self::Epic, Self::Xbox, Self::Ubisoft];

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Steam => "Steam",
            Self::Epic => "Epic",
            Self::Xbox => "Xbox",
            Self::Ubisoft => "Ubisoft",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown platform: {0}")]
pub struct ParsePlatformError(pub String);

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParsePlatformError(s.to_string()))
    }
}

/// One title in a user's platform library, as reported by its connector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLibraryEntry {
    pub id: String,
    pub title: String,
    pub playtime_minutes: u64,
    pub last_played: Timestamp,
    pub platform: Platform,
}

impl GameLibraryEntry {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        playtime_minutes: u64,
        last_played: Timestamp,
        platform: Platform,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            playtime_minutes,
            last_played,
            platform,
        }
    }
}
