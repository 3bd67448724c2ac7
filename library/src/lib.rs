//! Platform library connectors.
//!
//! A connector fetches the titles a user owns on one storefront, with
//! recorded playtime, so the eligibility checker has something to judge.
//! Which backend runs is a configuration choice ([`LibraryBackend`]):
//! - [`SteamConnector`] calls the Steam Web API.
//! - [`FixtureConnector`] serves fixed libraries for tests and demos.

pub mod error;
pub mod fixture;
pub mod steam;

pub use error::LibraryError;
pub use fixture::FixtureConnector;
pub use steam::{SteamConfig, SteamConnector};

use brutacritic_types::{GameLibraryEntry, Platform};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Fetches a user's library from a storefront.
pub trait PlatformConnector: Send + Sync {
    /// Human-readable name of this backend.
    fn name(&self) -> &str;

    /// Fetch every owned title on `platform`.
    fn fetch_library(
        &self,
        platform: Platform,
    ) -> impl Future<Output = Result<Vec<GameLibraryEntry>, LibraryError>> + Send;
}

/// Which connector backend to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryBackend {
    #[default]
    Fixture,
    Steam,
}

/// Connector configuration, the `[library]` table of the trust config.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryConfig {
    #[serde(default)]
    pub backend: LibraryBackend,

    #[serde(default)]
    pub steam: SteamConfig,
}

/// The connector selected by configuration.
pub enum LibrarySource {
    Fixture(FixtureConnector),
    Steam(SteamConnector),
}

impl LibrarySource {
    pub fn from_config(config: &LibraryConfig) -> Result<Self, LibraryError> {
        match config.backend {
            LibraryBackend::Fixture => Ok(Self::Fixture(FixtureConnector::sample())),
            LibraryBackend::Steam => Ok(Self::Steam(SteamConnector::new(config.steam.clone())?)),
        }
    }
}

impl PlatformConnector for LibrarySource {
    fn name(&self) -> &str {
        match self {
            Self::Fixture(c) => c.name(),
            Self::Steam(c) => c.name(),
        }
    }

    fn fetch_library(
        &self,
        platform: Platform,
    ) -> impl Future<Output = Result<Vec<GameLibraryEntry>, LibraryError>> + Send {
        async move {
            tracing::debug!(backend = self.name(), %platform, "fetching library");
            match self {
                Self::Fixture(c) => c.fetch_library(platform).await,
                Self::Steam(c) => c.fetch_library(platform).await,
            }
        }
    }
}
