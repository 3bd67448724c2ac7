//! Fixture-backed connector with fixed per-platform libraries.

use crate::error::LibraryError;
use crate::PlatformConnector;
use brutacritic_types::{GameLibraryEntry, Platform, Timestamp};
use std::collections::HashMap;
use std::future::{ready, Future};

/// Serves libraries from memory. Never touches the network.
#[derive(Clone, Debug, Default)]
pub struct FixtureConnector {
    libraries: HashMap<Platform, Vec<GameLibraryEntry>>,
}

impl FixtureConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `entry` to the library of its platform.
    pub fn with_entry(mut self, entry: GameLibraryEntry) -> Self {
        self.libraries.entry(entry.platform).or_default().push(entry);
        self
    }

    /// A demo library on every platform, mixing long-played titles,
    /// short deep-dive titles, and refund-window titles.
    pub fn sample() -> Self {
        use Platform::*;
        [
            ("s1", "Elden Ring", 8520, 1_709_424_000, Steam),
            ("s2", "Starfield", 5100, 1_708_424_000, Steam),
            ("e1", "Fortnite", 120_000, 1_709_500_000, Epic),
            ("e2", "Alan Wake 2", 1200, 1_705_000_000, Epic),
            ("x1", "Halo Infinite", 3400, 1_701_000_000, Xbox),
            ("x2", "Forza Horizon 5", 6000, 1_709_000_000, Xbox),
            ("u1", "Assassin's Creed Mirage", 80, 1_706_000_000, Ubisoft),
            ("u2", "Skull and Bones", 15, 1_707_000_000, Ubisoft),
        ]
        .into_iter()
        .fold(Self::new(), |fixture, (id, title, minutes, last, platform)| {
            fixture.with_entry(GameLibraryEntry::new(
                id,
                title,
                minutes,
                Timestamp::new(last),
                platform,
            ))
        })
    }

    /// Look up one entry by platform and id.
    pub fn find(&self, platform: Platform, id: &str) -> Option<&GameLibraryEntry> {
        self.libraries
            .get(&platform)
            .and_then(|games| games.iter().find(|g| g.id == id))
    }
}

impl PlatformConnector for FixtureConnector {
    fn name(&self) -> &str {
        "fixture"
    }

    fn fetch_library(
        &self,
        platform: Platform,
    ) -> impl Future<Output = Result<Vec<GameLibraryEntry>, LibraryError>> + Send {
        ready(Ok(self.libraries.get(&platform).cloned().unwrap_or_default()))
    }
}
