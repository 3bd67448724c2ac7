//! Steam Web API connector (`IPlayerService/GetOwnedGames`).

use crate::error::LibraryError;
use crate::PlatformConnector;
use brutacritic_types::{GameLibraryEntry, Platform, Timestamp};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

/// Default Steam Web API host.
const STEAM_API_URL: &str = "https://api.steampowered.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Credentials and endpoint for the Steam connector, the `[library.steam]`
/// table of the trust config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SteamConfig {
    /// Steam Web API key. Read from config but never written back out.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// 64-bit Steam id of the user whose library is fetched.
    #[serde(default)]
    pub steam_id: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    STEAM_API_URL.to_string()
}

impl Default for SteamConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            steam_id: None,
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwnedGamesEnvelope {
    response: OwnedGamesResponse,
}

#[derive(Debug, Default, Deserialize)]
struct OwnedGamesResponse {
    #[serde(default)]
    games: Vec<OwnedGame>,
}

#[derive(Debug, Deserialize)]
struct OwnedGame {
    appid: u64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    playtime_forever: u64,
    #[serde(default)]
    rtime_last_played: u64,
}

/// Fetches owned games and lifetime playtime from Steam.
pub struct SteamConnector {
    api_key: String,
    steam_id: String,
    base_url: String,
    client: reqwest::Client,
}

impl SteamConnector {
    pub fn new(config: SteamConfig) -> Result<Self, LibraryError> {
        let api_key = config
            .api_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| LibraryError::MissingCredentials("steam api_key".into()))?;
        let steam_id = config
            .steam_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| LibraryError::MissingCredentials("steam steam_id".into()))?;
        Ok(Self {
            api_key,
            steam_id,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        })
    }

    async fn fetch_owned_games(&self) -> Result<Vec<GameLibraryEntry>, LibraryError> {
        let url = format!("{}/IPlayerService/GetOwnedGames/v1/", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("steamid", self.steam_id.as_str()),
                ("include_appinfo", "1"),
                ("format", "json"),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| fetch_error(e, &url))?;

        if !resp.status().is_success() {
            return Err(LibraryError::Fetch(format!(
                "HTTP {} from {}",
                resp.status(),
                url
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| fetch_error(e, &url))?;
        let entries = parse_owned_games(&body)?;
        tracing::info!(count = entries.len(), "fetched Steam library");
        Ok(entries)
    }
}

/// Transport errors carry the request URL, whose query holds the API key.
/// Report the endpoint without it.
fn fetch_error(e: reqwest::Error, endpoint: &str) -> LibraryError {
    LibraryError::Fetch(format!("{} ({endpoint})", e.without_url()))
}

impl PlatformConnector for SteamConnector {
    fn name(&self) -> &str {
        "steam"
    }

    fn fetch_library(
        &self,
        platform: Platform,
    ) -> impl Future<Output = Result<Vec<GameLibraryEntry>, LibraryError>> + Send {
        async move {
            if platform != Platform::Steam {
                return Err(LibraryError::UnsupportedPlatform {
                    backend: self.name().to_string(),
                    platform,
                });
            }
            self.fetch_owned_games().await
        }
    }
}

/// Map a `GetOwnedGames` JSON body to library entries.
///
/// A private profile answers with an empty `response` object, which maps to
/// an empty library.
pub fn parse_owned_games(body: &str) -> Result<Vec<GameLibraryEntry>, LibraryError> {
    let envelope: OwnedGamesEnvelope =
        serde_json::from_str(body).map_err(|e| LibraryError::Decode(e.to_string()))?;
    Ok(envelope
        .response
        .games
        .into_iter()
        .map(|g| {
            let id = g.appid.to_string();
            GameLibraryEntry::new(
                id.clone(),
                g.name.unwrap_or(id),
                g.playtime_forever,
                Timestamp::new(g.rtime_last_played),
                Platform::Steam,
            )
        })
        .collect())
}
