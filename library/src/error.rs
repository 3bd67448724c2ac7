//! Connector errors.

use brutacritic_types::Platform;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("{backend} connector does not serve {platform}")]
    UnsupportedPlatform { backend: String, platform: Platform },

    #[error("missing connector credentials: {0}")]
    MissingCredentials(String),

    #[error("library fetch failed: {0}")]
    Fetch(String),

    #[error("unexpected library response: {0}")]
    Decode(String),
}
