//! Trust engine configuration with TOML file support.

use brutacritic_humanity::HumanityStrategy;
use brutacritic_library::LibraryConfig;
use brutacritic_types::TrustParams;
use brutacritic_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration for a trust engine deployment.
///
/// Loaded from a TOML file via [`TrustConfig::from_toml_file`] or built
/// programmatically (e.g. for tests). Omitted fields take defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrustConfig {
    /// Which humanity check to compose into the orchestrator.
    #[serde(default)]
    pub humanity: HumanityStrategy,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Thresholds.
    #[serde(default)]
    pub params: TrustParams,

    /// Platform connector backend.
    #[serde(default)]
    pub library: LibraryConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            humanity: HumanityStrategy::default(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            params: TrustParams::default(),
            library: LibraryConfig::default(),
        }
    }
}

impl TrustConfig {
    /// Load and validate configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject thresholds no deployment could mean.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.params;
        if !(0.0..=1.0).contains(&p.liveness_threshold) {
            return Err(ConfigError::Invalid(format!(
                "liveness_threshold {} outside [0, 1]",
                p.liveness_threshold
            )));
        }
        if p.proof_freshness_secs == 0 {
            return Err(ConfigError::Invalid(
                "proof_freshness_secs must be positive".into(),
            ));
        }
        if p.deep_dive_playtime_minutes < p.baseline_playtime_minutes {
            return Err(ConfigError::Invalid(format!(
                "deep_dive_playtime_minutes {} below baseline {}",
                p.deep_dive_playtime_minutes, p.baseline_playtime_minutes
            )));
        }
        if p.starting_credits < 0 || p.earn_credits_reward < 0 {
            return Err(ConfigError::Invalid("credit amounts must be non-negative".into()));
        }
        Ok(())
    }
}
