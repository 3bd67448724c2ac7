//! `brutacritic`: diagnostic entry point for the trust engine.
//!
//! Commands print JSON on stdout (`show-config` prints TOML); logs go to stderr.

mod commands;

use anyhow::Context;
use brutacritic_humanity::HumanityStrategy;
use brutacritic_library::LibraryBackend;
use brutacritic_trust::TrustConfig;
use brutacritic_types::Platform;
use brutacritic_utils::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "brutacritic", about = "BrutaCritic trust engine diagnostic")]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// CLI flags and env vars override them.
    #[arg(long, env = "BRUTACRITIC_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "BRUTACRITIC_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "BRUTACRITIC_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Humanity strategy: "liveness", "common_facts", or "gamer_knowledge".
    #[arg(long, env = "BRUTACRITIC_HUMANITY")]
    humanity: Option<HumanityStrategy>,

    /// Use the Steam Web API instead of fixture libraries.
    #[arg(long)]
    steam: bool,

    /// Steam Web API key.
    #[arg(long, env = "STEAM_API_KEY", hide_env_values = true)]
    steam_api_key: Option<String>,

    /// 64-bit Steam id whose library is fetched.
    #[arg(long, env = "STEAM_ID")]
    steam_id: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Print the quadratic pricing table.
    Pricing,

    /// Fetch a platform library and check every title for proof of play.
    Library {
        #[arg(long)]
        platform: Platform,
    },

    /// Check one library title as a review submission.
    CheckReview {
        #[arg(long)]
        platform: Platform,
        /// Library entry id.
        #[arg(long)]
        game: String,
        /// Treat the reviewer as having passed a humanity check.
        #[arg(long)]
        human: bool,
    },

    /// Verify a liveness capture.
    Humanity {
        /// Liveness score in [0, 1].
        #[arg(long)]
        liveness: f64,
        /// Age of the capture in seconds.
        #[arg(long, default_value_t = 0)]
        age_secs: u64,
    },

    /// Take a knowledge challenge. Without answers, prints the questions.
    Quiz {
        #[arg(long, default_value = "quiz-taker")]
        user: String,
        /// One answer per question, in order.
        #[arg(long = "answer")]
        answers: Vec<String>,
    },

    /// Price a vote against a budget.
    Vote {
        #[arg(long)]
        budget: i64,
        #[arg(long)]
        intensity: u32,
        /// Treat the voter as having passed a humanity check.
        #[arg(long)]
        human: bool,
    },

    /// Print the effective configuration as TOML.
    ShowConfig,
}

/// Layer CLI flags and env vars over the file configuration.
fn effective_config(cli: &Cli) -> anyhow::Result<TrustConfig> {
    let mut config = match &cli.config {
        Some(path) => TrustConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => TrustConfig::default(),
    };

    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    if let Some(strategy) = cli.humanity {
        config.humanity = strategy;
    }
    if cli.steam {
        config.library.backend = LibraryBackend::Steam;
    }
    if let Some(key) = &cli.steam_api_key {
        config.library.steam.api_key = Some(key.clone());
    }
    if let Some(id) = &cli.steam_id {
        config.library.steam.steam_id = Some(id.clone());
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = effective_config(&cli)?;

    brutacritic_utils::init_logging(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let output = commands::run(cli.command, &config).await?;
    println!("{output}");
    Ok(())
}
