//! Command implementations. Each returns what the binary prints.

use crate::Command;
use anyhow::{bail, Context};
use brutacritic_humanity::{HumanityVerifier, KnowledgeChallenge};
use brutacritic_library::{LibrarySource, PlatformConnector};
use brutacritic_trust::{TrustConfig, TrustOrchestrator};
use brutacritic_types::{BiometricProof, Platform, Timestamp, UserId};
use serde_json::{json, Value};
use std::fmt;

/// What a command prints.
#[derive(Debug)]
pub enum Output {
    Json(Value),
    Text(String),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => {
                let pretty = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                f.write_str(&pretty)
            }
            Self::Text(text) => f.write_str(text.trim_end()),
        }
    }
}

pub async fn run(command: Command, config: &TrustConfig) -> anyhow::Result<Output> {
    let orch = TrustOrchestrator::from_config(config);
    let now = Timestamp::now();

    match command {
        Command::Pricing => Ok(Output::Json(json!({
            "pricing": orch.calculator().pricing_table(),
        }))),

        Command::Library { platform } => {
            let source = LibrarySource::from_config(&config.library)?;
            let games = source.fetch_library(platform).await?;
            let checker = orch.eligibility();
            let rows: Vec<Value> = games
                .iter()
                .map(|g| {
                    json!({
                        "game": g,
                        "verdict": checker.verify(g),
                        "minutes_remaining": checker.minutes_remaining(g),
                    })
                })
                .collect();
            Ok(Output::Json(json!({ "backend": source.name(), "platform": platform, "games": rows })))
        }

        Command::CheckReview {
            platform,
            game,
            human,
        } => {
            let entry = find_game(config, platform, &game).await?;
            let verdict = orch.authorize_review(&entry, human)?;
            Ok(Output::Json(json!({ "game": entry, "verdict": verdict })))
        }

        Command::Humanity { liveness, age_secs } => {
            let proof = BiometricProof::new(liveness, "cli", now.saturating_sub_secs(age_secs));
            let human = orch.verify_humanity(proof, now)?;
            Ok(Output::Json(json!({ "strategy": orch.humanity_strategy(), "human": human })))
        }

        Command::Quiz { user, answers } => {
            let Some(bank) = config.humanity.question_bank() else {
                bail!(
                    "humanity strategy '{}' has no quiz; pass --humanity common_facts or gamer_knowledge",
                    config.humanity
                );
            };
            if answers.is_empty() {
                let questions: Vec<&str> = bank.prompts().collect();
                return Ok(Output::Json(json!({ "bank": &bank.name, "questions": questions })));
            }
            let challenge = KnowledgeChallenge::from_params(bank, &config.params);
            let proof = challenge.grade(&UserId::new(user), answers.as_slice(), now)?;
            let score = proof.liveness_score;
            let human = challenge.verify(proof, now)?;
            Ok(Output::Json(json!({ "bank": challenge.name(), "score": score, "human": human })))
        }

        Command::Vote {
            budget,
            intensity,
            human,
        } => {
            let auth = orch.authorize_vote(budget, intensity, human)?;
            Ok(Output::Json(json!({
                "authorized": auth.authorized,
                "cost": auth.cost,
                "budget": auth.budget,
                "remaining_after": auth.remaining_after(),
            })))
        }

        Command::ShowConfig => Ok(Output::Text(config.to_toml_string()?)),
    }
}

async fn find_game(
    config: &TrustConfig,
    platform: Platform,
    id: &str,
) -> anyhow::Result<brutacritic_types::GameLibraryEntry> {
    let source = LibrarySource::from_config(&config.library)?;
    source
        .fetch_library(platform)
        .await?
        .into_iter()
        .find(|g| g.id == id)
        .with_context(|| format!("no game '{id}' in the {platform} library"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use brutacritic_humanity::HumanityStrategy;

    fn json(out: Output) -> Value {
        match out {
            Output::Json(value) => value,
            Output::Text(text) => panic!("expected JSON output, got {text}"),
        }
    }

    #[tokio::test]
    async fn pricing_lists_ten_tiers() {
        let out = json(run(Command::Pricing, &TrustConfig::default()).await.unwrap());
        assert_eq!(out["pricing"].as_array().unwrap().len(), 10);
        assert_eq!(out["pricing"][9]["cost"], 100);
    }

    #[tokio::test]
    async fn vote_reports_remaining() {
        let out = run(
            Command::Vote {
                budget: 50,
                intensity: 7,
                human: true,
            },
            &TrustConfig::default(),
        )
        .await
        .map(json)
        .unwrap();
        assert_eq!(out["cost"], 49);
        assert_eq!(out["remaining_after"], 1);
    }

    #[tokio::test]
    async fn vote_without_humanity_fails() {
        let err = run(
            Command::Vote {
                budget: 50,
                intensity: 8,
                human: false,
            },
            &TrustConfig::default(),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("humanity"));
    }

    #[tokio::test]
    async fn check_review_uses_fixture_library() {
        let out = run(
            Command::CheckReview {
                platform: Platform::Ubisoft,
                game: "u1".into(),
                human: true,
            },
            &TrustConfig::default(),
        )
        .await
        .map(json)
        .unwrap();
        assert_eq!(out["verdict"]["verified"], false);
        assert!(out["verdict"]["reason"].as_str().unwrap().contains("refund"));
    }

    #[tokio::test]
    async fn quiz_prints_questions_then_grades() {
        let config = TrustConfig {
            humanity: HumanityStrategy::GamerKnowledge,
            ..TrustConfig::default()
        };
        let questions = run(
            Command::Quiz {
                user: "u".into(),
                answers: vec![],
            },
            &config,
        )
        .await
        .map(json)
        .unwrap();
        assert_eq!(questions["questions"].as_array().unwrap().len(), 5);

        let graded = run(
            Command::Quiz {
                user: "u".into(),
                answers: ["mario", "link", "sony", "good game", "creeper"]
                    .map(String::from)
                    .to_vec(),
            },
            &config,
        )
        .await
        .map(json)
        .unwrap();
        assert_eq!(graded["human"], true);
    }

    #[tokio::test]
    async fn show_config_prints_toml() {
        let out = run(Command::ShowConfig, &TrustConfig::default()).await.unwrap();
        let text = out.to_string();
        assert!(text.contains("humanity = \"liveness\""));
        assert!(matches!(out, Output::Text(_)));
    }

    #[tokio::test]
    async fn show_config_omits_steam_api_key() {
        let mut config = TrustConfig::default();
        config.library.steam.api_key = Some("SUPERSECRETKEY".into());
        let text = run(Command::ShowConfig, &config).await.unwrap().to_string();
        assert!(!text.contains("SUPERSECRETKEY"));
        assert!(text.contains("[library.steam]"));
    }

    #[tokio::test]
    async fn quiz_requires_quiz_strategy() {
        let err = run(
            Command::Quiz {
                user: "u".into(),
                answers: vec![],
            },
            &TrustConfig::default(),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("no quiz"));
    }
}
