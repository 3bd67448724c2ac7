//! Composition-time selection of the humanity strategy.

use crate::challenge::{KnowledgeChallenge, QuestionBank};
use crate::error::HumanityError;
use crate::verifier::{HumanityVerifier, LivenessVerifier};
use brutacritic_types::TrustParams;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which humanity check a deployment runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HumanityStrategy {
    /// Camera-based liveness capture.
    #[default]
    Liveness,
    /// Quiz about common facts.
    CommonFacts,
    /// Quiz about games.
    GamerKnowledge,
}

impl HumanityStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Liveness => "liveness",
            Self::CommonFacts => "common_facts",
            Self::GamerKnowledge => "gamer_knowledge",
        }
    }

    /// The question bank behind a quiz strategy.
    pub fn question_bank(&self) -> Option<QuestionBank> {
        match self {
            Self::Liveness => None,
            Self::CommonFacts => Some(QuestionBank::common_facts()),
            Self::GamerKnowledge => Some(QuestionBank::gamer_knowledge()),
        }
    }

    /// Build the verifier for this strategy.
    pub fn build(&self, params: &TrustParams) -> Box<dyn HumanityVerifier> {
        match self.question_bank() {
            None => Box::new(LivenessVerifier::from_params(params)),
            Some(bank) => Box::new(KnowledgeChallenge::from_params(bank, params)),
        }
    }
}

impl fmt::Display for HumanityStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HumanityStrategy {
    type Err = HumanityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "liveness" => Ok(Self::Liveness),
            "common_facts" => Ok(Self::CommonFacts),
            "gamer_knowledge" => Ok(Self::GamerKnowledge),
            _ => Err(HumanityError::UnknownStrategy(s.to_string())),
        }
    }
}
