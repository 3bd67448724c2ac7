//! Knowledge-challenge humanity checks.
//!
//! A quiz stands in for a camera capture: the user answers a short bank of
//! questions and the fraction answered correctly becomes the proof's
//! liveness score. The proof's unique hash binds the bank, the user and the
//! normalised answers, and carries a bank prefix so each challenge only
//! accepts proofs it produced.

use crate::error::HumanityError;
use crate::verifier::{check_freshness, score_proof, HumanityVerifier};
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use brutacritic_types::{BiometricProof, Timestamp, TrustParams, UserId};
use serde::{Deserialize, Serialize};

type Blake2b256 = Blake2b<U32>;

/// A question and every answer accepted for it (already normalised).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeQuestion {
    pub prompt: String,
    pub accepted: Vec<String>,
}

impl ChallengeQuestion {
    pub fn new(prompt: &str, accepted: &[&str]) -> Self {
        Self {
            prompt: prompt.to_string(),
            accepted: accepted.iter().map(|a| normalize(a)).collect(),
        }
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        let answer = normalize(answer);
        self.accepted.iter().any(|a| *a == answer)
    }
}

/// A named set of challenge questions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub name: String,
    pub questions: Vec<ChallengeQuestion>,
}

impl QuestionBank {
    /// Questions about common facts any person can answer.
    pub fn common_facts() -> Self {
        Self {
            name: "common_facts".into(),
            questions: vec![
                ChallengeQuestion::new("How many days are in a week?", &["7", "seven"]),
                ChallengeQuestion::new("What colour is a clear daytime sky?", &["blue"]),
                ChallengeQuestion::new("What is 2 + 3?", &["5", "five"]),
                ChallengeQuestion::new("Which season comes after winter?", &["spring"]),
                ChallengeQuestion::new("How many legs does a spider have?", &["8", "eight"]),
            ],
        }
    }

    /// Questions any regular player can answer.
    pub fn gamer_knowledge() -> Self {
        Self {
            name: "gamer_knowledge".into(),
            questions: vec![
                ChallengeQuestion::new("Which plumber is Nintendo's mascot?", &["mario"]),
                ChallengeQuestion::new(
                    "Who is the playable hero of The Legend of Zelda?",
                    &["link"],
                ),
                ChallengeQuestion::new("Which company makes the PlayStation?", &["sony"]),
                ChallengeQuestion::new("What does \"GG\" stand for?", &["good game"]),
                ChallengeQuestion::new(
                    "In Minecraft, which green monster explodes?",
                    &["creeper", "creepers", "a creeper"],
                ),
            ],
        }
    }

    pub fn prompts(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|q| q.prompt.as_str())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Grades quiz answers into proofs and verifies those proofs.
#[derive(Clone, Debug)]
pub struct KnowledgeChallenge {
    bank: QuestionBank,
    pass_mark: f64,
    freshness_secs: u64,
}

impl KnowledgeChallenge {
    pub fn new(bank: QuestionBank, pass_mark: f64, freshness_secs: u64) -> Self {
        Self {
            bank,
            pass_mark,
            freshness_secs,
        }
    }

    pub fn from_params(bank: QuestionBank, params: &TrustParams) -> Self {
        Self::new(bank, params.liveness_threshold, params.proof_freshness_secs)
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    fn hash_prefix(&self) -> String {
        format!("challenge:{}:", self.bank.name)
    }

    /// Grade `answers` (one per question, in bank order) into a proof.
    pub fn grade<S: AsRef<str>>(
        &self,
        user: &UserId,
        answers: &[S],
        now: Timestamp,
    ) -> Result<BiometricProof, HumanityError> {
        if self.bank.is_empty() || answers.len() != self.bank.len() {
            return Err(HumanityError::AnswerCountMismatch {
                expected: self.bank.len(),
                got: answers.len(),
            });
        }

        let correct = self
            .bank
            .questions
            .iter()
            .zip(answers)
            .filter(|(q, a)| q.is_correct(a.as_ref()))
            .count();
        let score = correct as f64 / self.bank.len() as f64;

        let mut hasher = Blake2b256::new();
        hasher.update(self.bank.name.as_bytes());
        hasher.update([0u8]);
        hasher.update(user.as_str().as_bytes());
        for answer in answers {
            hasher.update([0u8]);
            hasher.update(normalize(answer.as_ref()).as_bytes());
        }
        let digest = hasher.finalize();

        tracing::debug!(
            bank = %self.bank.name,
            user = %user,
            correct,
            total = self.bank.len(),
            "graded knowledge challenge"
        );

        Ok(BiometricProof::new(
            score,
            format!("{}{}", self.hash_prefix(), hex::encode(digest)),
            now,
        ))
    }
}

impl HumanityVerifier for KnowledgeChallenge {
    fn name(&self) -> &str {
        &self.bank.name
    }

    fn verify(&self, proof: BiometricProof, now: Timestamp) -> Result<bool, HumanityError> {
        check_freshness(&proof, self.freshness_secs, now)?;
        if !proof.unique_hash.starts_with(&self.hash_prefix()) {
            return Err(HumanityError::MalformedProof(format!(
                "proof was not produced by the {} challenge",
                self.bank.name
            )));
        }
        score_proof(&proof, self.pass_mark)
    }
}

/// Lowercase, trim, and collapse inner whitespace.
fn normalize(answer: &str) -> String {
    answer
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
