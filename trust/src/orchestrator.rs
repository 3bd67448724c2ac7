//! Trust orchestrator. Connects humanity, pricing and proof of play into
//! vote and review authorization.

use crate::config::TrustConfig;
use crate::context::UserContext;
use crate::decision::{VoteAuthorization, VoteReceipt};
use crate::error::TrustError;
use crate::stats::{Decision, DecisionStats};
use brutacritic_eligibility::{EligibilityVerdict, PlaytimeEligibilityChecker};
use brutacritic_humanity::{HumanityStrategy, HumanityVerifier, LivenessVerifier};
use brutacritic_ledger::CreditLedger;
use brutacritic_types::{
    BiometricProof, Credits, GameLibraryEntry, SubjectId, Timestamp, TrustParams, UserId,
    VoteTransaction,
};
use brutacritic_voting::VoteCostCalculator;
use std::collections::BTreeMap;

/// The orchestrator ties the three rule modules together.
///
/// Holds no per-user state; the only interior mutability is its atomic
/// decision counters, so one instance can serve concurrent requests.
pub struct TrustOrchestrator {
    voting: VoteCostCalculator,
    eligibility: PlaytimeEligibilityChecker,
    humanity: Box<dyn HumanityVerifier>,
    stats: DecisionStats,
}

impl Default for TrustOrchestrator {
    fn default() -> Self {
        Self::new(
            PlaytimeEligibilityChecker::default(),
            Box::new(LivenessVerifier::default()),
        )
    }
}

impl TrustOrchestrator {
    pub fn new(
        eligibility: PlaytimeEligibilityChecker,
        humanity: Box<dyn HumanityVerifier>,
    ) -> Self {
        Self {
            voting: VoteCostCalculator,
            eligibility,
            humanity,
            stats: DecisionStats::new(),
        }
    }

    pub fn from_params(params: &TrustParams, strategy: HumanityStrategy) -> Self {
        Self::new(
            PlaytimeEligibilityChecker::from_params(params),
            strategy.build(params),
        )
    }

    pub fn from_config(config: &TrustConfig) -> Self {
        tracing::info!(humanity = %config.humanity, "composing trust orchestrator");
        Self::from_params(&config.params, config.humanity)
    }

    pub fn calculator(&self) -> &VoteCostCalculator {
        &self.voting
    }

    pub fn eligibility(&self) -> &PlaytimeEligibilityChecker {
        &self.eligibility
    }

    /// Name of the composed humanity strategy.
    pub fn humanity_strategy(&self) -> &str {
        self.humanity.name()
    }

    pub fn stats(&self) -> &DecisionStats {
        &self.stats
    }

    pub fn stats_snapshot(&self) -> BTreeMap<&'static str, u64> {
        self.stats.snapshot()
    }

    /// Run a proof through the composed humanity verifier.
    ///
    /// An expired proof is [`TrustError::ProofExpired`] ("scan again"); a
    /// low score is `Ok(false)` ("not verified").
    pub fn verify_humanity(&self, proof: BiometricProof, now: Timestamp) -> Result<bool, TrustError> {
        let passed = self.humanity.verify(proof, now)?;
        self.stats.record(if passed {
            Decision::HumanityPassed
        } else {
            Decision::HumanityFailed
        });
        Ok(passed)
    }

    /// Resolve a request's [`UserContext`] from an optional fresh proof.
    pub fn resolve_context(
        &self,
        user_id: UserId,
        proof: Option<BiometricProof>,
        now: Timestamp,
    ) -> Result<UserContext, TrustError> {
        let human_verified = match proof {
            Some(proof) => self.verify_humanity(proof, now)?,
            None => false,
        };
        Ok(UserContext {
            user_id,
            human_verified,
        })
    }

    /// Price a vote and check it against `current_budget`.
    ///
    /// The humanity precondition is checked before the intensity or the
    /// budget. Nothing is debited here; the caller debits `cost` once, and
    /// only if `authorized`.
    pub fn authorize_vote(
        &self,
        current_budget: Credits,
        intensity: u32,
        is_human_verified: bool,
    ) -> Result<VoteAuthorization, TrustError> {
        if !is_human_verified {
            self.stats.record(Decision::NotHuman);
            return Err(TrustError::NotHuman);
        }

        let cost = self.voting.cost(intensity)?;
        let authorized = self.voting.can_afford(current_budget, intensity)?;

        self.stats.record(if authorized {
            Decision::VoteAuthorized
        } else {
            Decision::VoteDeclined
        });
        tracing::debug!(intensity, cost, current_budget, authorized, "vote priced");

        Ok(VoteAuthorization {
            authorized,
            cost,
            budget: current_budget,
        })
    }

    /// Check a library entry for proof of play.
    ///
    /// Returns the eligibility verdict unchanged; an ineligible entry is a
    /// normal outcome, not an error.
    pub fn authorize_review(
        &self,
        entry: &GameLibraryEntry,
        is_human_verified: bool,
    ) -> Result<EligibilityVerdict, TrustError> {
        if !is_human_verified {
            self.stats.record(Decision::NotHuman);
            return Err(TrustError::NotHuman);
        }

        let verdict = self.eligibility.verify(entry);
        self.stats.record(if verdict.is_verified() {
            Decision::ReviewVerified
        } else {
            Decision::ReviewIneligible
        });
        Ok(verdict)
    }

    /// [`authorize_review`](Self::authorize_review) for a resolved request.
    pub fn submit_review(
        &self,
        ctx: &UserContext,
        entry: &GameLibraryEntry,
    ) -> Result<EligibilityVerdict, TrustError> {
        let verdict = self.authorize_review(entry, ctx.human_verified)?;
        tracing::info!(
            user = %ctx.user_id,
            game = %entry.id,
            verified = verdict.is_verified(),
            "review checked"
        );
        Ok(verdict)
    }

    /// Authorize a vote against the user's ledger balance and pay for it.
    ///
    /// An unverified caller is rejected before the ledger is touched.
    /// The debit is the ledger's conditional update, so a balance drained by
    /// a concurrent vote after the authorization read fails with
    /// [`TrustError::InsufficientCredits`] and nothing is debited.
    pub fn cast_vote<L: CreditLedger + ?Sized>(
        &self,
        ctx: &UserContext,
        ledger: &L,
        subject_id: SubjectId,
        intensity: u32,
        now: Timestamp,
    ) -> Result<VoteReceipt, TrustError> {
        if !ctx.human_verified {
            self.stats.record(Decision::NotHuman);
            return Err(TrustError::NotHuman);
        }

        let balance = ledger.balance(&ctx.user_id)?;
        let auth = self.authorize_vote(balance, intensity, ctx.human_verified)?;
        let cost = Credits::try_from(auth.cost).unwrap_or(Credits::MAX);

        if !auth.authorized {
            return Err(TrustError::InsufficientCredits { cost, balance });
        }

        let balance_after = ledger.debit_if_at_least(&ctx.user_id, cost)?;
        tracing::info!(
            user = %ctx.user_id,
            subject = %subject_id,
            intensity,
            cost,
            balance_after,
            "vote cast"
        );

        Ok(VoteReceipt {
            transaction: VoteTransaction::new(subject_id, intensity, now),
            cost: auth.cost,
            balance_after,
        })
    }
}
