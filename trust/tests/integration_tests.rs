//! Integration tests exercising full request flows:
//! proof capture → context resolution → vote pricing → ledger debit,
//! and library fetch → proof-of-play review checks.

use brutacritic_eligibility::EligibilityVerdict;
use brutacritic_ledger::{CreditLedger, InMemoryLedger};
use brutacritic_library::{FixtureConnector, PlatformConnector};
use brutacritic_nullables::{NullClock, NullProofSource, StaleReadLedger};
use brutacritic_trust::{Decision, TrustError, TrustOrchestrator, UserContext};
use brutacritic_types::{Platform, SubjectId, Timestamp, TrustParams, UserId};
use std::sync::Arc;
use std::thread;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const GENESIS: u64 = 1_709_424_000;

fn funded_ledger(user: &UserId, credits: i64) -> InMemoryLedger {
    let ledger = InMemoryLedger::new();
    ledger.open_account(user, credits).expect("open account");
    ledger
}

fn human_context(orch: &TrustOrchestrator, clock: &NullClock, name: &str) -> UserContext {
    let proof = NullProofSource::new(0.95, "0xHuman").capture(clock.now());
    orch.resolve_context(UserId::new(name), Some(proof), clock.now())
        .expect("fresh proof")
}

// ---------------------------------------------------------------------------
// Votes
// ---------------------------------------------------------------------------

#[test]
fn sequential_votes_spend_quadratically() {
    let orch = TrustOrchestrator::default();
    let clock = NullClock::new(GENESIS);
    let ctx = human_context(&orch, &clock, "user1");
    assert!(ctx.human_verified);

    let ledger = funded_ledger(&ctx.user_id, 100);
    let subject = SubjectId::new("review-42");

    let mut history = Vec::new();
    let mut costs = Vec::new();
    for intensity in 1..=3 {
        clock.advance(1);
        let receipt = orch
            .cast_vote(&ctx, &ledger, subject.clone(), intensity, clock.now())
            .expect("affordable vote");
        costs.push(receipt.cost);
        history.push(receipt.transaction);
    }

    assert_eq!(costs, vec![1, 4, 9]);
    assert_eq!(costs.iter().sum::<u64>(), 14);
    assert_eq!(ledger.balance(&ctx.user_id), Ok(86));
    assert_eq!(orch.calculator().remaining_budget(100, &history), Ok(86));
    assert_eq!(orch.stats().get(Decision::VoteAuthorized), 3);
}

#[test]
fn stale_proof_must_be_rescanned() {
    let orch = TrustOrchestrator::default();
    let clock = NullClock::new(GENESIS);
    let proof = NullProofSource::human().capture(clock.now());
    clock.advance_minutes(6);

    let err = orch
        .resolve_context(UserId::new("user1"), Some(proof), clock.now())
        .unwrap_err();
    assert!(matches!(err, TrustError::ProofExpired { .. }));

    let rescanned = NullProofSource::human().capture(clock.now());
    let ctx = orch
        .resolve_context(UserId::new("user1"), Some(rescanned), clock.now())
        .unwrap();
    assert!(ctx.human_verified);
}

#[test]
fn proof_on_the_window_edge_is_accepted() {
    let orch = TrustOrchestrator::default();
    let clock = NullClock::new(GENESIS);

    let edge = NullProofSource::human().capture(clock.ago(300));
    assert!(orch.verify_humanity(edge, clock.now()).unwrap());

    let past = NullProofSource::human().capture(clock.ago(301));
    assert!(matches!(
        orch.verify_humanity(past, clock.now()),
        Err(TrustError::ProofExpired { age_secs: 301, window_secs: 300 })
    ));
}

#[test]
fn spoofed_capture_cannot_vote() {
    let orch = TrustOrchestrator::default();
    let clock = NullClock::new(GENESIS);
    let proof = NullProofSource::spoof().capture(clock.now());
    let ctx = orch
        .resolve_context(UserId::new("bot"), Some(proof), clock.now())
        .unwrap();
    assert!(!ctx.human_verified);

    let ledger = funded_ledger(&ctx.user_id, 100);
    assert!(matches!(
        orch.cast_vote(&ctx, &ledger, SubjectId::new("r"), 1, clock.now()),
        Err(TrustError::NotHuman)
    ));
    assert_eq!(ledger.balance(&ctx.user_id), Ok(100));
}

#[test]
fn stale_balance_read_cannot_overspend() {
    let orch = TrustOrchestrator::default();
    let ctx = UserContext::verified(UserId::new("user1"));
    let ledger = StaleReadLedger::new(funded_ledger(&ctx.user_id, 100));

    // Another request spends 60 after this one read a balance of 100.
    ledger.race(&ctx.user_id, 60).unwrap();

    let err = orch
        .cast_vote(&ctx, &ledger, SubjectId::new("r"), 7, Timestamp::new(GENESIS))
        .unwrap_err();
    assert!(matches!(
        err,
        TrustError::InsufficientCredits { cost: 49, balance: 40 }
    ));
    assert_eq!(ledger.actual_balance(&ctx.user_id), Ok(40));
}

#[test]
fn concurrent_votes_share_one_orchestrator() {
    let orch = Arc::new(TrustOrchestrator::default());
    let ctx = UserContext::verified(UserId::new("user1"));
    let ledger = Arc::new(funded_ledger(&ctx.user_id, 100));

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let orch = Arc::clone(&orch);
            let ledger = Arc::clone(&ledger);
            let ctx = ctx.clone();
            thread::spawn(move || {
                orch.cast_vote(
                    &ctx,
                    ledger.as_ref(),
                    SubjectId::new(format!("r{i}")),
                    5,
                    Timestamp::new(GENESIS),
                )
                .is_ok()
            })
        })
        .collect();

    let accepted = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(accepted, 4);
    assert_eq!(ledger.balance(&ctx.user_id), Ok(0));
}

#[test]
fn earned_credits_unlock_bigger_votes() {
    let orch = TrustOrchestrator::default();
    let ctx = UserContext::verified(UserId::new("user1"));
    let ledger = funded_ledger(&ctx.user_id, 95);
    let params = TrustParams::brutacritic_defaults();

    assert!(!orch.authorize_vote(95, 10, true).unwrap().authorized);
    let balance = brutacritic_ledger::earn(&ledger, &ctx.user_id, &params).unwrap();
    assert_eq!(balance, 105);
    let receipt = orch
        .cast_vote(&ctx, &ledger, SubjectId::new("r"), 10, Timestamp::new(GENESIS))
        .unwrap();
    assert_eq!(receipt.balance_after, 5);
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fixture_library_review_flow() {
    let orch = TrustOrchestrator::default();
    let ctx = UserContext::verified(UserId::new("user1"));
    let connector = FixtureConnector::sample();

    let mut verified = Vec::new();
    let mut ineligible = Vec::new();
    for platform in Platform::ALL {
        for game in connector.fetch_library(platform).await.unwrap() {
            match orch.submit_review(&ctx, &game).unwrap() {
                EligibilityVerdict::Verified => verified.push(game.title),
                EligibilityVerdict::Ineligible(reason) => {
                    ineligible.push((game.title, reason.to_string()))
                }
            }
        }
    }

    verified.sort();
    assert_eq!(
        verified,
        vec![
            "Alan Wake 2",
            "Elden Ring",
            "Fortnite",
            "Forza Horizon 5",
            "Halo Infinite",
            "Starfield",
        ]
    );
    assert_eq!(ineligible.len(), 2);
    assert!(ineligible.iter().all(|(_, r)| r.contains("refund")));
    assert!(ineligible.iter().any(|(t, _)| t == "Skull and Bones"));
    assert_eq!(orch.stats().get(Decision::ReviewVerified), 6);
    assert_eq!(orch.stats().get(Decision::ReviewIneligible), 2);
}

#[tokio::test]
async fn unverified_user_cannot_review() {
    let orch = TrustOrchestrator::default();
    let ctx = UserContext::new(UserId::new("anon"));
    let games = FixtureConnector::sample()
        .fetch_library(Platform::Steam)
        .await
        .unwrap();
    assert!(matches!(
        orch.submit_review(&ctx, &games[0]),
        Err(TrustError::NotHuman)
    ));
}
