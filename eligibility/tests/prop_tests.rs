use proptest::prelude::*;

use brutacritic_eligibility::{EligibilityVerdict, PlaytimeEligibilityChecker};
use brutacritic_types::{GameLibraryEntry, Platform, Timestamp};

fn entry(title: &str, minutes: u64) -> GameLibraryEntry {
    GameLibraryEntry::new("p", title, minutes, Timestamp::EPOCH, Platform::Xbox)
}

proptest! {
    /// Anything under two hours is inside the refund window, whatever the title.
    #[test]
    fn under_baseline_never_verifies(minutes in 0u64..120, title in "[A-Za-z ]{0,24}") {
        let verdict = PlaytimeEligibilityChecker::default().verify(&entry(&title, minutes));
        prop_assert!(verdict.reason().unwrap().contains("refund"));
    }

    /// Titles without a marker verify as soon as the baseline is met.
    #[test]
    fn plain_titles_verify_past_baseline(minutes in 120u64..100_000, title in "[a-z ]{0,24}") {
        let verdict = PlaytimeEligibilityChecker::default().verify(&entry(&title, minutes));
        prop_assert_eq!(verdict, EligibilityVerdict::Verified);
    }

    /// Verification is monotone in playtime: more play never un-verifies.
    #[test]
    fn more_playtime_never_hurts(minutes in 0u64..5_000, extra in 0u64..5_000, idx in 0usize..4) {
        let title = ["Elden Ring", "Starfield", "Fortnite", "Alan Wake 2"][idx];
        let checker = PlaytimeEligibilityChecker::default();
        if checker.verify(&entry(title, minutes)).is_verified() {
            prop_assert!(checker.verify(&entry(title, minutes + extra)).is_verified());
        }
    }

    /// Remaining minutes are zero exactly when the entry verifies.
    #[test]
    fn remaining_is_zero_iff_verified(minutes in 0u64..5_000, idx in 0usize..4) {
        let title = ["Halo Infinite", "Baldur's Gate 3", "Forza Horizon 5", "Tetris"][idx];
        let checker = PlaytimeEligibilityChecker::default();
        let e = entry(title, minutes);
        prop_assert_eq!(checker.minutes_remaining(&e) == 0, checker.verify(&e).is_verified());
    }
}
