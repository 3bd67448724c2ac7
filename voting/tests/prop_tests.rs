use proptest::prelude::*;

use brutacritic_types::{SubjectId, Timestamp, VoteTransaction};
use brutacritic_voting::{VoteCostCalculator, MAX_INTENSITY, MIN_INTENSITY};

proptest! {
    /// Every valid intensity costs its square.
    #[test]
    fn cost_is_quadratic(i in MIN_INTENSITY..=MAX_INTENSITY) {
        prop_assert_eq!(VoteCostCalculator.cost(i).unwrap(), u64::from(i * i));
    }

    /// Out-of-range intensities always fail.
    #[test]
    fn cost_rejects_out_of_range(i in prop_oneof![Just(0u32), (MAX_INTENSITY + 1)..u32::MAX]) {
        prop_assert!(VoteCostCalculator.cost(i).is_err());
    }

    /// Consecutive costs differ by `2i + 1`.
    #[test]
    fn marginal_cost_is_odd_step(i in MIN_INTENSITY..MAX_INTENSITY) {
        let calc = VoteCostCalculator;
        let step = calc.cost(i + 1).unwrap() - calc.cost(i).unwrap();
        prop_assert_eq!(step, u64::from(2 * i + 1));
    }

    /// Remaining budget equals total minus the summed costs.
    #[test]
    fn remaining_budget_subtracts_costs(
        total in 0i64..10_000,
        intensities in prop::collection::vec(MIN_INTENSITY..=MAX_INTENSITY, 0..20),
    ) {
        let history: Vec<VoteTransaction> = intensities
            .iter()
            .map(|&i| VoteTransaction::new(SubjectId::new("s"), i, Timestamp::new(0)))
            .collect();
        let spent: i64 = intensities.iter().map(|&i| i64::from(i * i)).sum();
        prop_assert_eq!(VoteCostCalculator.remaining_budget(total, &history).unwrap(), total - spent);
    }

    /// Affordability is exactly `budget >= cost`.
    #[test]
    fn can_afford_matches_cost(budget in 0i64..200, i in MIN_INTENSITY..=MAX_INTENSITY) {
        let calc = VoteCostCalculator;
        let expected = budget >= calc.cost(i).unwrap() as i64;
        prop_assert_eq!(calc.can_afford(budget, i).unwrap(), expected);
    }
}
