use lifegrade::config::{Config, DistributionParams};
use lifegrade::scorer::percentile::{percentile, MAX_PERCENTILE, MIN_PERCENTILE};
use lifegrade::scorer::ScoringTable;
use lifegrade::{AnswerSet, Metric, Scorer};
use proptest::prelude::*;
use proptest::sample::Index;
use strum::IntoEnumIterator;

// --- STRATEGIES ---

// Picks one option per metric from the reference table, with the occasional
// token the table has never heard of.
prop_compose! {
    fn arb_answers()(
        picks in proptest::collection::vec(any::<Index>(), Metric::COUNT),
        stale in proptest::collection::vec(any::<bool>(), Metric::COUNT)
    ) -> AnswerSet {
        let table = ScoringTable::reference();
        let mut set = AnswerSet::new();
        for (i, metric) in Metric::iter().enumerate() {
            let options = table.options(metric);
            let token = if stale[i] && i % 3 == 0 {
                "retired-token".to_string()
            } else {
                picks[i].get(&options).0.to_string()
            };
            set.set(metric, token);
        }
        set
    }
}

prop_compose! {
    fn arb_distribution()(
        mean in 0.0..100.0f64,
        std_dev in 1.0..40.0f64
    ) -> DistributionParams {
        DistributionParams::new(mean, std_dev)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_result_ranges(answers in arb_answers()) {
        let scorer = Scorer::new(&Config::default()).unwrap();
        let result = scorer.calculate_score(&answers).unwrap();

        prop_assert!(result.total_score <= 100);
        prop_assert!(result.percentile >= MIN_PERCENTILE);
        prop_assert!(result.percentile <= MAX_PERCENTILE);
        for s in result.breakdown.values() {
            prop_assert!(s.score <= 100);
            prop_assert!(s.weighted >= 0.0);
        }
    }

    #[test]
    fn test_percentile_monotonic(
        params in arb_distribution(),
        a in -20.0..120.0f64,
        b in -20.0..120.0f64
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(percentile(lo, &params) <= percentile(hi, &params));
    }

    #[test]
    fn test_percentile_bounded(params in arb_distribution(), s in -1000.0..1000.0f64) {
        let p = percentile(s, &params);
        prop_assert!((MIN_PERCENTILE..=MAX_PERCENTILE).contains(&p));
    }

    #[test]
    fn test_scoring_is_pure(answers in arb_answers()) {
        let scorer = Scorer::new(&Config::default()).unwrap();
        let first = scorer.calculate_score(&answers).unwrap();
        let second = scorer.calculate_score(&answers).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_percentile_monotonic_over_integer_scores() {
    let params = DistributionParams::default();
    let mut previous = MIN_PERCENTILE;
    for s in 0..=100 {
        let p = percentile(s as f64, &params);
        assert!(p >= previous, "percentile dropped at {}: {} < {}", s, p, previous);
        previous = p;
    }
}

#[test]
fn test_percentile_at_mean_is_fifty() {
    assert_eq!(percentile(75.0, &DistributionParams::default()), 50);
    assert_eq!(percentile(50.0, &DistributionParams::new(50.0, 20.0)), 50);
}
