//! Property tests for the range classifier and the temperature cell.

use proptest::prelude::*;
use tempera::{
    apply_delta, classify, Delta, RangeClassifier, RangeConfig, TempRange, TemperatureCell,
    Threshold, DEFAULT_TEMPERATURE, FALLBACK_RANGE,
};

#[derive(Debug, Clone, Copy)]
enum Action {
    Increase,
    Decrease,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![Just(Action::Increase), Just(Action::Decrease)]
}

proptest! {
    /// Every integer lands in exactly one of the five categories.
    #[test]
    fn classification_is_total(value in any::<i64>()) {
        prop_assert!(TempRange::ALL.contains(&classify(value)));
    }

    #[test]
    fn very_hot_from_eighty_up(value in 80i64..) {
        prop_assert_eq!(classify(value), TempRange::VeryHot);
    }

    #[test]
    fn fallback_below_fifty(value in ..50i64) {
        prop_assert_eq!(classify(value), FALLBACK_RANGE);
    }

    #[test]
    fn classification_is_pure(value in any::<i64>()) {
        let classifier = RangeClassifier::default();
        let first = classifier.classify(value);
        for _ in 0..3 {
            prop_assert_eq!(classifier.classify(value), first);
            prop_assert_eq!(classify(value), first);
        }
    }

    /// A higher temperature never maps to a cooler category.
    #[test]
    fn classification_is_monotonic(a in -1_000i64..1_000, b in -1_000i64..1_000) {
        let rank = |range: TempRange| TempRange::ALL.iter().position(|r| *r == range);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(classify(high)) <= rank(classify(low)));
    }

    /// Any sequence of button presses nets out to the count difference.
    #[test]
    fn actions_compose(actions in proptest::collection::vec(action(), 0..200)) {
        let mut cell = TemperatureCell::default();
        for action in &actions {
            match action {
                Action::Increase => cell.increment(),
                Action::Decrease => cell.decrement(),
            };
        }

        let ups = actions.iter().filter(|a| matches!(a, Action::Increase)).count() as i64;
        let downs = actions.len() as i64 - ups;
        prop_assert_eq!(cell.get(), DEFAULT_TEMPERATURE + ups - downs);
    }

    #[test]
    fn apply_delta_adds(current in -1_000_000i64..1_000_000, delta in -1_000i64..1_000) {
        prop_assert_eq!(apply_delta(current, Delta::new(delta)), current + delta);
    }

    /// The highest qualifying bound wins for any strictly descending table.
    #[test]
    fn highest_qualifying_bound_wins(
        bounds in proptest::collection::btree_set(-500i64..500, 1..8),
        value in -600i64..600,
    ) {
        let thresholds: Vec<_> = bounds
            .iter()
            .rev()
            .zip(TempRange::ALL.iter().cycle())
            .map(|(bound, range)| Threshold::new(*bound, *range))
            .collect();
        let config = RangeConfig::new().with_thresholds(thresholds.clone());
        let classifier = RangeClassifier::new(&config).unwrap();

        let expected = thresholds
            .iter()
            .filter(|t| t.lower_bound <= value)
            .max_by_key(|t| t.lower_bound)
            .map_or(config.fallback(), |t| t.range);
        prop_assert_eq!(classifier.classify(value), expected);
    }
}

#[test]
fn three_rapid_increments_from_default() {
    let mut cell = TemperatureCell::default();
    for _ in 0..3 {
        cell.update(|current| apply_delta(current, Delta::UP));
    }
    assert_eq!(cell.get(), 71);
}
