//! Property tests for classification and index computation.

use imc_core::{compute_index, Band, Calculator};
use proptest::prelude::*;

fn index_strategy() -> impl Strategy<Value = f64> {
    0.0..100.0_f64
}

/// Log-uniform positive values in `[10^min_exp, 10^max_exp)`.
fn log_uniform(min_exp: f64, max_exp: f64) -> impl Strategy<Value = f64> {
    (min_exp..max_exp)
        .prop_map(|exp| 10.0_f64.powf(exp))
        .prop_filter("positive", |value| *value > 0.0)
}

/// Any accepted weight, `(0, 500]`, with tiny values sampled as often as
/// everyday ones.
fn weight_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![1.0..=500.0_f64, log_uniform(-300.0, 0.0), Just(500.0)]
}

/// Any height that passes the range checks, `(0, 3]`, down to the
/// smallest positive doubles.
fn height_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        0.5..=3.0_f64,
        log_uniform(-320.0, -0.3),
        Just(f64::MIN_POSITIVE),
        Just(3.0),
    ]
}

/// Heights a person could actually have
fn everyday_height_strategy() -> impl Strategy<Value = f64> {
    0.5..=3.0_f64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10_000))]

    #[test]
    fn test_exactly_one_band_contains_each_index(index in index_strategy()) {
        let calculator = Calculator::new();
        let matching: Vec<Band> = calculator
            .reference_table()
            .iter()
            .filter(|range| range.contains(index))
            .map(|range| range.band)
            .collect();

        prop_assert_eq!(matching.len(), 1, "index {} matched {:?}", index, matching);
        prop_assert_eq!(calculator.classify(index), matching[0]);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn test_recommendation_follows_band(index in index_strategy()) {
        let calculator = Calculator::new();
        prop_assert_eq!(
            calculator.recommend(index),
            calculator.classify(index).recommendation()
        );
    }

    #[test]
    fn test_valid_measurements_never_unclassified(
        weight in weight_strategy(),
        height in height_strategy()
    ) {
        let calculator = Calculator::new();
        match calculator.assess(weight, height) {
            Ok(assessment) => {
                prop_assert!(assessment.index.is_finite());
                prop_assert_ne!(assessment.band, Band::Unclassified);
            }
            Err(err) => {
                // only vanishing heights are turned away
                prop_assert_eq!(err.reason(), "Altura muito pequena para o cálculo");
                prop_assert!(height < 1e-100, "rejected height {}", height);
            }
        }
    }

    #[test]
    fn test_index_has_at_most_two_decimals(
        weight in weight_strategy(),
        height in everyday_height_strategy()
    ) {
        let index = compute_index(weight, height).unwrap();
        let cents = index * 100.0;
        prop_assert!((cents - cents.round()).abs() < 1e-6);
    }

    #[test]
    fn test_compute_index_is_deterministic(
        weight in weight_strategy(),
        height in height_strategy()
    ) {
        prop_assert_eq!(compute_index(weight, height), compute_index(weight, height));
    }
}

#[test]
fn test_boundary_labels() {
    let calculator = Calculator::new();
    assert_eq!(calculator.classify(18.5).label(), "Peso normal");
    assert_eq!(calculator.classify(25.0).label(), "Sobrepeso");
    assert_eq!(calculator.classify(40.0).label(), "Obesidade grau III");
}
