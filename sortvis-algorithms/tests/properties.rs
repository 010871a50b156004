//! Property-based tests: invariants every producer must hold.

use proptest::prelude::*;
use sortvis_algorithms::Registry;
use sortvis_core::{RunOptions, Step};

fn run(registry: &Registry, key: &str, input: &[i64]) -> Vec<Step> {
    registry
        .get(key)
        .unwrap()
        .run(input, &RunOptions::default())
        .unwrap()
        .collect()
}

fn keys(registry: &Registry) -> Vec<&'static str> {
    registry
        .list()
        .iter()
        .map(|info| registry.get(&info.name).unwrap().key())
        .collect()
}

fn arb_input() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-500i64..500, 1..40)
}

fn arb_non_negative() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..5000, 1..40)
}

fn check_run(registry: &Registry, key: &str, input: &[i64]) -> Result<(), TestCaseError> {
    let steps = run(registry, key, input);
    let mut expected = input.to_vec();
    expected.sort();

    let last = steps.last().map_or(input, |s| s.array.as_slice());
    prop_assert_eq!(last, expected.as_slice(), "{} did not sort {:?}", key, input);
    for step in &steps {
        prop_assert_eq!(step.array.len(), input.len());
        prop_assert!(step.highlights_in_bounds(), "{} highlighted {:?}", key, step.highlighted);
    }
    Ok(())
}

proptest! {
    #[test]
    fn every_comparison_sort_ends_sorted(input in arb_input()) {
        let registry = Registry::builtin();
        for key in keys(&registry).into_iter().filter(|k| *k != "radix") {
            check_run(&registry, key, &input)?;
        }
    }

    #[test]
    fn radix_ends_sorted(input in arb_non_negative()) {
        check_run(&Registry::builtin(), "radix", &input)?;
    }

    #[test]
    fn runs_are_deterministic(input in arb_non_negative()) {
        let registry = Registry::builtin();
        for key in keys(&registry) {
            let first = run(&registry, key, &input);
            let second = run(&registry, key, &input);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn caller_input_is_never_mutated(input in arb_non_negative()) {
        let registry = Registry::builtin();
        let original = input.clone();
        for key in keys(&registry) {
            let _ = run(&registry, key, &input);
            prop_assert_eq!(&input, &original);
        }
    }

    #[test]
    fn heapify_only_surfaces_swaps(input in arb_input()) {
        let steps = run(&Registry::builtin(), "heap", &input);
        prop_assert!(steps.iter().all(|s| s.changed));
    }

    #[test]
    fn merge_placements_are_writes(input in arb_input()) {
        let steps = run(&Registry::builtin(), "merge", &input);
        prop_assert!(steps.iter().all(|s| s.changed));
    }
}
