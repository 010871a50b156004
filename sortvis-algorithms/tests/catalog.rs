use sortvis_algorithms::Registry;
use sortvis_core::{Category, RunError, RunOptions, Step};

#[test]
fn listing_order_and_ids() {
    let names: Vec<(u32, String)> = Registry::builtin()
        .list()
        .into_iter()
        .map(|info| (info.id, info.name))
        .collect();
    assert_eq!(
        names,
        vec![
            (1, "Bubble Sort".to_string()),
            (2, "Quick Sort".to_string()),
            (3, "Merge Sort".to_string()),
            (4, "Insertion Sort".to_string()),
            (5, "Selection Sort".to_string()),
            (6, "Heap Sort".to_string()),
            (7, "Shell Sort".to_string()),
            (8, "Counting Sort".to_string()),
            (9, "Radix Sort".to_string()),
        ]
    );
}

#[test]
fn listing_is_idempotent() {
    let registry = Registry::builtin();
    assert_eq!(registry.list(), registry.list());
    assert!(registry.list().iter().all(|i| i.category == Category::Sorting));
}

#[test]
fn bubble_first_step() {
    let registry = Registry::builtin();
    let steps: Vec<Step> = registry
        .get("Bubble Sort")
        .unwrap()
        .run(&[3, 1, 2], &RunOptions::default())
        .unwrap()
        .collect();
    assert_eq!(steps[0], Step::pair(&[1, 3, 2], 0, 1, true));
    assert_eq!(steps.last().unwrap().array, vec![1, 2, 3]);
}

#[test]
fn counting_scenario() {
    let registry = Registry::builtin();
    let last = registry
        .get("Counting Sort")
        .unwrap()
        .run(&[4, 2, 2, 8, 3, 3, 1], &RunOptions::default())
        .unwrap()
        .last()
        .unwrap();
    assert_eq!(last.array, vec![1, 2, 2, 3, 3, 4, 8]);
}

#[test]
fn counting_output_phase_shows_output_buffer() {
    let registry = Registry::builtin();
    let steps: Vec<Step> = registry
        .get("counting")
        .unwrap()
        .run(&[3, 1, 2], &RunOptions::default())
        .unwrap()
        .collect();
    // The first placement writes the last input element into a zeroed buffer.
    assert_eq!(steps[3], Step::single(&[0, 2, 0], 1, true));
}

#[test]
fn radix_refuses_negative_before_any_step() {
    let registry = Registry::builtin();
    let radix = registry.get("radix").unwrap();
    assert!(matches!(
        radix.run(&[1, -2], &RunOptions::default()),
        Err(RunError::InvalidInput(_))
    ));
}

#[test]
fn stop_cuts_every_algorithm_short() {
    let registry = Registry::builtin();
    let input: Vec<i64> = (0..12).rev().collect();
    for info in registry.list() {
        let algo = registry.get(&info.name).unwrap();
        let full = algo.run(&input, &RunOptions::default()).unwrap().count();

        let mut steps = algo.run(&input, &RunOptions::default()).unwrap();
        assert!(steps.next().is_some(), "{} produced nothing", info.name);
        algo.stop();
        assert_eq!(steps.by_ref().count(), 0);
        assert!(steps.was_cancelled());
        assert!(steps.emitted() < full, "{}", info.name);
    }
}

#[test]
fn cancelled_run_does_not_poison_the_next() {
    let registry = Registry::builtin();
    let merge = registry.get("merge").unwrap();
    let input = [5, 4, 3, 2, 1];
    let full = merge.run(&input, &RunOptions::default()).unwrap().count();

    let mut steps = merge.run(&input, &RunOptions::default()).unwrap();
    steps.next();
    merge.stop();
    assert!(steps.next().is_none());

    assert_eq!(merge.run(&input, &RunOptions::default()).unwrap().count(), full);
}
