use sortvis_core::{RunError, RunOptions, Step, StepIter, StepProducer};

/// Lomuto quicksort: last element as pivot, elements `<=` pivot go low.
///
/// Recursion is a stack of pending ranges. The high range is pushed before
/// the low one so the low side is always fully processed first, matching
/// the recursive order.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl StepProducer for QuickSort {
    fn key(&self) -> &'static str {
        "quick"
    }

    fn display_name(&self) -> &'static str {
        "Quick Sort"
    }

    fn produce_steps(&self, input: Vec<i64>, _options: &RunOptions) -> Result<StepIter, RunError> {
        let pending = if input.len() > 1 {
            vec![(0, input.len() - 1)]
        } else {
            Vec::new()
        };
        Ok(Box::new(QuickSteps {
            arr: input,
            pending,
            partition: None,
        }))
    }
}

#[derive(Debug, Clone, Copy)]
struct Partition {
    low: usize,
    high: usize,
    /// Next slot for an element `<=` pivot.
    store: usize,
    scan: usize,
}

struct QuickSteps {
    arr: Vec<i64>,
    pending: Vec<(usize, usize)>,
    partition: Option<Partition>,
}

impl Iterator for QuickSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            let Some(mut part) = self.partition.take() else {
                let (low, high) = self.pending.pop()?;
                if low < high {
                    self.partition = Some(Partition {
                        low,
                        high,
                        store: low,
                        scan: low,
                    });
                }
                continue;
            };

            if part.scan < part.high {
                let j = part.scan;
                part.scan += 1;
                let low_side = self.arr[j] <= self.arr[part.high];
                let swapped = low_side && part.store != j;
                if low_side {
                    self.arr.swap(part.store, j);
                    part.store += 1;
                }
                self.partition = Some(part);
                return Some(Step::pair(&self.arr, j, part.high, swapped));
            }

            let split = part.store;
            self.arr.swap(split, part.high);
            self.pending.push((split + 1, part.high));
            if split > part.low {
                self.pending.push((part.low, split - 1));
            }
            return Some(Step::pair(&self.arr, split, part.high, split != part.high));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(input: &[i64]) -> Vec<Step> {
        QuickSort
            .produce_steps(input.to_vec(), &RunOptions::default())
            .unwrap()
            .collect()
    }

    #[test]
    fn three_one_two() {
        assert_eq!(
            steps(&[3, 1, 2]),
            vec![
                Step::pair(&[3, 1, 2], 0, 2, false),
                Step::pair(&[1, 3, 2], 1, 2, true),
                Step::pair(&[1, 2, 3], 1, 2, true),
            ]
        );
    }

    #[test]
    fn all_equal_terminates() {
        let s = steps(&[5, 5, 5]);
        assert_eq!(
            s,
            vec![
                Step::pair(&[5, 5, 5], 0, 2, false),
                Step::pair(&[5, 5, 5], 1, 2, false),
                Step::single(&[5, 5, 5], 2, false),
                Step::pair(&[5, 5, 5], 0, 1, false),
                Step::single(&[5, 5, 5], 1, false),
            ]
        );
    }

    #[test]
    fn low_partition_before_high() {
        // Pivot 3 lands at index 2; range [0, 1] is partitioned before [3, 4].
        let s = steps(&[2, 1, 5, 4, 3]);
        let highlights: Vec<Vec<usize>> = s.iter().map(|step| step.highlighted.clone()).collect();
        assert_eq!(
            highlights,
            vec![
                vec![0, 4],
                vec![1, 4],
                vec![2, 4],
                vec![3, 4],
                vec![2, 4],
                vec![0, 1],
                vec![0, 1],
                vec![3, 4],
                vec![4],
            ]
        );
        assert_eq!(s.last().unwrap().array, vec![1, 2, 3, 4, 5]);
    }
}
