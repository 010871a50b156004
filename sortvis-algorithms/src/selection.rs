use sortvis_core::{RunError, RunOptions, Step, StepIter, StepProducer};

/// Select the minimum of the unsorted suffix, then swap it into place.
///
/// Each scan comparison is a step that highlights the running minimum and
/// the candidate. The swap gets its own step, skipped when the minimum is
/// already in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl StepProducer for SelectionSort {
    fn key(&self) -> &'static str {
        "selection"
    }

    fn display_name(&self) -> &'static str {
        "Selection Sort"
    }

    fn produce_steps(&self, input: Vec<i64>, _options: &RunOptions) -> Result<StepIter, RunError> {
        Ok(Box::new(SelectionSteps {
            arr: input,
            slot: 0,
            scan: 1,
            min: 0,
        }))
    }
}

struct SelectionSteps {
    arr: Vec<i64>,
    slot: usize,
    scan: usize,
    min: usize,
}

impl Iterator for SelectionSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let n = self.arr.len();
        while self.slot + 1 < n {
            if self.scan < n {
                let (j, current) = (self.scan, self.min);
                self.scan += 1;
                if self.arr[j] < self.arr[current] {
                    self.min = j;
                }
                return Some(Step::pair(&self.arr, current, j, false));
            }

            let (slot, min) = (self.slot, self.min);
            self.slot += 1;
            self.scan = self.slot + 1;
            self.min = self.slot;
            if min != slot {
                self.arr.swap(slot, min);
                return Some(Step::pair(&self.arr, slot, min, true));
            }
        }
        None
    }
}
