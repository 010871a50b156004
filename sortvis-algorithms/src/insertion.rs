use sortvis_core::{RunError, RunOptions, Step, StepIter, StepProducer};

/// Insertion by adjacent swaps: the new element walks left until its left
/// neighbour is not larger.
///
/// Every comparison yields a step, including the one that stops the walk,
/// so the array on screen is always a permutation of the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl StepProducer for InsertionSort {
    fn key(&self) -> &'static str {
        "insertion"
    }

    fn display_name(&self) -> &'static str {
        "Insertion Sort"
    }

    fn produce_steps(&self, input: Vec<i64>, _options: &RunOptions) -> Result<StepIter, RunError> {
        Ok(Box::new(InsertionSteps {
            arr: input,
            next_key: 1,
            pos: 0,
        }))
    }
}

struct InsertionSteps {
    arr: Vec<i64>,
    /// Index of the next element to insert.
    next_key: usize,
    /// Current position of the element being inserted; 0 when idle.
    pos: usize,
}

impl Iterator for InsertionSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.pos == 0 {
            if self.next_key >= self.arr.len() {
                return None;
            }
            self.pos = self.next_key;
            self.next_key += 1;
        }

        let j = self.pos;
        if self.arr[j - 1] > self.arr[j] {
            self.arr.swap(j - 1, j);
            self.pos -= 1;
            return Some(Step::pair(&self.arr, j - 1, j, true));
        }
        self.pos = 0;
        Some(Step::pair(&self.arr, j - 1, j, false))
    }
}
