use sortvis_core::{RunError, RunOptions, Step, StepIter, StepProducer};

/// Adjacent compare-and-swap, `n - i - 1` comparisons per pass.
///
/// One step per comparison; no early exit on a clean pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl StepProducer for BubbleSort {
    fn key(&self) -> &'static str {
        "bubble"
    }

    fn display_name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn produce_steps(&self, input: Vec<i64>, _options: &RunOptions) -> Result<StepIter, RunError> {
        Ok(Box::new(BubbleSteps {
            arr: input,
            pass: 0,
            j: 0,
        }))
    }
}

struct BubbleSteps {
    arr: Vec<i64>,
    pass: usize,
    j: usize,
}

impl Iterator for BubbleSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let n = self.arr.len();
        while self.pass < n {
            if self.j + 1 < n - self.pass {
                let j = self.j;
                self.j += 1;
                let swapped = self.arr[j] > self.arr[j + 1];
                if swapped {
                    self.arr.swap(j, j + 1);
                }
                return Some(Step::pair(&self.arr, j, j + 1, swapped));
            }
            self.pass += 1;
            self.j = 0;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(input: &[i64]) -> Vec<Step> {
        BubbleSort
            .produce_steps(input.to_vec(), &RunOptions::default())
            .unwrap()
            .collect()
    }

    #[test]
    fn three_one_two() {
        let s = steps(&[3, 1, 2]);
        assert_eq!(
            s,
            vec![
                Step::pair(&[1, 3, 2], 0, 1, true),
                Step::pair(&[1, 2, 3], 1, 2, true),
                Step::pair(&[1, 2, 3], 0, 1, false),
            ]
        );
    }

    #[test]
    fn one_step_per_comparison() {
        assert_eq!(steps(&[5, 4, 3, 2, 1]).len(), 10);
        assert_eq!(steps(&[1, 2, 3, 4, 5]).len(), 10);
    }

    #[test]
    fn single_element_has_no_steps() {
        assert!(steps(&[7]).is_empty());
    }
}
