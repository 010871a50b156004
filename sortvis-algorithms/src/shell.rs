use sortvis_core::{RunError, RunOptions, Step, StepIter, StepProducer};

/// Gapped insertion sort with gaps `n/2, n/4, ..., 1`.
///
/// Shifts overwrite in place, so while an element is in flight the array
/// briefly shows the shifted value twice; the placement step writes the
/// held element back.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellSort;

impl StepProducer for ShellSort {
    fn key(&self) -> &'static str {
        "shell"
    }

    fn display_name(&self) -> &'static str {
        "Shell Sort"
    }

    fn produce_steps(&self, input: Vec<i64>, _options: &RunOptions) -> Result<StepIter, RunError> {
        let gap = input.len() / 2;
        Ok(Box::new(ShellSteps {
            arr: input,
            gap,
            i: gap,
            j: 0,
            held: 0,
            shifting: false,
        }))
    }
}

struct ShellSteps {
    arr: Vec<i64>,
    gap: usize,
    i: usize,
    j: usize,
    held: i64,
    shifting: bool,
}

impl Iterator for ShellSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if self.gap == 0 {
                return None;
            }
            if !self.shifting {
                if self.i >= self.arr.len() {
                    self.gap /= 2;
                    self.i = self.gap;
                    continue;
                }
                self.held = self.arr[self.i];
                self.j = self.i;
                self.shifting = true;
            }

            let (j, gap) = (self.j, self.gap);
            if j >= gap && self.arr[j - gap] > self.held {
                self.arr[j] = self.arr[j - gap];
                self.j -= gap;
                return Some(Step::pair(&self.arr, j - gap, j, true));
            }

            let i = self.i;
            self.arr[j] = self.held;
            self.shifting = false;
            self.i += 1;
            return Some(Step::pair(&self.arr, j, i, j != i));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(input: &[i64]) -> Vec<Step> {
        ShellSort
            .produce_steps(input.to_vec(), &RunOptions::default())
            .unwrap()
            .collect()
    }

    #[test]
    fn three_one_two() {
        assert_eq!(
            steps(&[3, 1, 2]),
            vec![
                Step::pair(&[3, 3, 2], 0, 1, true),
                Step::pair(&[1, 3, 2], 0, 1, true),
                Step::pair(&[1, 3, 3], 1, 2, true),
                Step::pair(&[1, 2, 3], 1, 2, true),
            ]
        );
    }

    #[test]
    fn in_place_insertion_is_unchanged_single_highlight() {
        let s = steps(&[1, 2]);
        assert_eq!(s, vec![Step::single(&[1, 2], 1, false)]);
    }

    #[test]
    fn gaps_halve() {
        // n = 4: gap 2 covers i = 2, 3; gap 1 covers i = 1, 2, 3.
        let placements = steps(&[1, 2, 3, 4]).len();
        assert_eq!(placements, 5);
    }
}
