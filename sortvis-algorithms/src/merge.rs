use sortvis_core::{RunError, RunOptions, Step, StepIter, StepProducer};

/// Top-down merge sort splitting at `(left + right) / 2`.
///
/// The recursion is flattened up front into the post-order list of merges
/// it would perform; only the merge itself is stepped. Every placed element
/// is a step, in the interleaved phase and in both drain phases. Each
/// placement writes back into the array, so every step is `changed`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl StepProducer for MergeSort {
    fn key(&self) -> &'static str {
        "merge"
    }

    fn display_name(&self) -> &'static str {
        "Merge Sort"
    }

    fn produce_steps(&self, input: Vec<i64>, _options: &RunOptions) -> Result<StepIter, RunError> {
        let mut plan = Vec::new();
        plan_merges(0, input.len().saturating_sub(1), &mut plan);
        Ok(Box::new(MergeSteps {
            arr: input,
            plan,
            cursor: 0,
            active: None,
        }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    left: usize,
    mid: usize,
    right: usize,
}

fn plan_merges(left: usize, right: usize, out: &mut Vec<Span>) {
    if left < right {
        let mid = (left + right) / 2;
        plan_merges(left, mid, out);
        plan_merges(mid + 1, right, out);
        out.push(Span { left, mid, right });
    }
}

struct MergeSteps {
    arr: Vec<i64>,
    plan: Vec<Span>,
    cursor: usize,
    active: Option<ActiveMerge>,
}

impl Iterator for MergeSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            let Some(merge) = self.active.as_mut() else {
                let span = *self.plan.get(self.cursor)?;
                self.cursor += 1;
                self.active = Some(ActiveMerge::new(&self.arr, span));
                continue;
            };
            if let Some(step) = merge.place(&mut self.arr) {
                return Some(step);
            }
            self.active = None;
        }
    }
}

struct ActiveMerge {
    left: Vec<i64>,
    right: Vec<i64>,
    left_start: usize,
    right_start: usize,
    i: usize,
    j: usize,
    k: usize,
}

impl ActiveMerge {
    fn new(arr: &[i64], span: Span) -> Self {
        Self {
            left: arr[span.left..=span.mid].to_vec(),
            right: arr[span.mid + 1..=span.right].to_vec(),
            left_start: span.left,
            right_start: span.mid + 1,
            i: 0,
            j: 0,
            k: span.left,
        }
    }

    /// Place one element at `k`. `None` once both runs are drained.
    fn place(&mut self, arr: &mut [i64]) -> Option<Step> {
        let left_open = self.i < self.left.len();
        let right_open = self.j < self.right.len();
        let interleaving = left_open && right_open;

        let take_left = if interleaving {
            self.left[self.i] <= self.right[self.j]
        } else if left_open {
            true
        } else if right_open {
            false
        } else {
            return None;
        };

        let (value, source) = if take_left {
            self.i += 1;
            (self.left[self.i - 1], self.left_start + self.i - 1)
        } else {
            self.j += 1;
            (self.right[self.j - 1], self.right_start + self.j - 1)
        };

        let k = self.k;
        self.k += 1;
        arr[k] = value;

        Some(if interleaving {
            Step::pair(arr, k, source, true)
        } else {
            Step::single(arr, k, true)
        })
    }
}
