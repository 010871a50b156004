use sortvis_core::{RunError, RunOptions, Step, StepIter, StepProducer};

/// Max-heap sort: bottom-up build over roots `n/2 - 1 ..= 0`, then swap the
/// root behind the shrinking boundary and sift down.
///
/// Sifting only yields a step when it swaps; its comparisons are silent.
/// Every boundary swap yields a step.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSort;

impl StepProducer for HeapSort {
    fn key(&self) -> &'static str {
        "heap"
    }

    fn display_name(&self) -> &'static str {
        "Heap Sort"
    }

    fn produce_steps(&self, input: Vec<i64>, _options: &RunOptions) -> Result<StepIter, RunError> {
        let roots = input.len() / 2;
        Ok(Box::new(HeapSteps {
            arr: input,
            phase: Phase::Build { roots },
            sift: None,
        }))
    }
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Roots `0..roots` still need heapifying, highest first.
    Build { roots: usize },
    /// `arr[..=end]` is a heap; swap its root to `end` next.
    Extract { end: usize },
    Done,
}

#[derive(Debug, Clone, Copy)]
struct Sift {
    size: usize,
    node: usize,
}

struct HeapSteps {
    arr: Vec<i64>,
    phase: Phase,
    sift: Option<Sift>,
}

impl HeapSteps {
    /// One level of sift-down. Returns the swap step and where sifting
    /// continues, or `None` when the heap property already holds.
    fn sift_level(&mut self, Sift { size, node }: Sift) -> Option<(Step, Sift)> {
        let mut largest = node;
        for child in [2 * node + 1, 2 * node + 2] {
            if child < size && self.arr[child] > self.arr[largest] {
                largest = child;
            }
        }
        if largest == node {
            return None;
        }
        self.arr.swap(node, largest);
        Some((
            Step::pair(&self.arr, node, largest, true),
            Sift {
                size,
                node: largest,
            },
        ))
    }
}

impl Iterator for HeapSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(sift) = self.sift.take() {
                if let Some((step, deeper)) = self.sift_level(sift) {
                    self.sift = Some(deeper);
                    return Some(step);
                }
                continue;
            }

            match self.phase {
                Phase::Build { roots: 0 } => {
                    self.phase = match self.arr.len() {
                        0 | 1 => Phase::Done,
                        n => Phase::Extract { end: n - 1 },
                    };
                }
                Phase::Build { roots } => {
                    let root = roots - 1;
                    self.phase = Phase::Build { roots: root };
                    self.sift = Some(Sift {
                        size: self.arr.len(),
                        node: root,
                    });
                }
                Phase::Extract { end } => {
                    self.arr.swap(0, end);
                    self.phase = if end > 1 {
                        Phase::Extract { end: end - 1 }
                    } else {
                        Phase::Done
                    };
                    self.sift = Some(Sift { size: end, node: 0 });
                    return Some(Step::pair(&self.arr, 0, end, true));
                }
                Phase::Done => return None,
            }
        }
    }
}
