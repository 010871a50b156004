//! The stable distribution pass shared by counting and radix sort.

use sortvis_core::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Tally,
    Place,
    CopyBack,
    Done,
}

/// One stable counting pass keyed by a bucket function.
///
/// Three stepped phases:
/// 1. tally: one comparison step per input element;
/// 2. place: walk the input backwards, writing each element into the output
///    buffer; these steps show the *output* buffer;
/// 3. copy back: one step per position as the output replaces the input.
pub(crate) struct BucketPass {
    counts: Vec<usize>,
    output: Vec<i64>,
    phase: Phase,
    cursor: usize,
}

impl BucketPass {
    pub(crate) fn new(buckets: usize, len: usize) -> Self {
        Self {
            counts: vec![0; buckets],
            output: vec![0; len],
            phase: Phase::Tally,
            cursor: 0,
        }
    }

    /// Advance by one step. `bucket` must map every element of `arr` below
    /// the bucket count given to [`new`](Self::new).
    pub(crate) fn advance(&mut self, arr: &mut [i64], bucket: impl Fn(i64) -> usize) -> Option<Step> {
        let n = arr.len();
        loop {
            match self.phase {
                Phase::Tally => {
                    if self.cursor < n {
                        let i = self.cursor;
                        self.cursor += 1;
                        self.counts[bucket(arr[i])] += 1;
                        return Some(Step::single(arr, i, false));
                    }
                    for b in 1..self.counts.len() {
                        self.counts[b] += self.counts[b - 1];
                    }
                    self.phase = Phase::Place;
                    self.cursor = n;
                }
                Phase::Place => {
                    if self.cursor > 0 {
                        self.cursor -= 1;
                        let value = arr[self.cursor];
                        let slot = &mut self.counts[bucket(value)];
                        *slot -= 1;
                        let pos = *slot;
                        self.output[pos] = value;
                        return Some(Step::single(&self.output, pos, true));
                    }
                    self.phase = Phase::CopyBack;
                }
                Phase::CopyBack => {
                    if self.cursor < n {
                        let i = self.cursor;
                        self.cursor += 1;
                        let changed = arr[i] != self.output[i];
                        arr[i] = self.output[i];
                        return Some(Step::single(arr, i, changed));
                    }
                    self.phase = Phase::Done;
                }
                Phase::Done => return None,
            }
        }
    }
}
