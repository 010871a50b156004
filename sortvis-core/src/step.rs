//! The snapshot type every producer emits.

use serde::{Deserialize, Serialize};

/// One observable point in a sort's execution.
///
/// `array` is a copy of the working buffer taken at emission time. It never
/// aliases the producer's live state, so a consumer may hold on to steps
/// for as long as it likes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    /// Full state of the array at this point.
    pub array: Vec<i64>,
    /// One or two indices being compared or written.
    pub highlighted: Vec<usize>,
    /// True for a swap or overwrite, false for a pure comparison.
    pub changed: bool,
}

impl Step {
    /// Snapshot `array` with two highlighted indices.
    ///
    /// When `a == b` the step highlights a single index.
    pub fn pair(array: &[i64], a: usize, b: usize, changed: bool) -> Self {
        let highlighted = if a == b { vec![a] } else { vec![a, b] };
        Self {
            array: array.to_vec(),
            highlighted,
            changed,
        }
    }

    /// Snapshot `array` with one highlighted index.
    pub fn single(array: &[i64], index: usize, changed: bool) -> Self {
        Self {
            array: array.to_vec(),
            highlighted: vec![index],
            changed,
        }
    }

    /// Whether every highlighted index points into `array`.
    pub fn highlights_in_bounds(&self) -> bool {
        !self.highlighted.is_empty()
            && self.highlighted.len() <= 2
            && self.highlighted.iter().all(|&i| i < self.array.len())
    }
}
