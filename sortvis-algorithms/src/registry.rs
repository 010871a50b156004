//! The fixed catalog of algorithms.

use crate::{
    BubbleSort, CountingSort, HeapSort, InsertionSort, MergeSort, QuickSort, RadixSort,
    SelectionSort, ShellSort,
};
use sortvis_core::{Algorithm, AlgorithmInfo};
use std::sync::{Arc, Mutex, PoisonError};

/// Maps algorithm identifiers to long-lived [`Algorithm`] instances.
///
/// The catalog is fixed at construction; nothing is added or removed
/// afterwards. The only mutable state is which entry is *current* (the
/// most recently dispatched one, targeted by an untargeted stop) and each
/// algorithm's own stop flag.
///
/// Lookup accepts the display name (`"Bubble Sort"`), the slug
/// (`"bubble"`), or the 1-based id as text (`"1"`).
#[derive(Debug)]
pub struct Registry {
    algorithms: Vec<Arc<Algorithm>>,
    current: Mutex<Option<usize>>,
}

impl Registry {
    /// Build a registry over a fixed list of algorithms, in listing order.
    pub fn new(algorithms: Vec<Algorithm>) -> Self {
        Self {
            algorithms: algorithms.into_iter().map(Arc::new).collect(),
            current: Mutex::new(None),
        }
    }

    /// The nine built-in sorts.
    pub fn builtin() -> Self {
        Self::new(vec![
            Algorithm::new(BubbleSort),
            Algorithm::new(QuickSort),
            Algorithm::new(MergeSort),
            Algorithm::new(InsertionSort),
            Algorithm::new(SelectionSort),
            Algorithm::new(HeapSort),
            Algorithm::new(ShellSort),
            Algorithm::new(CountingSort),
            Algorithm::new(RadixSort),
        ])
    }

    /// Discovery listing, in catalog order.
    pub fn list(&self) -> Vec<AlgorithmInfo> {
        self.algorithms
            .iter()
            .zip(1u32..)
            .map(|(algo, id)| AlgorithmInfo {
                id,
                name: algo.display_name().to_owned(),
                category: algo.category(),
            })
            .collect()
    }

    /// Resolve an identifier to an algorithm.
    pub fn get(&self, id: &str) -> Option<Arc<Algorithm>> {
        self.position(id).map(|i| Arc::clone(&self.algorithms[i]))
    }

    /// Mark `id` as the current algorithm. Returns `false` if it is unknown,
    /// in which case the current entry is left alone.
    pub fn set_current(&self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(index);
        tracing::debug!(algorithm = self.algorithms[index].key(), "sortvis.registry.current");
        true
    }

    /// The most recently dispatched algorithm, if any.
    pub fn current(&self) -> Option<Arc<Algorithm>> {
        let index = (*self.current.lock().unwrap_or_else(PoisonError::into_inner))?;
        Some(Arc::clone(&self.algorithms[index]))
    }

    /// Number of algorithms in the catalog.
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        let id = id.trim();
        if let Some(i) = self
            .algorithms
            .iter()
            .position(|a| a.display_name() == id || a.key() == id)
        {
            return Some(i);
        }
        id.parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|&i| i < self.algorithms.len())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
