//! The producer protocol and the run-scoped wrapper around it.

use crate::{cancel::CancelFlag, error::RunError, step::Step};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;

/// Classification shown to clients next to each algorithm.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Comparison and distribution sorts.
    Sorting,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sorting => f.write_str("Sorting"),
        }
    }
}

/// One row of the discovery listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmInfo {
    /// 1-based position in the catalog.
    pub id: u32,
    /// Human-readable label, also accepted as a lookup key.
    pub name: String,
    /// Classification tag.
    pub category: Category,
}

/// Limits a producer consults before it starts.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Upper bound on `max - min + 1` for counting sort.
    pub max_counting_range: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            max_counting_range: 1_000_000,
        }
    }
}

/// A boxed, sendable step sequence.
pub type StepIter = Box<dyn Iterator<Item = Step> + Send>;

/// A sorting algorithm expressed as a lazy sequence of [`Step`]s.
///
/// Implementations own a private copy of the input and advance it one
/// comparison or placement per call to `next`. They know nothing about
/// cancellation: [`Algorithm::run`] wraps the sequence so the stop flag is
/// checked before every step.
pub trait StepProducer: Send + Sync {
    /// Stable slug used for lookup (`"bubble"`, `"quick"`, ...).
    fn key(&self) -> &'static str;

    /// Label shown to clients (`"Bubble Sort"`).
    fn display_name(&self) -> &'static str;

    /// Classification tag.
    fn category(&self) -> Category {
        Category::Sorting
    }

    /// Start a traversal over `input`, which is non-empty and already owned
    /// by the producer.
    ///
    /// Returns an error when the input is outside what this algorithm
    /// supports; in that case no step is ever produced.
    fn produce_steps(&self, input: Vec<i64>, options: &RunOptions) -> Result<StepIter, RunError>;
}

/// A registered producer paired with its stop flag.
///
/// Long-lived: built once and reused for every run. The flag is run-scoped
/// and cleared at the start of each [`run`](Self::run).
pub struct Algorithm {
    producer: Box<dyn StepProducer>,
    cancel: CancelFlag,
}

impl Algorithm {
    /// Wrap a producer.
    pub fn new(producer: impl StepProducer + 'static) -> Self {
        Self {
            producer: Box::new(producer),
            cancel: CancelFlag::new(),
        }
    }

    /// Lookup slug.
    pub fn key(&self) -> &'static str {
        self.producer.key()
    }

    /// Client-facing label.
    pub fn display_name(&self) -> &'static str {
        self.producer.display_name()
    }

    /// Classification tag.
    pub fn category(&self) -> Category {
        self.producer.category()
    }

    /// Begin a run over a copy of `input`.
    ///
    /// Clears any stop left over from a previous run, so the new sequence
    /// always starts live.
    pub fn run(&self, input: &[i64], options: &RunOptions) -> Result<Steps, RunError> {
        if input.is_empty() {
            return Err(RunError::InvalidInput(
                "input must contain at least one number".into(),
            ));
        }
        self.cancel.clear();
        let inner = self.producer.produce_steps(input.to_vec(), options)?;
        Ok(Steps {
            inner,
            cancel: self.cancel.clone(),
            emitted: 0,
            state: StepsState::Live,
        })
    }

    /// Request the in-flight run, if any, to stop at its next step boundary.
    pub fn stop(&self) {
        self.cancel.request();
    }

    /// Whether a stop is pending for the current run.
    pub fn stop_requested(&self) -> bool {
        self.cancel.is_requested()
    }
}

impl fmt::Debug for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Algorithm")
            .field("key", &self.key())
            .field("stop_requested", &self.stop_requested())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepsState {
    Live,
    Exhausted,
    Cancelled,
}

/// The step sequence of one run.
///
/// Checks the stop flag before yielding each step. Once the flag is seen,
/// the sequence ends for good and [`was_cancelled`](Self::was_cancelled)
/// reports it; no trailing step is produced.
pub struct Steps {
    inner: StepIter,
    cancel: CancelFlag,
    emitted: usize,
    state: StepsState,
}

impl Steps {
    /// Number of steps yielded so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Whether the sequence ended because of a stop request.
    pub fn was_cancelled(&self) -> bool {
        self.state == StepsState::Cancelled
    }

    /// Whether the sequence ran out of work on its own.
    pub fn is_exhausted(&self) -> bool {
        self.state == StepsState::Exhausted
    }
}

impl Iterator for Steps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.state != StepsState::Live {
            return None;
        }
        if self.cancel.is_requested() {
            self.state = StepsState::Cancelled;
            return None;
        }
        match self.inner.next() {
            Some(step) => {
                self.emitted += 1;
                Some(step)
            }
            None => {
                self.state = StepsState::Exhausted;
                None
            }
        }
    }
}

impl FusedIterator for Steps {}

impl fmt::Debug for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Steps")
            .field("emitted", &self.emitted)
            .field("state", &self.state)
            .finish()
    }
}
