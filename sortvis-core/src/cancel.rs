//! Cooperative cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A stop request shared between whoever asks for a stop and the run that
/// honors it.
///
/// Cloning is cheap and every clone observes the same flag. The run reads it
/// once per step boundary; there is no preemption.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a flag in the not-requested state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the run holding this flag to stop at its next step boundary.
    pub fn request(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Reset to not-requested. Called at the start of every run.
    pub fn clear(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Whether a stop has been requested since the last [`clear`](Self::clear).
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
