//! Configuration for the coordinator.

use sortvis_core::RunOptions;
use std::time::Duration;

/// Configuration for a [`Coordinator`](crate::Coordinator).
#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    /// Pause between forwarded steps so a client can animate them.
    /// `None` forwards as fast as the sink accepts.
    pub step_delay: Option<Duration>,
    /// Upper bound on `max - min + 1` for counting sort.
    pub max_counting_range: u64,
    /// Buffer size for [`ChannelSink`](crate::ChannelSink).
    pub channel_capacity: usize,
}

impl CoordinatorConfig {
    /// The producer-facing subset of this config.
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            max_counting_range: self.max_counting_range,
        }
    }
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            step_delay: None,
            max_counting_range: RunOptions::default().max_counting_range,
            channel_capacity: 64,
        }
    }
}
