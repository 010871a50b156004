//! Outbound notifications. The only thing a subscriber ever sees.

use crate::step::Step;
use serde::{Deserialize, Serialize};

/// Message carried by the `algorithm_complete` notification.
pub const COMPLETE_MESSAGE: &str = "Algorithm execution completed";

/// Message carried by the `algorithm_stopped` notification.
pub const STOPPED_MESSAGE: &str = "Algorithm execution stopped";

/// Wire shape of a single step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepPayload {
    /// Full array state.
    pub current_array: Vec<i64>,
    /// Highlighted indices (one or two).
    pub comparisons: Vec<usize>,
    /// Whether the step mutated the array.
    pub swapped: bool,
}

impl From<Step> for StepPayload {
    fn from(step: Step) -> Self {
        Self {
            current_array: step.array,
            comparisons: step.highlighted,
            swapped: step.changed,
        }
    }
}

/// A notification sent to the subscriber of a run.
///
/// Serializes as `{"event": "<name>", "data": {...}}`. Exactly one terminal
/// notification (`Complete`, `Stopped`, or `Error`) ends every run.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum Notification {
    /// One step of the active run.
    #[serde(rename = "algorithm_step")]
    Step(StepPayload),

    /// The run finished naturally.
    #[serde(rename = "algorithm_complete")]
    Complete {
        /// Human-readable message.
        message: String,
    },

    /// The run ended because of a stop request.
    #[serde(rename = "algorithm_stopped")]
    Stopped {
        /// Human-readable message.
        message: String,
    },

    /// The run never started or aborted.
    #[serde(rename = "error")]
    Error {
        /// Human-readable message.
        message: String,
    },
}

impl Notification {
    /// Wrap a step.
    pub fn step(step: Step) -> Self {
        Self::Step(step.into())
    }

    /// Natural completion.
    pub fn complete() -> Self {
        Self::Complete {
            message: COMPLETE_MESSAGE.into(),
        }
    }

    /// Cancelled by a stop request.
    pub fn stopped() -> Self {
        Self::Stopped {
            message: STOPPED_MESSAGE.into(),
        }
    }

    /// Failure with a client-facing message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Event name on the wire.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::Step(_) => "algorithm_step",
            Self::Complete { .. } => "algorithm_complete",
            Self::Stopped { .. } => "algorithm_stopped",
            Self::Error { .. } => "error",
        }
    }

    /// Whether this notification ends a run.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Step(_))
    }
}
