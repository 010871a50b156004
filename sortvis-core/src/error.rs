//! Error types for each layer.

use thiserror::Error;

/// Why a request's input could not be turned into a run input.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The request did not name an algorithm.
    #[error("algorithm name is required")]
    MissingName,

    /// The input was not a JSON array.
    #[error("input is not a list")]
    NotAList,

    /// The input was an empty array.
    #[error("input list is empty")]
    Empty,

    /// None of the elements were numbers.
    #[error("input contains no numbers")]
    NoNumbers,

    /// An element other than a number was found among numbers.
    #[error("element {index} is not a number: {found}")]
    NotNumeric {
        /// Position of the first offending element.
        index: usize,
        /// The element as JSON text.
        found: String,
    },

    /// The request line itself could not be parsed.
    #[error("malformed request: {0}")]
    Malformed(String),
}

/// Errors raised when a producer is asked to start a run.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RunError {
    /// The producer cannot handle this input (empty, negative for radix).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Counting sort would need more counters than allowed.
    #[error("value range {span} exceeds the counting limit of {limit}")]
    RangeTooLarge {
        /// `max - min + 1`, saturated to `u64`.
        span: u64,
        /// Configured upper bound.
        limit: u64,
    },

    /// Catch-all. Include context.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors from delivering a notification to a subscriber.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TransportError {
    /// The subscriber has gone away.
    #[error("subscriber closed")]
    Closed,

    /// Writing to the underlying stream failed.
    #[error("io error: {0}")]
    Io(String),

    /// Catch-all.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors surfaced by the coordinator. Every variant maps to a single
/// client-facing message via [`CoordError::notification_message`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CoordError {
    /// Request input failed validation; no run was started.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// The requested algorithm is not in the registry.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Another run is active.
    #[error("busy: {0} is already running")]
    Busy(String),

    /// The producer refused to start.
    #[error("run rejected: {0}")]
    Run(#[from] RunError),

    /// A fault while producing steps.
    #[error("runtime failure: {0}")]
    RuntimeFailure(String),
}

impl CoordError {
    /// The message carried by the `error` notification for this failure.
    pub fn notification_message(&self) -> String {
        match self {
            Self::InvalidInput(InputError::MissingName) => "Algorithm name is required.".into(),
            Self::InvalidInput(InputError::NotNumeric { index, found }) => format!(
                "Invalid input. Element {index} ({found}) is not a number. Please provide a list of numbers."
            ),
            Self::InvalidInput(InputError::Malformed(detail)) => {
                format!("Malformed request: {detail}")
            }
            Self::InvalidInput(_) => "Invalid input. Please provide a list of numbers.".into(),
            Self::UnknownAlgorithm(name) => format!("Unknown algorithm: {name}"),
            Self::Busy(name) => format!("{name} is already running. Stop it first."),
            Self::Run(RunError::InvalidInput(detail)) => format!("Invalid input. {detail}"),
            Self::Run(err) => format!("An error occurred: {err}"),
            Self::RuntimeFailure(detail) => format!("An error occurred: {detail}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_algorithm_message_names_it() {
        let err = CoordError::UnknownAlgorithm("Bogo Sort".into());
        assert_eq!(err.notification_message(), "Unknown algorithm: Bogo Sort");
    }

    #[test]
    fn input_errors_share_the_generic_message() {
        for err in [InputError::NotAList, InputError::Empty, InputError::NoNumbers] {
            assert_eq!(
                CoordError::from(err).notification_message(),
                "Invalid input. Please provide a list of numbers."
            );
        }
    }

    #[test]
    fn range_error_reads_as_runtime_failure() {
        let err = CoordError::from(RunError::RangeTooLarge {
            span: 10,
            limit: 5,
        });
        assert!(err.notification_message().starts_with("An error occurred:"));
    }
}
