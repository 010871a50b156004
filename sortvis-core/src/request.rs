//! Inbound request envelope.

use crate::error::InputError;
use serde::Deserialize;

/// A request from a subscriber, tagged by `event`.
///
/// ```json
/// {"event": "execute_algorithm", "name": "Bubble Sort", "input": [3, 1, 2]}
/// {"event": "stop_algorithm"}
/// {"event": "list_algorithms"}
/// ```
///
/// `name` and `input` are kept loose here; validating them is the
/// coordinator's job so every transport gets the same error messages.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Request {
    /// Start a run.
    ExecuteAlgorithm {
        /// Display name, slug, or numeric id.
        #[serde(default)]
        name: Option<String>,
        /// Raw input; expected to be an array of numbers.
        #[serde(default)]
        input: serde_json::Value,
    },
    /// Stop the active run, if any.
    StopAlgorithm,
    /// Discovery listing.
    ListAlgorithms,
}

impl Request {
    /// Parse one JSON request.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        serde_json::from_str(text).map_err(|e| InputError::Malformed(e.to_string()))
    }
}
