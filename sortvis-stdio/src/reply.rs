//! Direct replies to a request, outside any run's notification stream.

use serde::Serialize;
use sortvis_core::AlgorithmInfo;

/// A line written in answer to a request rather than as part of a run.
///
/// Shares the `{"event": ..., "data": ...}` envelope with run
/// notifications so a client can dispatch on `event` alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum Reply {
    /// Discovery listing.
    Algorithms(Vec<AlgorithmInfo>),
    /// Answer to `stop_algorithm`. `algorithm` is `null` when nothing was
    /// running.
    StopAck {
        /// Display name of the run asked to stop.
        algorithm: Option<String>,
    },
    /// A start arrived while another run was active.
    StartRejected {
        /// Client-facing message.
        message: String,
    },
    /// The request line could not be parsed.
    RequestError {
        /// Client-facing message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sortvis_core::Category;

    #[test]
    fn listing_wire_shape() {
        let reply = Reply::Algorithms(vec![AlgorithmInfo {
            id: 1,
            name: "Bubble Sort".into(),
            category: Category::Sorting,
        }]);
        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            json!({
                "event": "algorithms",
                "data": [{"id": 1, "name": "Bubble Sort", "category": "Sorting"}]
            })
        );
    }

    #[test]
    fn idle_stop_ack_has_null_algorithm() {
        assert_eq!(
            serde_json::to_value(Reply::StopAck { algorithm: None }).unwrap(),
            json!({"event": "stop_ack", "data": {"algorithm": null}})
        );
    }
}
