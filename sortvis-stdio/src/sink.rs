//! Notification sink that renders JSON lines.

use async_trait::async_trait;
use sortvis_core::{Notification, NotificationSink, TransportError};
use tokio::sync::mpsc;

/// Serializes each notification to one JSON line and hands it to the
/// writer task.
#[derive(Debug, Clone)]
pub(crate) struct LineSink {
    tx: mpsc::Sender<String>,
}

impl LineSink {
    pub(crate) fn new(tx: mpsc::Sender<String>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl NotificationSink for LineSink {
    async fn send(&self, notification: Notification) -> Result<(), TransportError> {
        let line = serde_json::to_string(&notification)
            .map_err(|e| TransportError::Other(Box::new(e)))?;
        self.tx.send(line).await.map_err(|_| TransportError::Closed)
    }
}
