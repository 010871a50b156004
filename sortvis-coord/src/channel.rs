//! In-process transport over a tokio channel.

use async_trait::async_trait;
use sortvis_core::{Notification, NotificationSink, TransportError};
use tokio::sync::mpsc;

/// A [`NotificationSink`] that forwards into a bounded tokio channel.
///
/// A full channel applies backpressure to the run instead of dropping
/// steps. Once the receiver is dropped, every send fails with
/// [`TransportError::Closed`].
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<Notification>,
}

impl ChannelSink {
    /// Create a sink and the receiver that drains it.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<Notification>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }
}

#[async_trait]
impl NotificationSink for ChannelSink {
    async fn send(&self, notification: Notification) -> Result<(), TransportError> {
        self.tx
            .send(notification)
            .await
            .map_err(|_| TransportError::Closed)
    }
}
