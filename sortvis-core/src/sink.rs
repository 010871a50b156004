//! The transport seam.

use crate::{error::TransportError, notification::Notification};
use async_trait::async_trait;
use std::sync::Arc;

/// Where a coordinator delivers notifications.
///
/// Implementations:
/// - `ChannelSink` (sortvis-coord): in-process tokio channel
/// - the stdio adapter: JSON lines on stdout
/// - `RecordingSink` (test-utils): keeps everything for assertions
///
/// `send` is awaited once per notification, in order. A slow sink slows
/// the run down; it never causes steps to be dropped or reordered.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver one notification.
    async fn send(&self, notification: Notification) -> Result<(), TransportError>;
}

#[async_trait]
impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    async fn send(&self, notification: Notification) -> Result<(), TransportError> {
        (**self).send(notification).await
    }
}
