//! RecordingSink: keeps every notification and always accepts.

use crate::error::TransportError;
use crate::notification::{Notification, StepPayload};
use crate::sink::NotificationSink;
use async_trait::async_trait;
use std::sync::Mutex;

/// A sink that records every notification it receives.
/// Use `.notifications()` to inspect what was recorded.
#[derive(Debug, Default)]
pub struct RecordingSink {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, in delivery order.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    /// Only the step payloads, in delivery order.
    pub fn steps(&self) -> Vec<StepPayload> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Step(payload) => Some(payload),
                _ => None,
            })
            .collect()
    }

    /// The terminal notifications recorded so far.
    pub fn terminals(&self) -> Vec<Notification> {
        self.notifications()
            .into_iter()
            .filter(Notification::is_terminal)
            .collect()
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) {
        self.notifications.lock().unwrap().clear();
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn send(&self, notification: Notification) -> Result<(), TransportError> {
        self.notifications.lock().unwrap().push(notification);
        Ok(())
    }
}
