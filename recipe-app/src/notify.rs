//! Toast sinks for form notifications.

use std::sync::{Mutex, PoisonError};

use recipe_core::form::Notification;
use tracing::{info, warn};

/// Shows a notification to the user.
pub trait Notifier: Send + Sync {
    fn notify(
        &self,
        notification: Notification,
    );
}

/// Writes notifications to the log. Used by the console host, where the log
/// is the user-facing output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(
        &self,
        notification: Notification,
    ) {
        match notification {
            Notification::Success(message) => info!(target: "toast", "{message}"),
            Notification::ValidationFailure(message) => warn!(target: "toast", "{message}"),
        }
    }
}

/// Keeps every notification in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen(&self) -> Vec<Notification> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(
        &self,
        notification: Notification,
    ) {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
