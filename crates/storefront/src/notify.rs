//! User-facing notifications ("toasts").
//!
//! Stores raise a notification when an action deserves confirmation, such as
//! adding to the cart. Delivery is fire-and-forget: no store logic depends on
//! whether a notification was shown.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A short human-readable message for the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub level: NotificationLevel,
}

impl Notification {
    /// Informational notification.
    #[must_use]
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            level: NotificationLevel::Info,
        }
    }

    /// Error notification, e.g. a failed form validation.
    #[must_use]
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            level: NotificationLevel::Error,
        }
    }
}

/// Sink for notifications.
pub trait Notifier: Send + Sync {
    /// Deliver a notification. Must not fail or block.
    fn notify(&self, notification: Notification);
}

/// Notifier that only writes to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::info!(
            title = %notification.title,
            description = notification.description.as_deref().unwrap_or(""),
            level = ?notification.level,
            "Notification"
        );
    }
}

/// Notifier that buffers notifications until the caller drains them.
///
/// The HTTP layer drains the queue after each action and returns the
/// notifications with the response. Each notification is also logged.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    pending: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all pending notifications, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<Notification> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *pending)
    }

    /// Number of pending notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no notifications are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for NotificationQueue {
    fn notify(&self, notification: Notification) {
        TracingNotifier.notify(notification.clone());
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
