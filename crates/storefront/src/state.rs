//! Application state shared across handlers.
//!
//! `AppState` is the composition root: it owns the catalog and the shopper
//! session and injects the notification queue into the session's stores.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::catalog::Catalog;
use crate::notify::{Notification, NotificationQueue};
use crate::session::ShopSession;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The storefront keeps a single
/// shopper session in memory; the mutex applies each request's action as one
/// atomic step, in the order requests acquire it.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalog: Catalog,
    session: Mutex<ShopSession>,
    notifications: NotificationQueue,
}

impl AppState {
    /// Create a new application state with an empty session.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let notifications = NotificationQueue::new();
        let session = ShopSession::new(Arc::new(notifications.clone()));

        Self {
            inner: Arc::new(AppStateInner {
                catalog,
                session: Mutex::new(session),
                notifications,
            }),
        }
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Lock the shopper session for one action.
    pub async fn session(&self) -> MutexGuard<'_, ShopSession> {
        self.inner.session.lock().await
    }

    /// Take the notifications raised since the last call.
    ///
    /// Call while still holding the session lock so notifications from
    /// concurrent requests are not mixed up.
    #[must_use]
    pub fn take_notifications(&self) -> Vec<Notification> {
        self.inner.notifications.drain()
    }
}
