//! Per-shopper session state.
//!
//! `ShopSession` bundles the cart and wishlist with the notifier they report
//! to. It is created by the composition root (`AppState`) and passed
//! explicitly to whatever needs it; there is no global store.

use std::fmt;
use std::sync::Arc;

use crate::notify::{Notification, Notifier};
use crate::store::{CartStore, WishlistStore};

/// Cart, wishlist and notification sink for one shopper.
pub struct ShopSession {
    cart: CartStore,
    wishlist: WishlistStore,
    notifier: Arc<dyn Notifier>,
}

impl fmt::Debug for ShopSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShopSession")
            .field("cart", &self.cart)
            .field("wishlist", &self.wishlist)
            .finish_non_exhaustive()
    }
}

impl ShopSession {
    /// Create an empty session whose stores report to `notifier`.
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            cart: CartStore::new(Arc::clone(&notifier)),
            wishlist: WishlistStore::new(),
            notifier,
        }
    }

    /// Read access to the cart.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Mutable access to the cart.
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Read access to the wishlist.
    #[must_use]
    pub const fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    /// Mutable access to the wishlist.
    pub const fn wishlist_mut(&mut self) -> &mut WishlistStore {
        &mut self.wishlist
    }

    /// Move a wishlisted product into the cart. See [`WishlistStore::move_to_cart`].
    pub fn move_to_cart(&mut self, product_id: &str) -> bool {
        self.wishlist.move_to_cart(product_id, &mut self.cart)
    }

    /// Send a notification through the session's notifier.
    pub fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::notify::NotificationQueue;

    #[test]
    fn test_session_stores_share_notifier() {
        let queue = NotificationQueue::new();
        let mut session = ShopSession::new(Arc::new(queue.clone()));
        let catalog = Catalog::builtin().unwrap();
        let product = catalog.get("w-002").unwrap();

        session.wishlist_mut().add_to_wishlist(product);
        assert!(session.move_to_cart("w-002"));

        assert_eq!(session.cart().total_items(), 1);
        assert!(session.wishlist().is_empty());
        assert_eq!(queue.drain().len(), 1);
    }
}
