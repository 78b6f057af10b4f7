//! Wishlist store.
//!
//! A set of saved products keyed by product id. Entries keep the order they
//! were saved in for display; membership checks go through a hash set.

use std::collections::HashSet;
use std::sync::Arc;

use elegance_core::{Product, ProductId};

use super::CartStore;

/// The shopper's saved products.
#[derive(Debug, Default)]
pub struct WishlistStore {
    items: Vec<Arc<Product>>,
    ids: HashSet<ProductId>,
}

impl WishlistStore {
    /// Create an empty wishlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a product. Saving it again changes nothing.
    pub fn add_to_wishlist(&mut self, product: &Arc<Product>) {
        if self.ids.insert(product.id.clone()) {
            self.items.push(Arc::clone(product));
            tracing::debug!(product_id = %product.id, "Added to wishlist");
        }
    }

    /// Remove a saved product. Unknown ids are ignored.
    pub fn remove_from_wishlist(&mut self, product_id: &str) {
        if self.ids.remove(product_id) {
            self.items.retain(|p| p.id.as_str() != product_id);
            tracing::debug!(product_id, "Removed from wishlist");
        }
    }

    /// Whether a product is saved.
    #[must_use]
    pub fn is_in_wishlist(&self, product_id: &str) -> bool {
        self.ids.contains(product_id)
    }

    /// Remove the product if saved, otherwise save it.
    ///
    /// Returns whether the product is saved afterwards.
    pub fn toggle(&mut self, product: &Arc<Product>) -> bool {
        if self.is_in_wishlist(product.id.as_str()) {
            self.remove_from_wishlist(product.id.as_str());
            false
        } else {
            self.add_to_wishlist(product);
            true
        }
    }

    /// Move a saved product into the cart.
    ///
    /// Adds one unit in the product's first size and first color, then drops
    /// it from the wishlist. Returns `false` (and changes nothing) when the
    /// product is not saved.
    pub fn move_to_cart(&mut self, product_id: &str, cart: &mut CartStore) -> bool {
        let Some(product) = self
            .items
            .iter()
            .find(|p| p.id.as_str() == product_id)
            .cloned()
        else {
            return false;
        };

        let (Some(size), Some(color)) = (product.default_size(), product.default_color()) else {
            tracing::warn!(product_id, "Wishlisted product has no default size or color");
            return false;
        };

        cart.add_to_cart(&product, 1, size, color);
        self.remove_from_wishlist(product_id);
        true
    }

    /// Saved products in the order they were saved.
    #[must_use]
    pub fn items(&self) -> &[Arc<Product>] {
        &self.items
    }

    /// Number of saved products.
    #[must_use]
    pub fn total_wishlist_items(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
