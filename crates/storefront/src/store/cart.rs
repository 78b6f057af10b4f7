//! Cart store.
//!
//! Line items are keyed by `(product id, size, color)`; adding the same key
//! again merges into the existing line. Totals are derived on every read so
//! they can never go stale.
//!
//! The store does not check that the selected size and color are offered by
//! the product. Callers pick them from `Product::sizes` / `Product::colors`;
//! the HTTP layer rejects anything else before it reaches the store.

use std::fmt;
use std::sync::Arc;

use elegance_core::{Price, Product};

use crate::notify::{Notification, Notifier};

/// One `(product, size, color, quantity)` entry in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    pub product: Arc<Product>,
    /// Always at least 1 while the line is in the cart.
    pub quantity: u32,
    pub selected_size: String,
    pub selected_color: String,
}

/// Borrowed identity key of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineKey<'a> {
    pub product_id: &'a str,
    pub size: &'a str,
    pub color: &'a str,
}

impl CartLineItem {
    /// Identity key of this line.
    #[must_use]
    pub fn key(&self) -> LineKey<'_> {
        LineKey {
            product_id: self.product.id.as_str(),
            size: &self.selected_size,
            color: &self.selected_color,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }

    fn matches(&self, product_id: &str, size: &str, color: &str) -> bool {
        self.key()
            == LineKey {
                product_id,
                size,
                color,
            }
    }
}

/// The shopper's cart.
pub struct CartStore {
    items: Vec<CartLineItem>,
    notifier: Arc<dyn Notifier>,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Create an empty cart that reports confirmations to `notifier`.
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            items: Vec::new(),
            notifier,
        }
    }

    /// Add `quantity` units of a product in the given size and color.
    ///
    /// Merges into an existing line with the same key, otherwise appends a
    /// new line. A quantity of zero does nothing.
    pub fn add_to_cart(&mut self, product: &Arc<Product>, quantity: u32, size: &str, color: &str) {
        if quantity == 0 {
            tracing::debug!(product_id = %product.id, "Ignoring add of zero quantity");
            return;
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.matches(product.id.as_str(), size, color))
        {
            item.quantity = item.quantity.saturating_add(quantity);
            tracing::debug!(
                product_id = %product.id,
                size,
                color,
                quantity = item.quantity,
                "Merged into existing cart line"
            );
        } else {
            self.items.push(CartLineItem {
                product: Arc::clone(product),
                quantity,
                selected_size: size.to_owned(),
                selected_color: color.to_owned(),
            });
            tracing::debug!(product_id = %product.id, size, color, quantity, "Added cart line");
        }

        self.notifier.notify(Notification::info(
            "Added to Cart",
            format!("{} ({size}) has been added to your cart.", product.name),
        ));
    }

    /// Remove the line with the given key. Missing lines are ignored.
    pub fn remove_from_cart(&mut self, product_id: &str, size: &str, color: &str) {
        let before = self.items.len();
        self.items
            .retain(|item| !item.matches(product_id, size, color));
        if self.items.len() < before {
            tracing::debug!(product_id, size, color, "Removed cart line");
        }
    }

    /// Set a line's quantity exactly.
    ///
    /// Quantities below 1 remove the line. Missing lines are ignored.
    pub fn update_quantity(&mut self, product_id: &str, size: &str, color: &str, quantity: i64) {
        if quantity < 1 {
            self.remove_from_cart(product_id, size, color);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.matches(product_id, size, color))
        {
            item.quantity = quantity;
            tracing::debug!(product_id, size, color, quantity, "Updated cart line quantity");
        }
    }

    /// Remove every line.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        tracing::debug!("Cart cleared");
    }

    /// Line items in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Find a line by key.
    #[must_use]
    pub fn line(&self, product_id: &str, size: &str, color: &str) -> Option<&CartLineItem> {
        self.items
            .iter()
            .find(|item| item.matches(product_id, size, color))
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line quantities (the cart badge count).
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(CartLineItem::line_total).sum()
    }
}
