//! Catalog product record.

use std::collections::HashSet;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::{Category, Price, ProductId};

/// Highest value a product rating may take.
pub const MAX_RATING: f32 = 5.0;

/// Reasons a product record is rejected at catalog load.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProductError {
    #[error("product {0}: id cannot be empty")]
    EmptyId(ProductId),
    #[error("product {0}: must offer at least one size")]
    NoSizes(ProductId),
    #[error("product {0}: must offer at least one color")]
    NoColors(ProductId),
    #[error("product {0}: must have at least one image")]
    NoImages(ProductId),
    #[error("product {id}: duplicate {kind} label {label:?}")]
    DuplicateOption {
        id: ProductId,
        kind: &'static str,
        label: String,
    },
    #[error("product {id}: original price {original} must exceed price {price}")]
    OriginalPriceNotHigher {
        id: ProductId,
        price: Price,
        original: Price,
    },
    #[error("product {id}: negative price {price}")]
    NegativePrice { id: ProductId, price: Price },
    #[error("product {id}: rating {rating} outside 0-5")]
    RatingOutOfRange { id: ProductId, rating: f32 },
}

/// An immutable catalog entry.
///
/// Products are created when the catalog loads and shared read-only (behind
/// `Arc`) by the cart, the wishlist and every filtered view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Selling price in minor units.
    pub price: Price,
    /// Pre-sale price; present only for discounted products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    pub category: Category,
    pub subcategory: String,
    /// Size labels in display order.
    pub sizes: Vec<String>,
    /// Color labels in display order.
    pub colors: Vec<String>,
    pub images: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_sale: bool,
    pub rating: f32,
    pub reviews: u32,
}

impl Product {
    /// Check the record invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: empty id, empty or duplicated
    /// size/color lists, no images, a negative price, an original price not
    /// above the selling price, or a rating outside 0-5.
    pub fn validate(&self) -> Result<(), ProductError> {
        let id = || self.id.clone();

        if self.id.as_str().trim().is_empty() {
            return Err(ProductError::EmptyId(id()));
        }
        if self.sizes.is_empty() {
            return Err(ProductError::NoSizes(id()));
        }
        if self.colors.is_empty() {
            return Err(ProductError::NoColors(id()));
        }
        if self.images.is_empty() {
            return Err(ProductError::NoImages(id()));
        }
        check_distinct(&self.id, "size", &self.sizes)?;
        check_distinct(&self.id, "color", &self.colors)?;

        if self.price < Price::ZERO {
            return Err(ProductError::NegativePrice {
                id: id(),
                price: self.price,
            });
        }
        if let Some(original) = self.original_price
            && original <= self.price
        {
            return Err(ProductError::OriginalPriceNotHigher {
                id: id(),
                price: self.price,
                original,
            });
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(ProductError::RatingOutOfRange {
                id: id(),
                rating: self.rating,
            });
        }
        Ok(())
    }

    /// Percentage saved against the original price, rounded half up.
    ///
    /// Zero when the product has no original price.
    #[must_use]
    pub fn discount_percent(&self) -> u32 {
        let Some(original) = self.original_price else {
            return 0;
        };
        if original.minor() <= 0 {
            return 0;
        }

        let saved = Decimal::from(original.saturating_sub(self.price).minor());
        (saved * Decimal::ONE_HUNDRED / Decimal::from(original.minor()))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0)
    }

    /// Whether `size` is one of the product's size labels.
    #[must_use]
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Whether `color` is one of the product's color labels.
    #[must_use]
    pub fn offers_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// First (default) size label.
    #[must_use]
    pub fn default_size(&self) -> Option<&str> {
        self.sizes.first().map(String::as_str)
    }

    /// First (default) color label.
    #[must_use]
    pub fn default_color(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }
}

fn check_distinct(id: &ProductId, kind: &'static str, labels: &[String]) -> Result<(), ProductError> {
    let mut seen = HashSet::with_capacity(labels.len());
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(ProductError::DuplicateOption {
                id: id.clone(),
                kind,
                label: label.clone(),
            });
        }
    }
    Ok(())
}
