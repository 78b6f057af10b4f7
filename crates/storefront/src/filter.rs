//! Product listing filter and sort pipeline.
//!
//! [`filter_products`] is a pure function of the catalog and a
//! [`FilterState`]: it never touches the catalog and returns a fresh view on
//! every call. Filters apply in order category, size, price; the sort runs
//! last and is stable, so ties keep catalog order.

use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::sync::Arc;

use elegance_core::{Category, Price, Product};
use serde::{Deserialize, Serialize};

/// Sizes offered in the listing sidebar.
pub const FILTER_SIZES: [&str; 17] = [
    "XS", "S", "M", "L", "XL", "XXL", "28", "30", "32", "34", "36", "38", "2-3Y", "4-5Y", "6-7Y",
    "8-9Y", "10-11Y",
];

/// A price bucket. Both bounds are inclusive; `max: None` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    pub label: &'static str,
    pub min: Price,
    pub max: Option<Price>,
}

impl PriceRange {
    /// Whether `price` falls inside this bucket.
    #[must_use]
    pub fn contains(&self, price: Price) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }
}

/// Fixed, non-overlapping price buckets in ascending order.
pub const PRICE_RANGES: [PriceRange; 4] = [
    PriceRange {
        label: "Under ₹1,000",
        min: Price::ZERO,
        max: Some(Price::from_minor(99_999)),
    },
    PriceRange {
        label: "₹1,000 - ₹2,500",
        min: Price::from_major(1_000),
        max: Some(Price::from_minor(249_999)),
    },
    PriceRange {
        label: "₹2,500 - ₹5,000",
        min: Price::from_major(2_500),
        max: Some(Price::from_minor(499_999)),
    },
    PriceRange {
        label: "Above ₹5,000",
        min: Price::from_major(5_000),
        max: None,
    },
];

/// Listing sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// New arrivals first.
    #[default]
    Newest,
    /// Most reviewed first.
    Popular,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
}

impl SortKey {
    /// Wire name (`"price-low"` etc).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Popular => "popular",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "popular" => Ok(Self::Popular),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            _ => Err(format!("invalid sort key: {s}")),
        }
    }
}

/// Shopper-selected listing filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: Option<Category>,
    /// Products offering any of these sizes pass; empty means no size filter.
    pub sizes: BTreeSet<String>,
    /// Index into [`PRICE_RANGES`].
    pub price_range: Option<usize>,
    pub sort: SortKey,
}

impl FilterState {
    /// Select a size if unselected, otherwise unselect it.
    pub fn toggle_size(&mut self, size: &str) {
        if !self.sizes.remove(size) {
            self.sizes.insert(size.to_owned());
        }
    }

    /// Reset category, sizes and price range. The sort order is kept.
    pub fn clear(&mut self) {
        self.category = None;
        self.sizes.clear();
        self.price_range = None;
    }

    /// Whether any filter (not counting sort) is active.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        self.category.is_some() || !self.sizes.is_empty() || self.price_range.is_some()
    }

    /// The selected price bucket, if the index is valid.
    #[must_use]
    pub fn selected_price_range(&self) -> Option<&'static PriceRange> {
        self.price_range.and_then(|index| PRICE_RANGES.get(index))
    }
}

/// Filter and sort the catalog.
#[must_use]
pub fn filter_products(products: &[Arc<Product>], state: &FilterState) -> Vec<Arc<Product>> {
    let price_range = state.selected_price_range();
    if state.price_range.is_some() && price_range.is_none() {
        tracing::warn!(index = ?state.price_range, "Ignoring unknown price range");
    }

    let mut filtered: Vec<Arc<Product>> = products
        .iter()
        .filter(|p| state.category.is_none_or(|category| p.category == category))
        .filter(|p| state.sizes.is_empty() || p.sizes.iter().any(|s| state.sizes.contains(s)))
        .filter(|p| price_range.is_none_or(|range| range.contains(p.price)))
        .cloned()
        .collect();

    match state.sort {
        SortKey::Newest => filtered.sort_by_key(|p| !p.is_new),
        SortKey::Popular => filtered.sort_by_key(|p| Reverse(p.reviews)),
        SortKey::PriceLow => filtered.sort_by_key(|p| p.price),
        SortKey::PriceHigh => filtered.sort_by_key(|p| Reverse(p.price)),
    }

    tracing::debug!(
        category = ?state.category,
        sizes = state.sizes.len(),
        price_range = ?state.price_range,
        sort = state.sort.as_str(),
        results = filtered.len(),
        "Filtered products"
    );
    filtered
}
