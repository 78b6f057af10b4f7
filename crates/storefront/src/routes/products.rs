//! Product route handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use elegance_core::{Category, Price, Product};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::catalog::{FEATURED_LIMIT, RELATED_LIMIT};
use crate::color::color_filter;
use crate::error::{AppError, Result};
use crate::filter::{FILTER_SIZES, FilterState, PRICE_RANGES, PriceRange, SortKey, filter_products};
use crate::state::AppState;

/// Price display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Money {
    /// Amount in minor units.
    pub minor: i64,
    /// Decimal amount as string (e.g. "1299.00").
    pub amount: String,
    /// Display string (e.g. "₹1,299").
    pub formatted: String,
}

impl From<Price> for Money {
    fn from(price: Price) -> Self {
        Self {
            minor: price.minor(),
            amount: price.amount().to_string(),
            formatted: price.to_string(),
        }
    }
}

/// Product display data.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    pub discount_percent: u32,
    pub category: Category,
    pub subcategory: String,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub images: Vec<String>,
    pub description: String,
    pub is_new: bool,
    pub is_sale: bool,
    pub rating: f32,
    pub reviews: u32,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.into(),
            original_price: product.original_price.map(Money::from),
            discount_percent: product.discount_percent(),
            category: product.category,
            subcategory: product.subcategory.clone(),
            sizes: product.sizes.clone(),
            colors: product.colors.clone(),
            images: product.images.clone(),
            description: product.description.clone(),
            is_new: product.is_new,
            is_sale: product.is_sale,
            rating: product.rating,
            reviews: product.reviews,
        }
    }
}

/// Convert shared products into views.
pub(crate) fn views(products: &[Arc<Product>]) -> Vec<ProductView> {
    products.iter().map(|p| ProductView::from(p.as_ref())).collect()
}

/// Listing query parameters.
///
/// `sizes` is comma-separated (`sizes=M,L`); `price` indexes the fixed
/// price ranges.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub category: Option<String>,
    pub sizes: Option<String>,
    pub price: Option<usize>,
    pub sort: Option<String>,
}

impl TryFrom<ListingQuery> for FilterState {
    type Error = AppError;

    fn try_from(query: ListingQuery) -> Result<Self> {
        let category = query
            .category
            .filter(|c| !c.trim().is_empty())
            .map(|c| c.parse::<Category>())
            .transpose()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        let sort = query
            .sort
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.parse::<SortKey>())
            .transpose()
            .map_err(AppError::BadRequest)?
            .unwrap_or_default();
        if let Some(index) = query.price
            && index >= PRICE_RANGES.len()
        {
            return Err(AppError::BadRequest(format!("unknown price range: {index}")));
        }
        let sizes = query
            .sizes
            .iter()
            .flat_map(|s| s.split(','))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
            .collect();

        Ok(Self {
            category,
            sizes,
            price_range: query.price,
            sort,
        })
    }
}

/// Filter options offered by the listing sidebar.
#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<Category>,
    pub sizes: &'static [&'static str],
    pub price_ranges: &'static [PriceRange],
}

/// Product listing response.
#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub title: String,
    pub count: usize,
    pub has_filters: bool,
    pub sort: SortKey,
    pub products: Vec<ProductView>,
    pub filters: FilterOptions,
}

/// Product detail response.
#[derive(Debug, Serialize)]
pub struct ProductDetailResponse {
    pub product: ProductView,
    pub in_wishlist: bool,
    pub related: Vec<ProductView>,
}

/// Color preview query parameters.
#[derive(Debug, Deserialize)]
pub struct ColorPreviewQuery {
    pub color: String,
}

/// Color preview response.
#[derive(Debug, Serialize)]
pub struct ColorPreviewResponse {
    pub color: String,
    /// CSS `filter` value to apply to the product image.
    pub filter: &'static str,
    pub offered: bool,
}

/// Product listing with filters and sort.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<ListingResponse>> {
    let filter = FilterState::try_from(query)?;
    let products = filter_products(state.catalog().products(), &filter);

    let title = filter.category.map_or_else(
        || "All Products".to_string(),
        |c| format!("{}'s Collection", c.label()),
    );

    Ok(Json(ListingResponse {
        title,
        count: products.len(),
        has_filters: filter.has_filters(),
        sort: filter.sort,
        products: views(&products),
        filters: FilterOptions {
            categories: Category::ALL.to_vec(),
            sizes: &FILTER_SIZES,
            price_ranges: &PRICE_RANGES,
        },
    }))
}

/// New and on-sale products for the home page.
#[instrument(skip(state))]
pub async fn featured(State(state): State<AppState>) -> Json<Vec<ProductView>> {
    Json(views(&state.catalog().featured(FEATURED_LIMIT)))
}

/// Product detail with related products.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductDetailResponse>> {
    let catalog = state.catalog();
    let product = catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let in_wishlist = state.session().await.wishlist().is_in_wishlist(&id);

    Ok(Json(ProductDetailResponse {
        product: ProductView::from(product.as_ref()),
        in_wishlist,
        related: views(&catalog.related(product, RELATED_LIMIT)),
    }))
}

/// CSS filter previewing a product photo in another color.
#[instrument(skip(state))]
pub async fn color_preview(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ColorPreviewQuery>,
) -> Result<Json<ColorPreviewResponse>> {
    let product = state
        .catalog()
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(Json(ColorPreviewResponse {
        offered: product.offers_color(&query.color),
        filter: color_filter(&query.color),
        color: query.color,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_query_to_filter_state() {
        let query = ListingQuery {
            category: Some("Men".to_string()),
            sizes: Some("M, L,,XL".to_string()),
            price: Some(1),
            sort: Some("price-high".to_string()),
        };
        let state = FilterState::try_from(query).unwrap();
        assert_eq!(state.category, Some(Category::Men));
        assert_eq!(state.sizes.len(), 3);
        assert!(state.sizes.contains("XL"));
        assert_eq!(state.price_range, Some(1));
        assert_eq!(state.sort, SortKey::PriceHigh);
    }

    #[test]
    fn test_empty_listing_query_is_default() {
        let state = FilterState::try_from(ListingQuery::default()).unwrap();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_listing_query_rejects_unknown_values() {
        let bad_category = ListingQuery {
            category: Some("pets".to_string()),
            ..ListingQuery::default()
        };
        assert!(matches!(
            FilterState::try_from(bad_category),
            Err(AppError::BadRequest(_))
        ));

        let bad_price = ListingQuery {
            price: Some(PRICE_RANGES.len()),
            ..ListingQuery::default()
        };
        assert!(matches!(
            FilterState::try_from(bad_price),
            Err(AppError::BadRequest(_))
        ));

        let bad_sort = ListingQuery {
            sort: Some("random".to_string()),
            ..ListingQuery::default()
        };
        assert!(matches!(
            FilterState::try_from(bad_sort),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_money_view() {
        let money = Money::from(Price::from_minor(129_950));
        assert_eq!(money.minor, 129_950);
        assert_eq!(money.amount, "1299.50");
        assert_eq!(money.formatted, "₹1,299.50");
    }
}
