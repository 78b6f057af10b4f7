//! Cart route handlers.
//!
//! Every mutating handler applies its action and drains the notifications it
//! raised while holding the session lock, then returns the updated cart with
//! those notifications attached.

use axum::{Json, extract::State};
use elegance_core::Product;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{ActionResponse, JsonBody};
use super::products::{Money, ProductView};
use crate::checkout::OrderSummary;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::state::AppState;
use crate::store::{CartLineItem, CartStore};

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub product: ProductView,
    pub quantity: u32,
    pub size: String,
    pub color: String,
    pub line_total: Money,
}

impl From<&CartLineItem> for CartItemView {
    fn from(item: &CartLineItem) -> Self {
        Self {
            product: ProductView::from(item.product.as_ref()),
            quantity: item.quantity,
            size: item.selected_size.clone(),
            color: item.selected_color.clone(),
            line_total: item.line_total().into(),
        }
    }
}

/// Order summary display data.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
    pub free_shipping_remaining: Money,
}

impl From<OrderSummary> for SummaryView {
    fn from(summary: OrderSummary) -> Self {
        Self {
            subtotal: summary.subtotal.into(),
            shipping: summary.shipping.into(),
            total: summary.total.into(),
            free_shipping_remaining: summary.free_shipping_remaining.into(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total_items: u64,
    pub summary: SummaryView,
}

impl From<&CartStore> for CartView {
    fn from(cart: &CartStore) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total_items: cart.total_items(),
            summary: OrderSummary::for_cart(cart).into(),
        }
    }
}

/// Cart badge count.
#[derive(Debug, Serialize)]
pub struct CartCount {
    pub count: u64,
}

/// Add to cart request body.
///
/// Quantity defaults to 1. Size and color are optional in the body so a
/// missing selection gets the shopper-facing message rather than a
/// deserialization error.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: String,
    pub quantity: Option<u32>,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Update quantity request body.
///
/// Values below 1 remove the line.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub product_id: String,
    pub size: String,
    pub color: String,
    pub quantity: i64,
}

/// Remove line request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub product_id: String,
    pub size: String,
    pub color: String,
}

/// A validated add-to-cart selection.
#[derive(Debug, PartialEq, Eq)]
struct Selection {
    quantity: u32,
    size: String,
    color: String,
}

/// Check a shopper's selection against the product's options.
fn validate_selection(product: &Product, request: &AddToCartRequest) -> Result<Selection> {
    let size = request
        .size
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("Please select a size".to_string()))?;
    let color = request
        .color
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::Validation("Please select a color".to_string()))?;

    if !product.offers_size(size) {
        return Err(AppError::BadRequest(format!(
            "{} is not available in size {size}",
            product.name
        )));
    }
    if !product.offers_color(color) {
        return Err(AppError::BadRequest(format!(
            "{} is not available in {color}",
            product.name
        )));
    }

    let quantity = request.quantity.unwrap_or(1);
    if quantity == 0 {
        return Err(AppError::BadRequest(
            "Quantity must be at least 1".to_string(),
        ));
    }

    Ok(Selection {
        quantity,
        size: size.to_owned(),
        color: color.to_owned(),
    })
}

/// Display cart contents.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    let session = state.session().await;
    Json(CartView::from(session.cart()))
}

/// Get cart item count (for the header badge).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Json<CartCount> {
    let session = state.session().await;
    Json(CartCount {
        count: session.cart().total_items(),
    })
}

/// Add item to cart.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AddToCartRequest>,
) -> Result<Json<ActionResponse<CartView>>> {
    let product = state
        .catalog()
        .get(&request.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", request.product_id)))?;
    let selection = validate_selection(product, &request)?;

    add_breadcrumb(
        "cart",
        "Add to cart",
        &[
            ("product_id", product.id.as_str()),
            ("size", selection.size.as_str()),
            ("color", selection.color.as_str()),
        ],
    );

    let mut session = state.session().await;
    session
        .cart_mut()
        .add_to_cart(product, selection.quantity, &selection.size, &selection.color);

    Ok(Json(ActionResponse::new(
        CartView::from(session.cart()),
        state.take_notifications(),
    )))
}

/// Set a line's quantity.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdateCartRequest>,
) -> Json<ActionResponse<CartView>> {
    let mut session = state.session().await;
    session.cart_mut().update_quantity(
        &request.product_id,
        &request.size,
        &request.color,
        request.quantity,
    );

    Json(ActionResponse::new(
        CartView::from(session.cart()),
        state.take_notifications(),
    ))
}

/// Remove a line from the cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RemoveFromCartRequest>,
) -> Json<ActionResponse<CartView>> {
    let mut session = state.session().await;
    session
        .cart_mut()
        .remove_from_cart(&request.product_id, &request.size, &request.color);

    Json(ActionResponse::new(
        CartView::from(session.cart()),
        state.take_notifications(),
    ))
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Json<ActionResponse<CartView>> {
    let mut session = state.session().await;
    session.cart_mut().clear_cart();

    Json(ActionResponse::new(
        CartView::from(session.cart()),
        state.take_notifications(),
    ))
}
