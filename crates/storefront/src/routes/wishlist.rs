//! Wishlist route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{ActionResponse, JsonBody};
use super::cart::CartView;
use super::products::{ProductView, views};
use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::store::WishlistStore;

/// Wishlist display data.
#[derive(Debug, Clone, Serialize)]
pub struct WishlistView {
    pub items: Vec<ProductView>,
    pub total_items: usize,
}

impl From<&WishlistStore> for WishlistView {
    fn from(wishlist: &WishlistStore) -> Self {
        Self {
            items: views(wishlist.items()),
            total_items: wishlist.total_wishlist_items(),
        }
    }
}

/// Request body naming a single product.
#[derive(Debug, Deserialize)]
pub struct WishlistRequest {
    pub product_id: String,
}

/// Toggle result.
#[derive(Debug, Serialize)]
pub struct ToggleView {
    /// Whether the product is in the wishlist after the toggle.
    pub in_wishlist: bool,
    #[serde(flatten)]
    pub wishlist: WishlistView,
}

/// Move-to-cart result.
#[derive(Debug, Serialize)]
pub struct MoveToCartView {
    pub moved: bool,
    pub wishlist: WishlistView,
    pub cart: CartView,
}

/// Display wishlist contents.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<WishlistView> {
    let session = state.session().await;
    Json(WishlistView::from(session.wishlist()))
}

/// Add a product to the wishlist.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<WishlistRequest>,
) -> Result<Json<ActionResponse<WishlistView>>> {
    let product = state
        .catalog()
        .get(&request.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", request.product_id)))?;

    let mut session = state.session().await;
    session.wishlist_mut().add_to_wishlist(product);

    Ok(Json(ActionResponse::new(
        WishlistView::from(session.wishlist()),
        state.take_notifications(),
    )))
}

/// Remove a product from the wishlist. Unknown ids are a no-op.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<WishlistRequest>,
) -> Json<ActionResponse<WishlistView>> {
    let mut session = state.session().await;
    session.wishlist_mut().remove_from_wishlist(&request.product_id);

    Json(ActionResponse::new(
        WishlistView::from(session.wishlist()),
        state.take_notifications(),
    ))
}

/// Add the product if absent, remove it if present.
#[instrument(skip(state))]
pub async fn toggle(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<WishlistRequest>,
) -> Result<Json<ActionResponse<ToggleView>>> {
    let product = state
        .catalog()
        .get(&request.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", request.product_id)))?;

    let mut session = state.session().await;
    let in_wishlist = session.wishlist_mut().toggle(product);

    Ok(Json(ActionResponse::new(
        ToggleView {
            in_wishlist,
            wishlist: WishlistView::from(session.wishlist()),
        },
        state.take_notifications(),
    )))
}

/// Move a wishlisted product into the cart in its default size and color.
#[instrument(skip(state))]
pub async fn move_to_cart(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<WishlistRequest>,
) -> Result<Json<ActionResponse<MoveToCartView>>> {
    let mut session = state.session().await;
    if !session.wishlist().is_in_wishlist(&request.product_id) {
        return Err(AppError::NotFound(format!(
            "wishlist item {}",
            request.product_id
        )));
    }
    let moved = session.move_to_cart(&request.product_id);

    Ok(Json(ActionResponse::new(
        MoveToCartView {
            moved,
            wishlist: WishlistView::from(session.wishlist()),
            cart: CartView::from(session.cart()),
        },
        state.take_notifications(),
    )))
}
