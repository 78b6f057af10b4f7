//! HTTP route handlers for the storefront JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                        - Health check
//!
//! # Products
//! GET  /products                      - Listing (?category=&sizes=M,L&price=1&sort=price-low)
//! GET  /products/featured             - New and on-sale products
//! GET  /products/{id}                 - Product detail with related products
//! GET  /products/{id}/color-preview   - CSS filter for a color (?color=Red)
//!
//! # Cart
//! GET  /cart                          - Cart contents and order summary
//! GET  /cart/count                    - Cart badge count
//! POST /cart/add                      - Add item {product_id, quantity?, size?, color?}
//! POST /cart/update                   - Set quantity {product_id, size, color, quantity}
//! POST /cart/remove                   - Remove line {product_id, size, color}
//! POST /cart/clear                    - Empty the cart
//!
//! # Wishlist
//! GET  /wishlist                      - Wishlist contents
//! POST /wishlist/add                  - Add product {product_id}
//! POST /wishlist/remove               - Remove product {product_id}
//! POST /wishlist/toggle               - Toggle product {product_id}
//! POST /wishlist/move-to-cart         - Move product to cart {product_id}
//!
//! # Enquiry
//! GET  /enquiry                       - Cart summary for the enquiry form
//! POST /enquiry                       - Submit order enquiry
//! ```

pub mod cart;
pub mod enquiry;
pub mod products;
pub mod wishlist;

use std::any::Any;

use axum::{
    Router,
    body::Body,
    extract::FromRequest,
    http::Request,
    middleware as axum_middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::error::AppError;
use crate::middleware::{request_id_middleware, security_headers_middleware};
use crate::notify::Notification;
use crate::state::AppState;

/// Response to a shopper action: the updated view plus the notifications the
/// action raised.
#[derive(Debug, Serialize)]
pub struct ActionResponse<T> {
    #[serde(flatten)]
    pub data: T,
    pub notifications: Vec<Notification>,
}

impl<T> ActionResponse<T> {
    /// Wrap `data` with drained notifications.
    #[must_use]
    pub const fn new(data: T, notifications: Vec<Notification>) -> Self {
        Self {
            data,
            notifications,
        }
    }
}

/// JSON request body whose rejections are reported as [`AppError`], so
/// clients always get a JSON error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/featured", get(products::featured))
        .route("/{id}", get(products::show))
        .route("/{id}/color-preview", get(products::color_preview))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::show))
        .route("/add", post(wishlist::add))
        .route("/remove", post(wishlist::remove))
        .route("/toggle", post(wishlist::toggle))
        .route("/move-to-cart", post(wishlist::move_to_cart))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/wishlist", wishlist_routes())
        .route("/enquiry", get(enquiry::show).post(enquiry::submit))
}

/// Build the application router with its middleware stack.
///
/// Layers run outermost-last: request tracing wraps the request ID, which
/// wraps the security headers, which wrap the panic handler. Sentry layers
/// are added by the binary.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(axum_middleware::from_fn(security_headers_middleware))
        .layer(axum_middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Report a handler panic as an internal error.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .unwrap_or_else(|| "handler panicked".to_string());
    AppError::Internal(detail).into_response()
}
