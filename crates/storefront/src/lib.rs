//! Elegance storefront library.
//!
//! Shopper-side state for a clothing storefront: the product catalog, the
//! cart and wishlist stores, the listing filter pipeline, color previews, and
//! a mock checkout that turns the cart into an order enquiry. The `routes`
//! module exposes all of it as a JSON API.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod color;
pub mod config;
pub mod error;
pub mod filter;
pub mod middleware;
pub mod notify;
pub mod routes;
pub mod session;
pub mod state;
pub mod store;
