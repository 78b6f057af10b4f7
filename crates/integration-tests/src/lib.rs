//! Integration tests for the Elegance storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p elegance-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Shopper session scenarios driven through the library
//! - `catalog_browsing` - Filter and sort pipeline over the built-in catalog
//! - `storefront_api` - JSON API over HTTP against an in-process server
//!
//! Each [`TestServer`] owns its own application state, so tests do not share
//! a cart or wishlist.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use elegance_storefront::catalog::Catalog;
use elegance_storefront::routes;
use elegance_storefront::state::AppState;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A storefront served on an ephemeral local port.
pub struct TestServer {
    addr: SocketAddr,
    client: Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Serve the built-in catalog.
    ///
    /// # Panics
    ///
    /// Panics if the catalog is invalid or no local port can be bound.
    pub async fn spawn() -> Self {
        let catalog = Catalog::builtin().expect("built-in catalog is valid");
        Self::with_catalog(catalog).await
    }

    /// Serve the given catalog with a fresh session.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn with_catalog(catalog: Catalog) -> Self {
        let state = AppState::new(catalog);
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has a local address");

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, routes::app(state)).await;
        });

        Self {
            addr,
            client: Client::new(),
            handle,
        }
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// The HTTP client used by the helpers.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// GET a path and decode the JSON body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body is not JSON.
    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");
        let status = resp.status();
        let body = resp.json().await.expect("Response body is JSON");
        (status, body)
    }

    /// POST a JSON body to a path and decode the JSON response.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body is not JSON.
    pub async fn post_json(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");
        let status = resp.status();
        let body = resp.json().await.expect("Response body is JSON");
        (status, body)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Product ids of a JSON product list, in order.
#[must_use]
pub fn product_ids(products: &Value) -> Vec<String> {
    products
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|p| p.get("id").and_then(Value::as_str).map(ToOwned::to_owned))
                .collect()
        })
        .unwrap_or_default()
}
