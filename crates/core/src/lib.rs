//! Elegance Core - Shared domain types.
//!
//! This crate provides the types used by the storefront library and binary:
//! products, categories, prices, identifiers and contact details.
//!
//! # Architecture
//!
//! The core crate contains only types and their invariants - no I/O, no
//! HTTP, no global state. Catalog loading, the cart and wishlist stores and
//! the filter pipeline live in `elegance-storefront`.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, emails, plus the
//!   [`Product`] record and its [`Category`]

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
