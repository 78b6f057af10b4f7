//! Shopper state stores.
//!
//! Both stores are plain synchronous data structures mutated through `&mut
//! self`. They never fail: lookups of missing entries are no-ops.

pub mod cart;
pub mod wishlist;

pub use cart::{CartLineItem, CartStore};
pub use wishlist::WishlistStore;
