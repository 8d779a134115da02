//! Wishlist application layer.

pub mod store;
