//! Shopping cart store for the FurniStore storefront.
//!
//! Holds the shopper's line items keyed by product and selected variant,
//! keeps the cart total and item count derived from them, and mirrors the
//! cart into the `furnistore.cart` storage slot.

pub mod application;
pub mod domain;
