//! Wishlist store for the FurniStore storefront.
//!
//! Products the shopper saved for later, one entry per product.

pub mod application;
pub mod domain;
