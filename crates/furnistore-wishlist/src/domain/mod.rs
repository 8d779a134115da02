//! Wishlist domain model.

pub mod aggregates;
