//! Shared capabilities and value types.
//!
//! This crate defines the injected capabilities every store depends on
//! (clock, id generation, key-value storage), the persistence mirror built
//! on top of storage, and the product snapshot shared by cart, wishlist
//! and orders. It contains no store logic.

pub mod clock;
pub mod command;
pub mod error;
pub mod id;
pub mod persistence;
pub mod product;
pub mod storage;
