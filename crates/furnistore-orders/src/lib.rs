//! Order store for the FurniStore storefront.
//!
//! Turns a cart into an order at checkout and tracks each order through
//! fulfilment.

pub mod application;
pub mod domain;
