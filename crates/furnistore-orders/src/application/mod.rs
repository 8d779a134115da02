//! Order application layer.

pub mod store;
