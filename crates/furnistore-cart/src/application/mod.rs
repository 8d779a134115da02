//! Cart application layer.

pub mod store;
