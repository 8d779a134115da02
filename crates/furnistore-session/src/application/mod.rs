//! Session application layer.

pub mod store;
