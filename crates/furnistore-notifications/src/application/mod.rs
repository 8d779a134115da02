//! Notification application layer.

pub mod store;
