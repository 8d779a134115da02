//! JSON-file backed implementation of the `KeyValueStorage` capability.
//!
//! Plays the role browser local storage plays for a client: a single
//! durable key-value namespace that survives restarts.

pub mod file_storage;
