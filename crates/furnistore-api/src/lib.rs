//! FurniStore API library: configuration, shared state and routers.
//!
//! The binary in `main.rs` wires these together; integration tests build the
//! same router over in-memory storage.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
