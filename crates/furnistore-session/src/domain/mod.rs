//! Session domain model.

pub mod aggregates;
pub mod commands;
pub mod credentials;
pub mod permissions;
pub mod stats;
