//! Cart domain model.

pub mod aggregates;
pub mod commands;
