//! Admin notification store for the FurniStore console.
//!
//! The admin console's notification feed, newest first, with read tracking.

pub mod application;
pub mod domain;
