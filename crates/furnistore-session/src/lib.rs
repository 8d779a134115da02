//! Admin session store for the FurniStore console.
//!
//! Responsible for admin sign-in, the signed-in user's permissions,
//! store settings and the dashboard statistics shown after sign-in.

pub mod application;
pub mod domain;
