//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// The request collides with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The supplied credentials were rejected.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The current session lacks a required permission.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// A storage or serialization failure.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
