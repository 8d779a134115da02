//! Identifier generation abstraction.
//!
//! Stores never call `Uuid::new_v4()` directly so that tests can inject a
//! predictable sequence of identifiers.

use std::sync::Arc;

use uuid::Uuid;

/// Abstraction over identifier generation.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier.
    fn next_id(&self) -> Uuid;
}

/// An id generator handle shared between stores.
pub type SharedIdGenerator = Arc<dyn IdGenerator>;

/// Production generator backed by random (v4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
