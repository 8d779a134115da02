//! Predictable `IdGenerator` implementation for tests.

use std::sync::atomic::{AtomicU64, Ordering};

use furnistore_core::id::IdGenerator;
use uuid::Uuid;

/// Hands out `00000000-0000-0000-0000-000000000001`, `...0002`, and so on.
#[derive(Debug, Default)]
pub struct SequenceIdGenerator {
    next: AtomicU64,
}

impl SequenceIdGenerator {
    /// Creates a generator whose first id is `...0001`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id the n-th call (1-based) produces.
    #[must_use]
    pub fn nth(n: u64) -> Uuid {
        Uuid::from_u128(u128::from(n))
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> Uuid {
        Self::nth(self.next.fetch_add(1, Ordering::Relaxed) + 1)
    }
}
