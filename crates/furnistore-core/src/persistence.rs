//! Write-through synchronization of store state into
//! key-value storage slots.
//!
//! The mirror is a side channel: failures are logged and swallowed so a
//! broken or full storage never takes a store down. The only time the mirror
//! is a source of truth is the one-time read at store construction.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::storage::SharedStorage;

/// Best-effort JSON mirror over an injected `KeyValueStorage`.
#[derive(Clone)]
pub struct PersistenceMirror {
    storage: SharedStorage,
}

impl std::fmt::Debug for PersistenceMirror {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceMirror").finish_non_exhaustive()
    }
}

impl PersistenceMirror {
    /// Creates a mirror writing into `storage`.
    #[must_use]
    pub fn new(storage: SharedStorage) -> Self {
        Self { storage }
    }

    /// Reads and deserializes `slot`.
    ///
    /// Returns `None` when the slot is absent, unreadable, or malformed. The
    /// latter two cases are logged.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, slot: &str) -> Option<T> {
        let raw = match self.storage.get(slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(slot, error = %e, "failed to read persisted slot");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(slot, "restored persisted slot");
                Some(value)
            }
            Err(e) => {
                warn!(slot, error = %e, "ignoring malformed persisted slot");
                None
            }
        }
    }

    /// Serializes `value` into `slot`. Failures are logged, not returned.
    pub fn save<T: Serialize + ?Sized>(&self, slot: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(slot, error = %e, "failed to serialize slot");
                return;
            }
        };
        if let Err(e) = self.storage.set(slot, &raw) {
            warn!(slot, error = %e, "failed to write persisted slot");
        }
    }

    /// Deletes `slot`. Failures are logged, not returned.
    pub fn remove(&self, slot: &str) {
        if let Err(e) = self.storage.delete(slot) {
            warn!(slot, error = %e, "failed to delete persisted slot");
        }
    }
}
