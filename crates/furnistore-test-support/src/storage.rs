//! Mock `KeyValueStorage` implementations for tests.

use std::sync::Mutex;

use furnistore_core::error::DomainError;
use furnistore_core::storage::{InMemoryStorage, KeyValueStorage};

/// A storage operation observed by `RecordingStorage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageOp {
    /// `set(key, value)` was called.
    Set(String, String),
    /// `delete(key)` was called.
    Delete(String),
}

/// An in-memory storage that records every `set` and `delete` call.
#[derive(Debug, Default)]
pub struct RecordingStorage {
    inner: InMemoryStorage,
    ops: Mutex<Vec<StorageOp>>,
}

impl RecordingStorage {
    /// Creates an empty recording storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recording storage pre-populated with raw slot values. The
    /// seed writes are not recorded.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            inner: InMemoryStorage::with_entries(entries),
            ops: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all recorded writes and deletes.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn ops(&self) -> Vec<StorageOp> {
        self.ops.lock().unwrap().clone()
    }

    /// Returns the current raw value of `key`.
    ///
    /// # Panics
    ///
    /// Panics if the inner storage is poisoned.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.get(key).unwrap()
    }

    /// Returns true if `key` currently holds a value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains(key)
    }
}

impl KeyValueStorage for RecordingStorage {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.ops
            .lock()
            .unwrap()
            .push(StorageOp::Set(key.to_owned(), value.to_owned()));
        self.inner.set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), DomainError> {
        self.ops
            .lock()
            .unwrap()
            .push(StorageOp::Delete(key.to_owned()));
        self.inner.delete(key)
    }
}

/// A storage that fails every call, like a browser storage over quota.
/// Useful for testing that stores keep working when persistence breaks.
#[derive(Debug)]
pub struct FailingStorage;

impl KeyValueStorage for FailingStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, DomainError> {
        Err(DomainError::Infrastructure("storage unavailable".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("quota exceeded".into()))
    }

    fn delete(&self, _key: &str) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("storage unavailable".into()))
    }
}
