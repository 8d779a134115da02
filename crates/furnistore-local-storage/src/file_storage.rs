//! `FileStorage`: every slot in one JSON object on disk.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use furnistore_core::error::DomainError;
use furnistore_core::storage::KeyValueStorage;
use tracing::debug;

/// Key-value storage persisted as a JSON object of `slot -> raw value`.
///
/// The whole object is rewritten on every `set` and `delete` through a
/// temporary file renamed over the original, so a crash mid-write leaves the
/// previous contents intact.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Opens the storage at `path`, creating parent directories. A missing
    /// file starts empty.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the file exists but cannot
    /// be read or is not a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error("create directory", parent, &e))?;
        }
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                DomainError::Infrastructure(format!(
                    "storage file '{}' is malformed: {e}",
                    path.display()
                ))
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(io_error("read", &path, &e)),
        };
        debug!(path = %path.display(), slots = entries.len(), "opened storage file");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, String>>, DomainError> {
        self.entries
            .lock()
            .map_err(|_| DomainError::Infrastructure("storage lock poisoned".into()))
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), DomainError> {
        let json = serde_json::to_vec_pretty(entries)
            .map_err(|e| DomainError::Infrastructure(format!("serialize storage: {e}")))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(|e| io_error("write", &tmp, &e))?;
        fs::rename(&tmp, &self.path).map_err(|e| io_error("replace", &self.path, &e))
    }
}

fn io_error(action: &str, path: &Path, err: &io::Error) -> DomainError {
    DomainError::Infrastructure(format!("failed to {action} '{}': {err}", path.display()))
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let mut entries = self.lock()?;
        let previous = entries.insert(key.to_owned(), value.to_owned());
        if let Err(e) = self.flush(&entries) {
            match previous {
                Some(previous) => entries.insert(key.to_owned(), previous),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), DomainError> {
        let mut entries = self.lock()?;
        let Some(previous) = entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.flush(&entries) {
            entries.insert(key.to_owned(), previous);
            return Err(e);
        }
        Ok(())
    }
}
