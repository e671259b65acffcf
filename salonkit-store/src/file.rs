//! Single-document JSON file backend.
//!
//! The on-disk unit is one JSON object mapping keys to their raw JSON
//! values, rewritten in full on every write. That matches the browser
//! localStorage model the first release ran on: small per-tenant
//! datasets, one writer, synchronous calls.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::warn;

use crate::kv::{KeyValueBackend, StoreError};

pub struct JsonFileBackend {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl JsonFileBackend {
    /// Open (or create on first write) the document at `path`.
    ///
    /// A missing file is an empty store. A corrupt file is treated as
    /// empty too, with a warning; the next write replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    fn load(path: &Path) -> HashMap<String, String> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read store, starting empty");
                return HashMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "store document is corrupt, starting empty");
                HashMap::new()
            }
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueBackend for JsonFileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn write(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value);
        self.persist(&entries)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write();
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("salonkit-{}-{}.json", name, uuid::Uuid::new_v4()))
    }

    #[test]
    fn survives_reopen() {
        let path = scratch_path("reopen");

        let backend = JsonFileBackend::open(&path);
        backend.write("alpha", "\"one\"".to_string()).unwrap();
        backend.write("beta", "\"two\"".to_string()).unwrap();
        drop(backend);

        let reopened = JsonFileBackend::open(&path);
        assert_eq!(reopened.read("alpha").unwrap().as_deref(), Some("\"one\""));
        assert_eq!(reopened.read("beta").unwrap().as_deref(), Some("\"two\""));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_document_starts_empty() {
        let path = scratch_path("corrupt");
        fs::write(&path, "][ not json").unwrap();

        let backend = JsonFileBackend::open(&path);
        assert_eq!(backend.read("anything").unwrap(), None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn delete_removes_from_disk() {
        let path = scratch_path("delete");

        let backend = JsonFileBackend::open(&path);
        backend.write("key", "1".to_string()).unwrap();
        backend.delete("key").unwrap();
        drop(backend);

        let reopened = JsonFileBackend::open(&path);
        assert_eq!(reopened.read("key").unwrap(), None);

        let _ = fs::remove_file(&path);
    }
}
