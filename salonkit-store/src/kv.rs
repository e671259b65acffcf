//! The key/value contract and the never-failing JSON facade.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Errors a backend can produce. The [`Storage`] facade absorbs all of
/// them; they only reach callers that talk to a backend directly.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage document is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A synchronous string key/value store.
///
/// Implementations hold raw JSON strings and know nothing about the
/// types stored in them, mirroring the browser localStorage contract
/// the first release was written against.
pub trait KeyValueBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: String) -> Result<(), StoreError>;
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// JSON-encoding facade over a [`KeyValueBackend`].
///
/// Reads never fail: a missing key, a corrupt value or an unavailable
/// backend all degrade to the caller-supplied default. Writes never fail
/// the caller either; failures are logged and swallowed. Data loss on a
/// failed write is an accepted limitation of this prototype layer and
/// must become a surfaced error if the backend ever becomes a network
/// service.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn KeyValueBackend>,
}

impl Storage {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    /// Convenience constructor over a fresh [`MemoryBackend`].
    ///
    /// [`MemoryBackend`]: crate::memory::MemoryBackend
    pub fn in_memory() -> Self {
        Self::new(Arc::new(crate::memory::MemoryBackend::new()))
    }

    /// Read and decode `key`, or return `default`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                warn!(key, error = %e, "storage read failed, using default");
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "stored value is corrupt, using default");
                default
            }
        }
    }

    /// Encode and write `value` under `key`. Failures are logged only.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "failed to encode value, write dropped");
                return;
            }
        };

        if let Err(e) = self.backend.write(key, raw) {
            warn!(key, error = %e, "storage write failed, data not persisted");
        }
    }

    /// Delete `key`. Failures are logged only.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.backend.delete(key) {
            warn!(key, error = %e, "storage delete failed");
        }
    }
}
