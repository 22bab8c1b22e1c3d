//! Key-value storage backends for client-side persistence.
//!
//! The session store only ever talks to a [`KeyValueStore`], so it can run
//! against a JSON file, an in-memory map, or a backend that is switched off.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::Arc;

/// Failure reported by a storage backend.
#[derive(Debug)]
pub enum StorageError {
    /// The backend is disabled or cannot be reached.
    Unavailable,
    /// Reading or writing the backing medium failed.
    Io(std::io::Error),
    /// The backing medium holds something that is not a key-value map.
    Corrupt(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "storage unavailable"),
            StorageError::Io(err) => write!(f, "storage I/O failed: {}", err),
            StorageError::Corrupt(msg) => write!(f, "storage corrupt: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err)
    }
}

/// Synchronous string key-value storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Backend that rejects every call, used when persistence is turned off.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Which backend to build from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File(std::path::PathBuf),
    Disabled,
}

/// Build the configured backend.
pub fn open(backend: &StorageBackend) -> Arc<dyn KeyValueStore> {
    match backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File(path) => Arc::new(FileStore::new(path.clone())),
        StorageBackend::Disabled => Arc::new(UnavailableStore),
    }
}
