//! JSON-file storage backend.
//!
//! The file holds a single JSON object mapping keys to string values. Every
//! call goes back to disk, so separate processes pointed at the same file see
//! each other's writes (last write wins).

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use super::{KeyValueStore, StorageError};

type Entries = BTreeMap<String, String>;

/// Durable key-value storage backed by one JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<Entries, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    /// Load for a write. A corrupt file is discarded and comes back as an
    /// empty map with the flag set, so the caller knows it must rewrite.
    fn load_for_write(&self) -> Result<(Entries, bool), StorageError> {
        match self.load() {
            Ok(entries) => Ok((entries, false)),
            Err(StorageError::Corrupt(msg)) => {
                tracing::warn!(
                    "Discarding corrupt storage file {}: {}",
                    self.path.display(),
                    msg
                );
                Ok((Entries::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn persist(&self, entries: &Entries) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Unavailable)?;
        let (mut entries, _) = self.load_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Unavailable)?;
        let (mut entries, discarded) = self.load_for_write()?;
        if entries.remove(key).is_none() && !discarded {
            return Ok(());
        }
        self.persist(&entries)
    }
}
