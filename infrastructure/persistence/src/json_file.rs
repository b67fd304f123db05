use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

use business::domain::errors::RepositoryError;
use business::domain::storage::KeyValueStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store.read_error")]
    ReadError(#[source] std::io::Error),
    #[error("store.malformed_file")]
    MalformedFile(#[source] serde_json::Error),
    #[error("store.serialization_error")]
    SerializationError(#[source] serde_json::Error),
    #[error("store.write_error")]
    WriteError(#[source] std::io::Error),
    #[error("store.lock_poisoned")]
    LockPoisoned,
}

/// Key-value store kept as a single JSON object on disk.
///
/// The file is read once on open; every `set` rewrites it through a
/// temporary sibling followed by a rename.
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store; an
    /// unreadable or malformed file is also treated as empty and will be
    /// replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = ?e,
                    "Ignoring unreadable store file"
                );
                BTreeMap::new()
            }
        };
        tracing::debug!(path = %path.display(), keys = entries.len(), "Opened store");

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::LockPoisoned)?;

        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        write_entries(&self.path, &next)?;

        *entries = next;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        self.try_set(key, value).map_err(|e| {
            let detail = match std::error::Error::source(&e) {
                Some(source) => format!("{} ({}): {}", e, self.path.display(), source),
                None => format!("{} ({})", e, self.path.display()),
            };
            RepositoryError::persistence(detail)
        })
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
    match fs::read_to_string(path) {
        Ok(raw) => serde_json::from_str(&raw).map_err(StoreError::MalformedFile),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
        Err(e) => Err(StoreError::ReadError(e)),
    }
}

fn write_entries(path: &Path, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
    let raw = serde_json::to_string_pretty(entries).map_err(StoreError::SerializationError)?;

    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    let temp = PathBuf::from(temp);

    fs::write(&temp, raw).map_err(StoreError::WriteError)?;
    fs::rename(&temp, path).map_err(|e| {
        let _ = fs::remove_file(&temp);
        StoreError::WriteError(e)
    })
}
