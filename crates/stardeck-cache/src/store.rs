use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CacheError;

/// A cached payload plus the instant it was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    pub payload: serde_json::Value,
    pub written_at: DateTime<Utc>,
}

/// Key/value store backing the cache.
///
/// `read` and `write` never surface errors: an unavailable or corrupt store
/// behaves like an empty one.
pub trait CacheStore: Send + Sync {
    fn read(&self, key: &str) -> Option<CacheEntry>;

    fn write(&self, key: &str, payload: serde_json::Value, written_at: DateTime<Utc>);

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backing store refuses the removal.
    fn clear(&self, key: &str) -> Result<(), CacheError>;
}

/// One JSON file per key under a cache directory.
#[derive(Debug, Clone)]
pub struct FileCacheStore {
    dir: PathBuf,
}

impl FileCacheStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, CacheError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(CacheError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn try_write(&self, key: &str, entry: &CacheEntry) -> Result<(), CacheError> {
        let path = self.entry_path(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|e| io_error(&self.dir, e))?;

        // Write-then-rename so a reader never sees a half-written file.
        let tmp = path.with_extension("json.tmp");
        let body = serde_json::to_vec(entry).map_err(|e| io_error(&path, e.into()))?;
        std::fs::write(&tmp, body).map_err(|e| io_error(&tmp, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| io_error(&path, e))?;
        Ok(())
    }
}

fn io_error(path: &Path, source: std::io::Error) -> CacheError {
    CacheError::Io {
        path: path.display().to_string(),
        source,
    }
}

impl CacheStore for FileCacheStore {
    fn read(&self, key: &str) -> Option<CacheEntry> {
        let path = match self.entry_path(key) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(key, error = %e, "cache read skipped");
                return None;
            }
        };

        let raw = match std::fs::read(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(key, "cache miss");
                return None;
            }
            Err(e) => {
                tracing::warn!(key, path = %path.display(), error = %e, "cache unreadable, treating as miss");
                return None;
            }
        };

        match serde_json::from_slice::<CacheEntry>(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(key, path = %path.display(), error = %e, "corrupt cache entry, treating as miss");
                None
            }
        }
    }

    fn write(&self, key: &str, payload: serde_json::Value, written_at: DateTime<Utc>) {
        let entry = CacheEntry {
            payload,
            written_at,
        };
        if let Err(e) = self.try_write(key, &entry) {
            tracing::warn!(key, error = %e, "cache write failed");
        }
    }

    fn clear(&self, key: &str) -> Result<(), CacheError> {
        let path = self.entry_path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&path, e)),
        }
    }
}

/// Process-local store; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCacheStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryCacheStore {
    fn read(&self, key: &str) -> Option<CacheEntry> {
        // A poisoned lock only means another writer panicked; the map is still usable.
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.get(key).cloned()
    }

    fn write(&self, key: &str, payload: serde_json::Value, written_at: DateTime<Utc>) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.insert(
            key.to_owned(),
            CacheEntry {
                payload,
                written_at,
            },
        );
    }

    fn clear(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}
