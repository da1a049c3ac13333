//! Typed reads and writes over a [`CacheStore`].

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::freshness::CachePolicy;
use crate::store::CacheStore;

/// Reads `key` and decodes it as `T` if the entry satisfies `policy` at `now`.
///
/// Stale entries and payloads that no longer decode as `T` are misses.
pub fn read_fresh<T: DeserializeOwned>(
    store: &dyn CacheStore,
    key: &str,
    policy: CachePolicy,
    now: DateTime<Utc>,
) -> Option<T> {
    let entry = store.read(key)?;

    if !policy.allows(entry.written_at, now) {
        tracing::debug!(key, written_at = %entry.written_at, "cache entry expired");
        return None;
    }

    match serde_json::from_value::<T>(entry.payload) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "cached payload has unexpected shape, treating as miss");
            None
        }
    }
}

/// Serializes `value` and stores it under `key`, stamped with `now`.
///
/// Serialization failures are logged and dropped like any other write failure.
pub fn write_json<T: Serialize + ?Sized>(
    store: &dyn CacheStore,
    key: &str,
    value: &T,
    now: DateTime<Utc>,
) {
    match serde_json::to_value(value) {
        Ok(payload) => store.write(key, payload, now),
        Err(e) => tracing::warn!(key, error = %e, "failed to serialize cache payload"),
    }
}
