//! Time-boxed local cache for mission and daily-picture payloads.
//!
//! Reads never fail: a missing, unreadable, or corrupt entry is a miss.
//! Freshness is enforced by the caller through [`CachePolicy`], not by the
//! store, which has no eviction and no size bound.

pub mod freshness;
pub mod store;
pub mod typed;

use thiserror::Error;

pub use freshness::{is_fresh, is_same_day, CachePolicy};
pub use store::{CacheEntry, CacheStore, FileCacheStore, MemoryCacheStore};
pub use typed::{read_fresh, write_json};

/// Key holding the serialized mission collection.
pub const MISSIONS_CACHE_KEY: &str = "missionsCache";
/// Key holding the daily astronomy picture record.
pub const ASTRONOMY_CACHE_KEY: &str = "astronomyCache";

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid cache key '{0}'")]
    InvalidKey(String),
}
