//! One mission load cycle: cache lookup, fan-out fetch, normalization,
//! deduplication, and cache write-back.

use chrono::{DateTime, Utc};
use stardeck_cache::{read_fresh, write_json, CachePolicy, CacheStore, MISSIONS_CACHE_KEY};
use stardeck_core::{Mission, MissionRepository, SearchQuerySpec};

use crate::client::NasaClient;
use crate::error::NasaError;
use crate::fetch::fetch_queries;
use crate::normalize::dedup_missions;

/// Where the missions of a load cycle came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Cache,
    Network,
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Cache => write!(f, "cache"),
            DataSource::Network => write!(f, "network"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Skip the cache lookup and always hit the network.
    pub force_refresh: bool,
    pub cache_policy: CachePolicy,
    pub max_concurrent_queries: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            force_refresh: false,
            cache_policy: CachePolicy::missions_default(),
            max_concurrent_queries: 11,
        }
    }
}

#[derive(Debug)]
pub struct LoadOutcome {
    pub repository: MissionRepository,
    pub source: DataSource,
    /// Queries that failed during a network load. Always zero for cache hits.
    pub failed_queries: usize,
}

/// Runs a load cycle and returns the populated repository.
///
/// A fresh, non-empty cache entry short-circuits the network entirely. On a
/// network load each failed query contributes nothing; the cycle only fails
/// when no mission at all survives normalization. The cache is written only
/// after a successful network load.
///
/// # Errors
///
/// Returns [`NasaError::NoMissions`] when every query failed or returned
/// nothing usable.
pub async fn load_missions(
    client: &NasaClient,
    cache: &dyn CacheStore,
    specs: &[SearchQuerySpec],
    options: LoadOptions,
    now: DateTime<Utc>,
) -> Result<LoadOutcome, NasaError> {
    if options.force_refresh {
        tracing::info!("forced refresh, bypassing mission cache");
    } else if let Some(missions) =
        read_fresh::<Vec<Mission>>(cache, MISSIONS_CACHE_KEY, options.cache_policy, now)
            .filter(|m| !m.is_empty())
    {
        tracing::info!(count = missions.len(), "loaded missions from cache");
        return Ok(LoadOutcome {
            repository: MissionRepository::new(missions),
            source: DataSource::Cache,
            failed_queries: 0,
        });
    }

    let report = fetch_queries(client, specs, options.max_concurrent_queries).await;
    let failed_queries = report.failed_count();
    let total_queries = report.total();

    let missions = dedup_missions(report.outcomes);
    if missions.is_empty() {
        tracing::error!(failed_queries, total_queries, "load cycle produced no missions");
        return Err(NasaError::NoMissions {
            failed_queries,
            total_queries,
        });
    }

    if failed_queries > 0 {
        tracing::warn!(
            failed_queries,
            total_queries,
            "partial load, showing missions from successful queries"
        );
    }

    write_json(cache, MISSIONS_CACHE_KEY, &missions, now);
    tracing::info!(count = missions.len(), failed_queries, "loaded missions from network");

    Ok(LoadOutcome {
        repository: MissionRepository::new(missions),
        source: DataSource::Network,
        failed_queries,
    })
}
