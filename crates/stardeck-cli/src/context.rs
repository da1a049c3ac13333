//! Shared runtime state for config-backed commands.

use stardeck_cache::{
    CachePolicy, CacheStore, FileCacheStore, ASTRONOMY_CACHE_KEY, MISSIONS_CACHE_KEY,
};
use stardeck_core::{AppConfig, SearchQuerySpec};
use stardeck_nasa::{LoadOptions, LoadOutcome, NasaClient};

pub(crate) struct Context {
    pub(crate) config: AppConfig,
    pub(crate) client: NasaClient,
    pub(crate) cache: FileCacheStore,
    pub(crate) queries: Vec<SearchQuerySpec>,
}

impl Context {
    /// Builds the NASA client, the on-disk cache, and the query set.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed or the
    /// queries file cannot be loaded.
    pub(crate) fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let client = NasaClient::with_base_urls(
            &config.nasa_api_key,
            config.request_timeout_secs,
            &config.user_agent,
            &config.images_base_url,
            &config.apod_base_url,
        )
        .map_err(|e| anyhow::anyhow!("failed to build NASA client: {e}"))?;

        let queries = match &config.queries_path {
            Some(path) => stardeck_core::load_queries(path)?,
            None => stardeck_core::default_queries(),
        };

        let cache = FileCacheStore::new(config.cache_dir.clone());

        Ok(Self {
            config,
            client,
            cache,
            queries,
        })
    }

    pub(crate) fn load_options(&self, force_refresh: bool) -> LoadOptions {
        LoadOptions {
            force_refresh,
            cache_policy: mission_cache_policy(self.config.mission_cache_ttl_secs),
            max_concurrent_queries: self.config.max_concurrent_queries,
        }
    }

    /// Runs one mission load cycle against the configured API and cache.
    ///
    /// # Errors
    ///
    /// Returns an error if no missions could be loaded.
    pub(crate) async fn load(&self, force_refresh: bool) -> anyhow::Result<LoadOutcome> {
        let outcome = stardeck_nasa::load_missions(
            &self.client,
            &self.cache,
            &self.queries,
            self.load_options(force_refresh),
            chrono::Utc::now(),
        )
        .await?;

        if outcome.failed_queries > 0 {
            eprintln!(
                "warning: {} of {} queries failed; showing partial results",
                outcome.failed_queries,
                self.queries.len()
            );
        }
        Ok(outcome)
    }

    /// Removes both cache entries.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry exists but cannot be removed.
    pub(crate) fn clear_cache(&self) -> anyhow::Result<()> {
        for key in [MISSIONS_CACHE_KEY, ASTRONOMY_CACHE_KEY] {
            self.cache.clear(key)?;
        }
        println!("cleared cache in {}", self.cache.dir().display());
        Ok(())
    }
}

/// Rolling policy for the configured TTL, saturating on absurd values.
pub(crate) fn mission_cache_policy(ttl_secs: u64) -> CachePolicy {
    let secs = i64::try_from(ttl_secs).unwrap_or(i64::MAX);
    let ttl = chrono::Duration::try_seconds(secs).unwrap_or(chrono::Duration::MAX);
    CachePolicy::Rolling(ttl)
}
