//! Daily astronomy picture with a once-per-local-day cache.

use chrono::{DateTime, Utc};
use stardeck_cache::{read_fresh, write_json, CachePolicy, CacheStore, ASTRONOMY_CACHE_KEY};

use crate::client::NasaClient;
use crate::error::NasaError;
use crate::pipeline::DataSource;
use crate::types::Apod;

#[derive(Debug, Clone)]
pub struct ApodOutcome {
    pub apod: Apod,
    pub source: DataSource,
}

/// Returns today's picture, from cache when it was written earlier on the
/// same local calendar day.
///
/// # Errors
///
/// Propagates any [`NasaError`] from the APOD request. Nothing is cached on
/// failure.
pub async fn load_apod(
    client: &NasaClient,
    cache: &dyn CacheStore,
    now: DateTime<Utc>,
    force_refresh: bool,
) -> Result<ApodOutcome, NasaError> {
    if !force_refresh {
        if let Some(apod) =
            read_fresh::<Apod>(cache, ASTRONOMY_CACHE_KEY, CachePolicy::SameLocalDay, now)
        {
            tracing::debug!(date = %apod.date, "astronomy picture served from cache");
            return Ok(ApodOutcome {
                apod,
                source: DataSource::Cache,
            });
        }
    }

    let apod = client.fetch_apod().await?;
    write_json(cache, ASTRONOMY_CACHE_KEY, &apod, now);
    tracing::info!(date = %apod.date, title = %apod.title, "fetched astronomy picture");

    Ok(ApodOutcome {
        apod,
        source: DataSource::Network,
    })
}
