//! Concurrent fan-out of the configured search queries.

use futures::stream::{self, StreamExt};
use stardeck_core::SearchQuerySpec;

use crate::client::NasaClient;
use crate::types::SearchItem;

/// Result of one search query.
///
/// A failed query carries no items and the rendered error; it never aborts
/// the other queries.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub spec: SearchQuerySpec,
    /// At most `spec.limit` items, in API result order.
    pub items: Vec<SearchItem>,
    pub error: Option<String>,
}

impl QueryOutcome {
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// All query outcomes, in the same order as the input specs.
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    pub outcomes: Vec<QueryOutcome>,
}

impl FetchReport {
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}

/// Issues one search per spec with at most `max_concurrent` requests in
/// flight.
///
/// Outcomes keep input order regardless of completion order, so
/// deduplication downstream is deterministic.
pub async fn fetch_queries(
    client: &NasaClient,
    specs: &[SearchQuerySpec],
    max_concurrent: usize,
) -> FetchReport {
    let outcomes: Vec<QueryOutcome> = stream::iter(specs.iter().cloned())
        .map(|spec| async move {
            match client.search_images(&spec.query, spec.limit).await {
                Ok(items) => {
                    tracing::debug!(query = %spec.query, count = items.len(), "query fetched");
                    QueryOutcome {
                        spec,
                        items,
                        error: None,
                    }
                }
                Err(e) => {
                    tracing::warn!(query = %spec.query, error = %e, "search query failed");
                    QueryOutcome {
                        spec,
                        items: Vec::new(),
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .buffered(max_concurrent.max(1))
        .collect()
        .await;

    FetchReport { outcomes }
}
