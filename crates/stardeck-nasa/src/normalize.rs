//! Normalization from raw search items to [`stardeck_core::Mission`], and
//! first-seen deduplication across query results.

use std::collections::HashSet;

use stardeck_core::mission::{
    DEFAULT_CENTER, DEFAULT_LOCATION, DEFAULT_PHOTOGRAPHER, UNKNOWN_DATE, UNKNOWN_DESCRIPTION,
    UNKNOWN_TITLE,
};
use stardeck_core::{infer_destination, Destination, Mission};

use crate::error::NasaError;
use crate::fetch::QueryOutcome;
use crate::types::SearchItem;

/// Normalizes a raw [`SearchItem`] into a [`Mission`].
///
/// `target` is the destination of the query that produced the item; when
/// `None` the destination is inferred from the title and keywords.
///
/// # Errors
///
/// Returns [`NasaError::Normalization`] if the item has no metadata
/// descriptor, no preview link, or no `nasa_id`.
pub fn normalize_item(
    item: SearchItem,
    target: Option<Destination>,
) -> Result<Mission, NasaError> {
    let item_ref = item.href.clone().unwrap_or_else(|| "<no href>".to_owned());

    let Some(data) = item.data.into_iter().next() else {
        return Err(NasaError::Normalization {
            item: item_ref,
            reason: "item has no metadata descriptor".into(),
        });
    };

    let Some(image_url) = item
        .links
        .into_iter()
        .next()
        .and_then(|link| non_empty(link.href))
    else {
        return Err(NasaError::Normalization {
            item: item_ref,
            reason: "item has no preview link".into(),
        });
    };

    let Some(id) = non_empty(data.nasa_id) else {
        return Err(NasaError::Normalization {
            item: item_ref,
            reason: "item has no nasa_id".into(),
        });
    };

    let title = non_empty(data.title).unwrap_or_else(|| UNKNOWN_TITLE.to_owned());
    let keywords: Vec<String> = data
        .keywords
        .unwrap_or_default()
        .into_iter()
        .filter(|k| !k.trim().is_empty())
        .collect();
    let destination = target.unwrap_or_else(|| infer_destination(&title, &keywords));

    Ok(Mission {
        id,
        title,
        description: non_empty(data.description)
            .unwrap_or_else(|| UNKNOWN_DESCRIPTION.to_owned()),
        keywords,
        date_created: non_empty(data.date_created).unwrap_or_else(|| UNKNOWN_DATE.to_owned()),
        center: non_empty(data.center).unwrap_or_else(|| DEFAULT_CENTER.to_owned()),
        image_url,
        photographer: non_empty(data.photographer)
            .or_else(|| non_empty(data.secondary_creator))
            .unwrap_or_else(|| DEFAULT_PHOTOGRAPHER.to_owned()),
        location: non_empty(data.location).unwrap_or_else(|| DEFAULT_LOCATION.to_owned()),
        destination,
    })
}

/// Normalizes every item across `outcomes` and keeps the first mission seen
/// for each id.
///
/// Outcomes are processed in query order, items in result order. A later
/// duplicate is discarded entirely, destination included. Malformed items are
/// logged and skipped.
#[must_use]
pub fn dedup_missions(outcomes: Vec<QueryOutcome>) -> Vec<Mission> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut missions: Vec<Mission> = Vec::new();

    for outcome in outcomes {
        let target = outcome.spec.target;
        for item in outcome.items {
            let mission = match normalize_item(item, target) {
                Ok(m) => m,
                Err(e) => {
                    tracing::debug!(query = %outcome.spec.query, error = %e, "skipping malformed item");
                    continue;
                }
            };

            if seen.insert(mission.id.clone()) {
                missions.push(mission);
            } else {
                tracing::debug!(
                    id = %mission.id,
                    query = %outcome.spec.query,
                    "duplicate mission id, keeping first occurrence"
                );
            }
        }
    }

    missions
}

/// Treats empty or whitespace-only strings as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
