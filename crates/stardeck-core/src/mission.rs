use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::destination::Destination;

pub const UNKNOWN_TITLE: &str = "Unknown Mission";
pub const UNKNOWN_DESCRIPTION: &str = "No description available.";
pub const UNKNOWN_DATE: &str = "Unknown";
pub const DEFAULT_CENTER: &str = "NASA";
pub const DEFAULT_PHOTOGRAPHER: &str = "NASA";
pub const DEFAULT_LOCATION: &str = "Space";

/// A space-mission image record, normalized from the NASA media search API.
///
/// Serialized field names are camelCase so cached payloads keep the same
/// shape across releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    /// Provider-assigned `nasa_id`; unique within a repository.
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Creation timestamp exactly as the provider returned it, or `"Unknown"`.
    pub date_created: String,
    pub center: String,
    pub image_url: String,
    pub photographer: String,
    pub location: String,
    pub destination: Destination,
}

impl Mission {
    /// Year the asset was created, if `date_created` is parseable.
    ///
    /// Accepts RFC 3339 timestamps (`2021-02-18T00:00:00Z`) and bare
    /// `YYYY-MM-DD` prefixes.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        let raw = self.date_created.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.year());
        }
        raw.get(..10)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
            .map(|d| d.year())
    }

    /// `true` when the location carries more than the generic fallback.
    #[must_use]
    pub fn has_specific_location(&self) -> bool {
        self.location != DEFAULT_LOCATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mission_with_date(date_created: &str) -> Mission {
        Mission {
            id: "PIA00001".to_owned(),
            title: "Test".to_owned(),
            description: UNKNOWN_DESCRIPTION.to_owned(),
            keywords: vec![],
            date_created: date_created.to_owned(),
            center: DEFAULT_CENTER.to_owned(),
            image_url: "https://images-assets.nasa.gov/image/PIA00001/PIA00001~thumb.jpg".to_owned(),
            photographer: DEFAULT_PHOTOGRAPHER.to_owned(),
            location: DEFAULT_LOCATION.to_owned(),
            destination: Destination::Space,
        }
    }

    #[test]
    fn year_from_rfc3339() {
        assert_eq!(mission_with_date("1969-07-20T00:00:00Z").year(), Some(1969));
    }

    #[test]
    fn year_from_date_prefix() {
        assert_eq!(mission_with_date("2012-08-06T05:17:57").year(), Some(2012));
    }

    #[test]
    fn year_unknown_sentinel() {
        assert_eq!(mission_with_date(UNKNOWN_DATE).year(), None);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let value = serde_json::to_value(mission_with_date("2001-01-01T00:00:00Z")).unwrap();
        assert!(value.get("imageUrl").is_some());
        assert!(value.get("dateCreated").is_some());
        assert_eq!(value["destination"], "Space");
    }

    #[test]
    fn generic_location_is_not_specific() {
        let mut mission = mission_with_date(UNKNOWN_DATE);
        assert!(!mission.has_specific_location());
        mission.location = "Kennedy Space Center".to_owned();
        assert!(mission.has_specific_location());
    }
}
