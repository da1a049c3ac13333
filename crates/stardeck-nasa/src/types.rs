//! NASA API response types.
//!
//! The image search API wraps results in a Collection+JSON envelope
//! (`{"collection": {"items": [...]}}`). Each item carries a `data` array of
//! metadata descriptors and a `links` array of asset links; only the first
//! element of each is ever used.

use serde::{Deserialize, Serialize};

/// Top-level envelope for `GET /search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub collection: Option<SearchCollection>,
}

/// Items are kept as raw JSON so one malformed item cannot fail the whole
/// page; callers decode each value individually. A missing or `null` list
/// means no results.
#[derive(Debug, Default, Deserialize)]
pub struct SearchCollection {
    #[serde(default)]
    pub items: Option<Vec<serde_json::Value>>,
}

/// A single search hit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub data: Vec<ItemData>,
    #[serde(default)]
    pub links: Vec<ItemLink>,
    /// URL of the item's full asset manifest.
    #[serde(default)]
    pub href: Option<String>,
}

/// Metadata descriptor for a search hit. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemData {
    #[serde(default)]
    pub nasa_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub center: Option<String>,
    #[serde(default)]
    pub photographer: Option<String>,
    #[serde(default)]
    pub secondary_creator: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
}

/// An asset link; the first one is the preview image.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemLink {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub rel: Option<String>,
    #[serde(default)]
    pub render: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApodMediaType {
    Image,
    Video,
    #[default]
    #[serde(other)]
    Other,
}

/// Astronomy Picture of the Day, as returned by `GET /planetary/apod`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apod {
    pub title: String,
    /// Publication date, `"YYYY-MM-DD"`.
    pub date: String,
    pub explanation: String,
    /// Image URL, or an embeddable player URL when `media_type` is video.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub media_type: ApodMediaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
}
