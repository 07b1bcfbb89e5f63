//! Persisted records: URL rows and collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored shorten event.
///
/// There is deliberately no uniqueness constraint on `original_url`: the same
/// URL may be saved repeatedly under different aliases or collections. The
/// `custom_alias`, when present, was unique within the external shortening
/// service at creation time, not within local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// Row id assigned by the store
    pub id: i64,
    /// The URL that was shortened
    pub original_url: String,
    /// The shortened URL returned by the service
    pub shortened_url: String,
    /// Custom alias, if one was requested
    pub custom_alias: Option<String>,
    /// Scraped page title, if metadata was available
    pub title: Option<String>,
    /// Scraped page description, if metadata was available
    pub description: Option<String>,
    /// Tags applied to this record
    pub tags: Vec<String>,
    /// Collection this record belongs to, if any
    pub collection_name: Option<String>,
    /// Name of the shortening service that produced `shortened_url`
    pub service_used: Option<String>,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// Click counter; written at creation, never incremented
    pub click_count: i64,
    /// Safety flag from the heuristic check at save time
    pub is_safe: bool,
    /// Free-form metadata blob
    pub metadata: serde_json::Value,
}

/// Input for saving a new URL record.
#[derive(Debug, Clone, Default)]
pub struct NewUrl {
    /// The URL that was shortened
    pub original_url: String,
    /// The shortened URL returned by the service
    pub shortened_url: String,
    /// Custom alias, if one was requested
    pub custom_alias: Option<String>,
    /// Scraped page title
    pub title: Option<String>,
    /// Scraped page description
    pub description: Option<String>,
    /// Tags to apply
    pub tags: Vec<String>,
    /// Collection to file the record under
    pub collection_name: Option<String>,
    /// Shortening service name
    pub service_used: Option<String>,
    /// Safety flag; defaults to true when unchecked
    pub is_safe: bool,
    /// Free-form metadata blob
    pub metadata: serde_json::Value,
}

impl NewUrl {
    /// Create a new input with the two required URLs; everything else empty,
    /// `is_safe` defaulting to true.
    pub fn new(original_url: impl Into<String>, shortened_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            shortened_url: shortened_url.into(),
            is_safe: true,
            metadata: serde_json::Value::Null,
            ..Default::default()
        }
    }
}

/// A named grouping of URL records, unique by name.
///
/// Creation is idempotent-by-rejection: inserting an existing name fails with
/// a duplicate error rather than upserting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Row id assigned by the store
    pub id: i64,
    /// Unique collection name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// When the collection was created
    pub created_at: DateTime<Utc>,
}

/// Split a comma-separated tag string into trimmed, non-empty tags.
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
