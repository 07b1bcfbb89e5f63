//! Trait seams between the layers.
//!
//! `UrlStore` is implemented by the SQLite store; `UrlToolkit` by the real
//! tool suite and by test mocks. Both use an associated error type so the
//! domain crate stays free of infrastructure error types.

use crate::record::{Collection, NewUrl, UrlRecord};
use crate::report::{
    BatchReport, CollectionListing, CollectionReport, ExpansionReport, MetadataReport, QrReport,
    SafetyReport, ShortenReport, UrlListing, ValidationReport,
};
use async_trait::async_trait;

/// Filter for listing stored URLs.
#[derive(Debug, Clone)]
pub struct UrlFilter {
    /// Only records in this collection
    pub collection: Option<String>,
    /// Only records carrying all of these tags
    pub tags: Vec<String>,
    /// Maximum number of records to return
    pub limit: usize,
}

impl Default for UrlFilter {
    fn default() -> Self {
        Self { collection: None, tags: Vec::new(), limit: 100 }
    }
}

/// Persistence operations for URL records and collections.
pub trait UrlStore {
    /// Error type produced by the implementation
    type Error;

    /// Save a new URL record, returning its row id.
    fn save_url(&mut self, url: NewUrl) -> Result<i64, Self::Error>;

    /// List records matching the filter, newest first.
    fn list_urls(&self, filter: &UrlFilter) -> Result<Vec<UrlRecord>, Self::Error>;

    /// Search records by title, description, or original URL, newest first.
    fn search_urls(&self, term: &str, limit: usize) -> Result<Vec<UrlRecord>, Self::Error>;

    /// Create a collection; fails with a duplicate error when the name exists.
    fn create_collection(&mut self, name: &str, description: Option<&str>)
        -> Result<i64, Self::Error>;

    /// List all collections, newest first.
    fn list_collections(&self) -> Result<Vec<Collection>, Self::Error>;
}

/// The eleven URL tool operations.
///
/// Every method returns a typed report; failures that the operation itself
/// models (an invalid URL under validation, a warning-laden safety check) are
/// report states, while transport-level failures are errors. Callers in the
/// workflow convert errors to data values at the call site.
#[async_trait]
pub trait UrlToolkit: Send + Sync {
    /// Error type produced by the implementation
    type Error: std::error::Error + Send + Sync + 'static;

    /// Check a URL for well-formedness and reachability.
    async fn validate_url(&self, url: &str) -> Result<ValidationReport, Self::Error>;

    /// Shorten one URL, optionally with a custom alias, and persist the record.
    async fn shorten_url(
        &self,
        url: &str,
        custom_alias: Option<&str>,
        collection_name: Option<&str>,
        tags: Option<&str>,
    ) -> Result<ShortenReport, Self::Error>;

    /// Shorten a newline/comma-joined list of URLs (at most 20 per call).
    async fn shorten_url_batch(
        &self,
        urls: &str,
        collection_name: Option<&str>,
        tags: Option<&str>,
    ) -> Result<BatchReport, Self::Error>;

    /// Fetch a page and scrape its metadata.
    async fn get_url_metadata(&self, url: &str) -> Result<MetadataReport, Self::Error>;

    /// Run the heuristic safety check.
    async fn check_url_safety(&self, url: &str) -> Result<SafetyReport, Self::Error>;

    /// Generate a QR code for a URL.
    async fn generate_qr_code(&self, url: &str, size: Option<u32>)
        -> Result<QrReport, Self::Error>;

    /// Follow a shortened URL to its final destination.
    async fn expand_url(&self, shortened_url: &str) -> Result<ExpansionReport, Self::Error>;

    /// Create a collection; reports (not errors) when the name already exists.
    async fn create_url_collection(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<CollectionReport, Self::Error>;

    /// List stored URLs with optional collection/tag filters.
    async fn list_my_urls(
        &self,
        collection: Option<&str>,
        tags: Option<&str>,
        limit: usize,
    ) -> Result<UrlListing, Self::Error>;

    /// Search stored URLs by term.
    async fn search_urls(&self, term: &str, limit: usize) -> Result<UrlListing, Self::Error>;

    /// List all collections.
    async fn list_collections(&self) -> Result<CollectionListing, Self::Error>;
}
