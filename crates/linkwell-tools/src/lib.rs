//! Linkwell URL Tools
//!
//! The eleven URL tool operations behind the agent-tool server and the
//! workflow layer: shortening (with a multi-service fallback chain), format
//! and reachability validation, metadata scraping, a heuristic safety check,
//! QR code generation, shortened-URL expansion, and store-backed listings.
//!
//! Every operation returns a typed report from `linkwell-domain`; the text
//! rendering lives on the reports themselves. Transport-level failures
//! surface as [`ToolError`].

#![warn(missing_docs)]

mod expand;
mod listing;
mod metadata;
mod qr;
mod safety;
mod shorten;
mod validate;

use linkwell_domain::traits::UrlToolkit;
use linkwell_domain::{
    BatchReport, CollectionListing, CollectionReport, ExpansionReport, MetadataReport, QrReport,
    SafetyReport, ShortenReport, UrlListing, ValidationReport,
};
use linkwell_store::{SqliteStore, StoreError};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use thiserror::Error;

/// Maximum number of URLs accepted by one batch shorten call.
pub const BATCH_MAX_URLS: usize = 20;

// The original tool layer presented a browser user agent so that pages
// return their full metadata markup.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Errors produced by the tool operations
#[derive(Error, Debug)]
pub enum ToolError {
    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Requested custom alias is already in use at the shortening service
    #[error("Custom alias '{0}' already exists. Please choose a different alias.")]
    AliasTaken(String),

    /// Every service in the fallback chain failed
    #[error("Unable to shorten URL. All services failed. Last error: {0}")]
    AllServicesFailed(String),

    /// Batch call exceeded the per-call URL limit
    #[error("Batch limited to {max} URLs per call (got {count})")]
    BatchTooLarge {
        /// Number of URLs submitted
        count: usize,
        /// The per-call limit
        max: usize,
    },

    /// Batch call contained no URLs
    #[error("No URLs provided")]
    EmptyBatch,

    /// A service answered with an unusable response
    #[error("Service error: {0}")]
    Service(String),

    /// QR code encoding failed
    #[error("QR encoding failed: {0}")]
    Qr(String),

    /// Storage failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Endpoint and timeout configuration for the tool suite.
///
/// The shortening-service endpoints are overridable so tests can point the
/// chain at a local mock server.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// TinyURL create endpoint (plain-text response)
    pub tinyurl_api: String,
    /// Chilp.it create endpoint (plain-text response)
    pub chilpit_api: String,
    /// V.gd create endpoint (plain text, or JSON for custom aliases)
    pub vgd_api: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            tinyurl_api: "https://tinyurl.com/api-create.php".to_string(),
            chilpit_api: "http://chilp.it/api.php".to_string(),
            vgd_api: "https://v.gd/create.php".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// The URL tool suite.
///
/// Owns one HTTP client and the SQLite store. The store sits behind a mutex
/// because rusqlite connections are not thread-safe; SQLite serializes the
/// writers underneath.
pub struct UrlTools {
    http: reqwest::Client,
    store: Mutex<SqliteStore>,
    config: ToolConfig,
}

impl UrlTools {
    /// Create a tool suite with default endpoints.
    pub fn new(store: SqliteStore) -> Result<Self, ToolError> {
        Self::with_config(store, ToolConfig::default())
    }

    /// Create a tool suite with explicit endpoint configuration.
    pub fn with_config(store: SqliteStore, config: ToolConfig) -> Result<Self, ToolError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, store: Mutex::new(store), config })
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn config(&self) -> &ToolConfig {
        &self.config
    }

    pub(crate) fn store(&self) -> Result<MutexGuard<'_, SqliteStore>, ToolError> {
        self.store
            .lock()
            .map_err(|_| ToolError::Service("store mutex poisoned".to_string()))
    }
}

/// Prepend `https://` when the input has no scheme, as the original tools did.
pub(crate) fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

#[async_trait::async_trait]
impl UrlToolkit for UrlTools {
    type Error = ToolError;

    async fn validate_url(&self, url: &str) -> Result<ValidationReport, ToolError> {
        self.validate(url).await
    }

    async fn shorten_url(
        &self,
        url: &str,
        custom_alias: Option<&str>,
        collection_name: Option<&str>,
        tags: Option<&str>,
    ) -> Result<ShortenReport, ToolError> {
        self.shorten(url, custom_alias, collection_name, tags).await
    }

    async fn shorten_url_batch(
        &self,
        urls: &str,
        collection_name: Option<&str>,
        tags: Option<&str>,
    ) -> Result<BatchReport, ToolError> {
        self.shorten_batch(urls, collection_name, tags).await
    }

    async fn get_url_metadata(&self, url: &str) -> Result<MetadataReport, ToolError> {
        self.fetch_metadata(url).await
    }

    async fn check_url_safety(&self, url: &str) -> Result<SafetyReport, ToolError> {
        Ok(safety::check_url_safety(url))
    }

    async fn generate_qr_code(&self, url: &str, size: Option<u32>) -> Result<QrReport, ToolError> {
        qr::generate_qr_code(url, size)
    }

    async fn expand_url(&self, shortened_url: &str) -> Result<ExpansionReport, ToolError> {
        self.expand(shortened_url).await
    }

    async fn create_url_collection(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<CollectionReport, ToolError> {
        self.create_collection(name, description)
    }

    async fn list_my_urls(
        &self,
        collection: Option<&str>,
        tags: Option<&str>,
        limit: usize,
    ) -> Result<UrlListing, ToolError> {
        self.list_urls(collection, tags, limit)
    }

    async fn search_urls(&self, term: &str, limit: usize) -> Result<UrlListing, ToolError> {
        self.search(term, limit)
    }

    async fn list_collections(&self) -> Result<CollectionListing, ToolError> {
        self.collections()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("www.python.org"), "https://www.python.org");
        assert_eq!(normalize_url("http://a.com"), "http://a.com");
        assert_eq!(normalize_url("https://a.com"), "https://a.com");
    }
}
