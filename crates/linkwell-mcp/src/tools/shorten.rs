//! shorten_url / shorten_url_batch tools

use crate::error::McpError;
use linkwell_domain::UrlToolkit;
use linkwell_tools::UrlTools;
use serde::{Deserialize, Serialize};

/// Parameters for shortening one URL
#[derive(Debug, Deserialize)]
pub struct ShortenParams {
    /// The URL to shorten
    pub url: String,
    /// Custom alias (v.gd only)
    #[serde(default)]
    pub custom_alias: Option<String>,
    /// Collection to file the record under
    #[serde(default)]
    pub collection_name: Option<String>,
    /// Comma-separated tags
    #[serde(default)]
    pub tags: Option<String>,
}

/// Result of a single-URL shorten
#[derive(Debug, Serialize)]
pub struct ShortenResult {
    /// The original URL
    pub original: String,
    /// The shortened URL
    pub shortened: String,
    /// Service that produced the short URL
    pub service: String,
    /// Rendered text report
    pub report: String,
}

/// Parameters for a batch shorten
#[derive(Debug, Deserialize)]
pub struct ShortenBatchParams {
    /// Newline- or comma-separated URLs (at most 20)
    pub urls: String,
    /// Collection to file the records under
    #[serde(default)]
    pub collection_name: Option<String>,
    /// Comma-separated tags applied to every record
    #[serde(default)]
    pub tags: Option<String>,
}

/// Result of a batch shorten
#[derive(Debug, Serialize)]
pub struct ShortenBatchResult {
    /// Number of URLs submitted
    pub requested: usize,
    /// Number of URLs shortened and persisted
    pub succeeded: usize,
    /// Rendered text report
    pub report: String,
}

/// Handle a shorten_url invocation
pub async fn handle_shorten(
    tools: &UrlTools,
    params: ShortenParams,
) -> Result<ShortenResult, McpError> {
    let report = tools
        .shorten_url(
            &params.url,
            params.custom_alias.as_deref(),
            params.collection_name.as_deref(),
            params.tags.as_deref(),
        )
        .await?;
    Ok(ShortenResult {
        original: report.original.clone(),
        shortened: report.shortened.clone(),
        service: report.service.clone(),
        report: report.to_string(),
    })
}

/// Handle a shorten_url_batch invocation
pub async fn handle_shorten_batch(
    tools: &UrlTools,
    params: ShortenBatchParams,
) -> Result<ShortenBatchResult, McpError> {
    let report = tools
        .shorten_url_batch(&params.urls, params.collection_name.as_deref(), params.tags.as_deref())
        .await?;
    Ok(ShortenBatchResult {
        requested: report.requested,
        succeeded: report.succeeded,
        report: report.to_string(),
    })
}
