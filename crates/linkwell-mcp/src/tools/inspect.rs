//! Inspection tools: get_url_metadata, check_url_safety, generate_qr_code,
//! expand_url

use crate::error::McpError;
use linkwell_domain::UrlToolkit;
use linkwell_tools::UrlTools;
use serde::{Deserialize, Serialize};

/// Parameters for a metadata fetch
#[derive(Debug, Deserialize)]
pub struct MetadataParams {
    /// The URL to fetch and scrape
    pub url: String,
}

/// Result of a metadata fetch
#[derive(Debug, Serialize)]
pub struct MetadataResult {
    /// The URL that was fetched
    pub url: String,
    /// Scraped page title
    pub title: String,
    /// Scraped page description
    pub description: String,
    /// Host portion of the URL
    pub domain: String,
    /// Rendered text report
    pub report: String,
}

/// Parameters for a safety check
#[derive(Debug, Deserialize)]
pub struct SafetyParams {
    /// The URL to check
    pub url: String,
}

/// Result of a safety check
#[derive(Debug, Serialize)]
pub struct SafetyResult {
    /// The URL that was checked
    pub url: String,
    /// Whether the URL passed the heuristics
    pub is_safe: bool,
    /// Risk tier (low, medium, high)
    pub risk_level: String,
    /// Warnings raised by the heuristics
    pub warnings: Vec<String>,
    /// Rendered text report
    pub report: String,
}

/// Parameters for QR generation
#[derive(Debug, Deserialize)]
pub struct QrParams {
    /// The URL to encode
    pub url: String,
    /// Module size in pixels (default 10)
    #[serde(default)]
    pub size: Option<u32>,
}

/// Result of QR generation
#[derive(Debug, Serialize)]
pub struct QrResult {
    /// The encoded URL
    pub url: String,
    /// Image format of the payload
    pub format: String,
    /// Image dimensions
    pub dimensions: String,
    /// Base64-encoded image payload
    pub base64: String,
    /// Rendered text report
    pub report: String,
}

/// Parameters for expanding a shortened URL
#[derive(Debug, Deserialize)]
pub struct ExpandParams {
    /// The shortened URL to follow
    pub shortened_url: String,
}

/// Result of an expansion
#[derive(Debug, Serialize)]
pub struct ExpandResult {
    /// The shortened URL
    pub shortened: String,
    /// Final destination after redirects
    pub final_url: String,
    /// Number of redirect hops
    pub redirect_count: usize,
    /// Rendered text report
    pub report: String,
}

/// Handle a get_url_metadata invocation
pub async fn handle_metadata(
    tools: &UrlTools,
    params: MetadataParams,
) -> Result<MetadataResult, McpError> {
    let report = tools.get_url_metadata(&params.url).await?;
    Ok(MetadataResult {
        url: report.url.clone(),
        title: report.title.clone(),
        description: report.description.clone(),
        domain: report.domain.clone(),
        report: report.to_string(),
    })
}

/// Handle a check_url_safety invocation
pub async fn handle_safety(
    tools: &UrlTools,
    params: SafetyParams,
) -> Result<SafetyResult, McpError> {
    let report = tools.check_url_safety(&params.url).await?;
    Ok(SafetyResult {
        url: report.url.clone(),
        is_safe: report.is_safe,
        risk_level: report.risk_level.to_string(),
        warnings: report.warnings.clone(),
        report: report.to_string(),
    })
}

/// Handle a generate_qr_code invocation
pub async fn handle_qr(tools: &UrlTools, params: QrParams) -> Result<QrResult, McpError> {
    let report = tools.generate_qr_code(&params.url, params.size).await?;
    Ok(QrResult {
        url: report.url.clone(),
        format: report.format.clone(),
        dimensions: report.dimensions.clone(),
        base64: report.base64.clone(),
        report: report.to_string(),
    })
}

/// Handle an expand_url invocation
pub async fn handle_expand(
    tools: &UrlTools,
    params: ExpandParams,
) -> Result<ExpandResult, McpError> {
    let report = tools.expand_url(&params.shortened_url).await?;
    Ok(ExpandResult {
        shortened: report.shortened.clone(),
        final_url: report.final_url.clone(),
        redirect_count: report.redirect_count,
        report: report.to_string(),
    })
}
