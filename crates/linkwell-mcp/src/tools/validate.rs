//! validate_url tool - format and reachability check

use crate::error::McpError;
use linkwell_domain::UrlToolkit;
use linkwell_tools::UrlTools;
use serde::{Deserialize, Serialize};

/// Parameters for validating a URL
#[derive(Debug, Deserialize)]
pub struct ValidateParams {
    /// The URL to check
    pub url: String,
}

/// Result of a validation
#[derive(Debug, Serialize)]
pub struct ValidateResult {
    /// The URL as checked
    pub url: String,
    /// Whether the URL is well-formed
    pub is_valid: bool,
    /// Whether a HEAD request succeeded with a non-error status
    pub is_reachable: bool,
    /// HTTP status of the response, when one was received
    pub status_code: Option<u16>,
    /// Rendered text report
    pub report: String,
}

/// Handle a validate_url invocation
pub async fn handle_validate(
    tools: &UrlTools,
    params: ValidateParams,
) -> Result<ValidateResult, McpError> {
    let report = tools.validate_url(&params.url).await?;
    Ok(ValidateResult {
        url: report.url.clone(),
        is_valid: report.is_valid,
        is_reachable: report.is_reachable,
        status_code: report.status_code,
        report: report.to_string(),
    })
}
