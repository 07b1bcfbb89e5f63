//! URL format and reachability validation.

use crate::{normalize_url, ToolError, UrlTools};
use linkwell_domain::ValidationReport;
use tracing::debug;
use url::Url;

impl UrlTools {
    /// Check a URL for well-formedness, then probe it with a HEAD request.
    ///
    /// Invalid and unreachable URLs are report states, not errors.
    pub(crate) async fn validate(&self, raw: &str) -> Result<ValidationReport, ToolError> {
        let url = normalize_url(raw);

        let parsed = match Url::parse(&url) {
            Ok(parsed) if parsed.host_str().is_some() => parsed,
            Ok(_) => {
                return Ok(invalid(url, "URL has no host"));
            }
            Err(e) => {
                return Ok(invalid(url, &e.to_string()));
            }
        };

        // Compare parsed URLs so client-side normalization (e.g. an added
        // trailing slash) does not count as a redirect.
        let requested = parsed.clone();
        match self.http().head(parsed).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let final_url = response.url().to_string();
                Ok(ValidationReport {
                    redirected: *response.url() != requested,
                    url,
                    is_valid: true,
                    is_reachable: status < 400,
                    status_code: Some(status),
                    final_url: Some(final_url),
                    error: None,
                })
            }
            Err(e) => {
                debug!(url = %url, error = %e, "HEAD request failed");
                Ok(ValidationReport {
                    url,
                    is_valid: true,
                    is_reachable: false,
                    status_code: None,
                    final_url: None,
                    redirected: false,
                    error: None,
                })
            }
        }
    }
}

fn invalid(url: String, error: &str) -> ValidationReport {
    ValidationReport {
        url,
        is_valid: false,
        is_reachable: false,
        status_code: None,
        final_url: None,
        redirected: false,
        error: Some(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_report_shape() {
        let report = invalid("https://".to_string(), "empty host");
        assert!(!report.is_valid);
        assert!(!report.is_reachable);
        assert_eq!(report.error.as_deref(), Some("empty host"));
    }
}
