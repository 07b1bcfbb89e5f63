//! Stage handlers.
//!
//! Each handler issues zero or more toolkit calls and folds the responses
//! into the shared [`WorkflowState`]. A failed call becomes an `error` field
//! on the per-URL record or a line in `state.errors`; nothing propagates.

use crate::state::{OutcomeStatus, WorkflowState};
use crate::Workflow;
use chrono::Local;
use linkwell_domain::UrlToolkit;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// How many URLs get individual metadata and safety calls in the batch and
/// analysis stages. A deliberate truncation, kept for performance.
pub const PER_URL_DETAIL_CAP: usize = 3;

/// URLs containing one of these substrings get an opportunistic QR code
/// during content analysis.
const QR_KEYWORDS: [&str; 3] = ["github", "docs", "python"];

impl<T: UrlToolkit> Workflow<T> {
    /// Sequential reachability checks over every extracted URL.
    pub(crate) async fn validate_urls(&self, state: &mut WorkflowState) {
        if state.urls.is_empty() {
            state.errors.push("No URLs provided for validation".to_string());
            return;
        }

        let urls = state.urls.clone();
        for url in &urls {
            match self.toolkit().validate_url(url).await {
                Ok(report) => {
                    let outcome = state.outcome_mut(url);
                    outcome.validation = Some(report);
                    outcome.status = OutcomeStatus::Validated;
                }
                Err(e) => {
                    let outcome = state.outcome_mut(url);
                    outcome.error = Some(e.to_string());
                    outcome.status = OutcomeStatus::Failed;
                }
            }
        }
    }

    /// One batch shorten call, then individual detail calls for the first
    /// [`PER_URL_DETAIL_CAP`] URLs.
    pub(crate) async fn process_batch(&self, state: &mut WorkflowState) {
        if state.urls.is_empty() {
            state.errors.push("No URLs provided for batch processing".to_string());
            return;
        }

        let joined = state.urls.join("\n");
        match self
            .toolkit()
            .shorten_url_batch(&joined, state.collection_name.as_deref(), state.tags.as_deref())
            .await
        {
            Ok(report) => state.batch = Some(report),
            Err(e) => {
                // Without a batch result there is nothing to detail
                state.errors.push(format!("Batch processing failed: {e}"));
                return;
            }
        }

        let urls: Vec<String> = state.urls.iter().take(PER_URL_DETAIL_CAP).cloned().collect();
        for url in &urls {
            match self.fetch_details(url).await {
                Ok((metadata, safety)) => {
                    let outcome = state.outcome_mut(url);
                    outcome.metadata = Some(metadata);
                    outcome.safety = Some(safety);
                    outcome.status = OutcomeStatus::Processed;
                }
                Err(message) => {
                    let outcome = state.outcome_mut(url);
                    outcome.error = Some(message);
                    outcome.status = OutcomeStatus::Failed;
                }
            }
        }
    }

    /// Metadata + safety for the first [`PER_URL_DETAIL_CAP`] URLs, with an
    /// opportunistic QR code for keyword-matching URLs. Falls back to the
    /// URLs already in the results when the extractor found none.
    pub(crate) async fn analyze_content(&self, state: &mut WorkflowState) {
        let pool: Vec<String> = if state.urls.is_empty() {
            state.results.iter().map(|o| o.url.clone()).collect()
        } else {
            state.urls.clone()
        };

        for url in pool.iter().take(PER_URL_DETAIL_CAP) {
            match self.fetch_details(url).await {
                Ok((metadata, safety)) => {
                    // QR failure is swallowed: the code is an optional extra
                    let lowered = url.to_lowercase();
                    let qr_generated = if QR_KEYWORDS.iter().any(|k| lowered.contains(k)) {
                        self.toolkit().generate_qr_code(url, Some(8)).await.is_ok()
                    } else {
                        false
                    };

                    let outcome = state.outcome_mut(url);
                    outcome.metadata = Some(metadata);
                    outcome.safety = Some(safety);
                    outcome.qr_generated = qr_generated;
                    outcome.status = OutcomeStatus::Analyzed;
                }
                Err(message) => {
                    let outcome = state.outcome_mut(url);
                    outcome.error = Some(message);
                    outcome.status = OutcomeStatus::Failed;
                }
            }
        }
    }

    /// Ensure a collection exists, synthesizing a name from the analyzed
    /// domains when the request named none.
    pub(crate) async fn organize_urls(&self, state: &mut WorkflowState) {
        let name = match &state.collection_name {
            Some(name) => name.clone(),
            None => synthesize_collection_name(state),
        };

        let description =
            format!("Auto-created collection for workflow on {}", Local::now().format("%Y-%m-%d %H:%M"));
        // Already-exists is a report state, anything else is logged and
        // dropped so organization never blocks the summary
        match self.toolkit().create_url_collection(&name, Some(&description)).await {
            Ok(report) if !report.created => {
                debug!(collection = %name, "collection already existed");
            }
            Ok(_) => {}
            Err(e) => warn!(collection = %name, error = %e, "collection creation failed"),
        }

        state.collection_name = Some(name);
    }

    /// One metadata and one safety call; the first failure wins.
    async fn fetch_details(
        &self,
        url: &str,
    ) -> Result<(linkwell_domain::MetadataReport, linkwell_domain::SafetyReport), String> {
        let metadata = self.toolkit().get_url_metadata(url).await.map_err(|e| e.to_string())?;
        let safety = self.toolkit().check_url_safety(url).await.map_err(|e| e.to_string())?;
        Ok((metadata, safety))
    }
}

/// Collection name from the distinct domains seen during analysis: one
/// domain names the collection after it, several get a timestamped mixed
/// name, none at all a generic timestamped name.
fn synthesize_collection_name(state: &WorkflowState) -> String {
    let domains: BTreeSet<&str> = state
        .results
        .iter()
        .filter_map(|o| o.metadata.as_ref())
        .map(|m| m.domain.as_str())
        .filter(|d| !d.is_empty())
        .collect();

    match domains.len() {
        1 => {
            let domain = domains.iter().next().map(|d| d.replace('.', "_")).unwrap_or_default();
            format!("urls_from_{domain}")
        }
        0 => format!("url_collection_{}", Local::now().format("%Y%m%d_%H%M")),
        _ => format!("mixed_collection_{}", Local::now().format("%Y%m%d_%H%M")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkwell_domain::MetadataReport;

    fn metadata_for(domain: &str) -> MetadataReport {
        MetadataReport {
            url: format!("https://{domain}/x"),
            title: String::new(),
            description: String::new(),
            domain: domain.to_string(),
            is_secure: true,
            favicon_url: None,
            image_url: None,
            content_type: None,
            content_length: 0,
            status_code: 200,
        }
    }

    #[test]
    fn test_collection_name_from_single_domain() {
        let mut state = WorkflowState::new("x");
        state.outcome_mut("https://docs.rs/a").metadata = Some(metadata_for("docs.rs"));
        state.outcome_mut("https://docs.rs/b").metadata = Some(metadata_for("docs.rs"));
        assert_eq!(synthesize_collection_name(&state), "urls_from_docs_rs");
    }

    #[test]
    fn test_collection_name_mixed_domains() {
        let mut state = WorkflowState::new("x");
        state.outcome_mut("https://a.com").metadata = Some(metadata_for("a.com"));
        state.outcome_mut("https://b.com").metadata = Some(metadata_for("b.com"));
        assert!(synthesize_collection_name(&state).starts_with("mixed_collection_"));
    }

    #[test]
    fn test_collection_name_without_metadata() {
        let state = WorkflowState::new("x");
        assert!(synthesize_collection_name(&state).starts_with("url_collection_"));
    }
}
