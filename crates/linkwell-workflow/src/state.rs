//! Per-request workflow state.

use crate::intent::Intent;
use linkwell_domain::{BatchReport, MetadataReport, SafetyReport, ValidationReport};

/// Where a per-URL record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// Touched by the validate stage
    Validated,
    /// Touched by the batch stage
    Processed,
    /// Touched by the analyze stage
    Analyzed,
    /// The last tool call for this URL failed
    Failed,
}

/// One per-URL record, keyed by `url`.
///
/// Later stages update an existing record in place rather than appending a
/// second entry for the same URL.
#[derive(Debug, Clone)]
pub struct UrlOutcome {
    /// The URL this record belongs to
    pub url: String,
    /// Validation result, when the validate stage ran
    pub validation: Option<ValidationReport>,
    /// Scraped metadata, when a detail stage ran
    pub metadata: Option<MetadataReport>,
    /// Safety check result, when a detail stage ran
    pub safety: Option<SafetyReport>,
    /// Whether a QR code was generated for this URL
    pub qr_generated: bool,
    /// Failure description from the last failed call
    pub error: Option<String>,
    /// Which stage last touched this record
    pub status: OutcomeStatus,
}

impl UrlOutcome {
    fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            validation: None,
            metadata: None,
            safety: None,
            qr_generated: false,
            error: None,
            status: OutcomeStatus::Failed,
        }
    }
}

/// The single mutable record threaded through the stages of one request.
#[derive(Debug)]
pub struct WorkflowState {
    /// The request text, set once and never mutated
    pub raw_input: String,
    /// Extracted URLs in order of first appearance, not deduplicated
    pub urls: Vec<String>,
    /// The classified intent, set once
    pub intent: Option<Intent>,
    /// Collection name, parsed from the text or synthesized by Organize
    pub collection_name: Option<String>,
    /// Raw tag string, parsed from the text
    pub tags: Option<String>,
    /// Batch report, when the batch stage ran
    pub batch: Option<BatchReport>,
    /// Per-URL records, keyed by URL (merge-by-key, never duplicated)
    pub results: Vec<UrlOutcome>,
    /// Append-only error log
    pub errors: Vec<String>,
    /// The rendered report, written exactly once by the final stage
    pub summary: String,
}

impl WorkflowState {
    /// Fresh state for one request.
    pub fn new(input: &str) -> Self {
        Self {
            raw_input: input.to_string(),
            urls: Vec::new(),
            intent: None,
            collection_name: None,
            tags: None,
            batch: None,
            results: Vec::new(),
            errors: Vec::new(),
            summary: String::new(),
        }
    }

    /// Find-or-append the record for a URL. Duplicate URLs collapse to one
    /// entry here.
    pub fn outcome_mut(&mut self, url: &str) -> &mut UrlOutcome {
        if let Some(index) = self.results.iter().position(|o| o.url == url) {
            &mut self.results[index]
        } else {
            self.results.push(UrlOutcome::new(url));
            let last = self.results.len() - 1;
            &mut self.results[last]
        }
    }
}
