//! Linkwell Workflow Layer
//!
//! Routes one free-text request through a fixed pipeline of stages:
//!
//! ```text
//! text in -> extract -> classify -> route -> stage handlers -> summary -> text out
//! ```
//!
//! The extractor pulls URLs, a collection name, and a tag string out of the
//! text with three independent regexes; the classifier picks exactly one of
//! four intents from an ordered keyword table; the router maps the intent to
//! a fixed stage sequence; the handlers call the URL toolkit and fold the
//! responses into one [`WorkflowState`] owned by the orchestrator; the
//! summary renderer formats the state into a report string.
//!
//! Every toolkit failure is converted to a data value at the call site; no
//! error crosses a stage boundary, and a run always produces a summary.

#![warn(missing_docs)]

pub mod extract;
pub mod intent;
pub mod router;
pub mod stages;
pub mod state;
pub mod summary;

pub use extract::{extract, Extraction};
pub use intent::{classify, Intent};
pub use router::{route, Stage};
pub use stages::PER_URL_DETAIL_CAP;
pub use state::{OutcomeStatus, UrlOutcome, WorkflowState};

use linkwell_domain::UrlToolkit;
use tracing::{debug, info};

/// The workflow orchestrator.
///
/// Owns the toolkit and one [`WorkflowState`] per request; stages receive the
/// state by mutable reference in sequence, so there is no aliasing and no
/// cross-request sharing.
pub struct Workflow<T> {
    toolkit: T,
}

impl<T: UrlToolkit> Workflow<T> {
    /// Create a workflow over the given toolkit.
    pub fn new(toolkit: T) -> Self {
        Self { toolkit }
    }

    /// Access the underlying toolkit.
    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    /// Process a request, returning the rendered summary.
    pub async fn run(&self, input: &str) -> String {
        self.run_state(input).await.summary
    }

    /// Process a request, returning the full final state.
    pub async fn run_state(&self, input: &str) -> WorkflowState {
        let mut state = WorkflowState::new(input);

        let extraction = extract(input);
        state.urls = extraction.urls;
        state.collection_name = extraction.collection_name;
        state.tags = extraction.tags;

        let intent = classify(input, state.urls.len());
        state.intent = Some(intent);
        info!(?intent, urls = state.urls.len(), "request classified");

        for stage in route(intent) {
            debug!(?stage, "running stage");
            match stage {
                Stage::ValidateUrls => self.validate_urls(&mut state).await,
                Stage::ProcessBatch => self.process_batch(&mut state).await,
                Stage::AnalyzeContent => self.analyze_content(&mut state).await,
                Stage::OrganizeUrls => self.organize_urls(&mut state).await,
                Stage::Summary => {
                    let rendered = summary::render(&state);
                    state.summary = rendered;
                }
            }
        }

        state
    }
}
