//! End-to-end workflow tests over a mock toolkit.
//!
//! The mock records every call it receives so the tests can assert which
//! tools each pipeline reached and with what arguments.

use async_trait::async_trait;
use linkwell_domain::{
    BatchReport, Collection, CollectionListing, CollectionReport, ExpansionReport, MetadataReport,
    QrReport, RiskLevel, SafetyReport, ShortenReport, UrlListing, UrlToolkit, ValidationReport,
};
use linkwell_workflow::{Intent, OutcomeStatus, Workflow};
use std::sync::Mutex;

#[derive(Debug, thiserror::Error)]
#[error("mock failure: {0}")]
struct MockError(String);

#[derive(Default)]
struct MockToolkit {
    calls: Mutex<Vec<String>>,
    fail_batch: bool,
    fail_qr: bool,
    fail_metadata: bool,
}

impl MockToolkit {
    fn log(&self, entry: String) {
        self.calls.lock().unwrap().push(entry);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn count(&self, tool: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(tool)).count()
    }
}

fn host_of(url: &str) -> String {
    url.trim_start_matches("https://")
        .trim_start_matches("http://")
        .split('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

#[async_trait]
impl UrlToolkit for MockToolkit {
    type Error = MockError;

    async fn validate_url(&self, url: &str) -> Result<ValidationReport, MockError> {
        self.log(format!("validate_url {url}"));
        Ok(ValidationReport {
            url: url.to_string(),
            is_valid: true,
            is_reachable: true,
            status_code: Some(200),
            final_url: Some(url.to_string()),
            redirected: false,
            error: None,
        })
    }

    async fn shorten_url(
        &self,
        url: &str,
        custom_alias: Option<&str>,
        _collection_name: Option<&str>,
        _tags: Option<&str>,
    ) -> Result<ShortenReport, MockError> {
        self.log(format!("shorten_url {url}"));
        Ok(ShortenReport {
            original: url.to_string(),
            shortened: "https://tinyurl.com/x".to_string(),
            service: "TinyURL".to_string(),
            custom_alias: custom_alias.map(str::to_string),
        })
    }

    async fn shorten_url_batch(
        &self,
        urls: &str,
        collection_name: Option<&str>,
        _tags: Option<&str>,
    ) -> Result<BatchReport, MockError> {
        self.log(format!("shorten_url_batch {urls}"));
        if self.fail_batch {
            return Err(MockError("service unavailable".to_string()));
        }
        let count = urls.lines().filter(|l| !l.trim().is_empty()).count();
        Ok(BatchReport {
            requested: count,
            succeeded: count,
            collection_name: collection_name.map(str::to_string),
            items: Vec::new(),
        })
    }

    async fn get_url_metadata(&self, url: &str) -> Result<MetadataReport, MockError> {
        self.log(format!("get_url_metadata {url}"));
        if self.fail_metadata {
            return Err(MockError("fetch failed".to_string()));
        }
        Ok(MetadataReport {
            url: url.to_string(),
            title: format!("Page at {}", host_of(url)),
            description: "A mock page".to_string(),
            domain: host_of(url),
            is_secure: url.starts_with("https://"),
            favicon_url: None,
            image_url: None,
            content_type: Some("text/html".to_string()),
            content_length: 512,
            status_code: 200,
        })
    }

    async fn check_url_safety(&self, url: &str) -> Result<SafetyReport, MockError> {
        self.log(format!("check_url_safety {url}"));
        Ok(SafetyReport {
            url: url.to_string(),
            domain: host_of(url),
            is_safe: true,
            risk_level: RiskLevel::Low,
            warnings: Vec::new(),
        })
    }

    async fn generate_qr_code(&self, url: &str, _size: Option<u32>) -> Result<QrReport, MockError> {
        self.log(format!("generate_qr_code {url}"));
        if self.fail_qr {
            return Err(MockError("render failed".to_string()));
        }
        Ok(QrReport {
            url: url.to_string(),
            format: "SVG".to_string(),
            dimensions: "29x29".to_string(),
            base64: "aGVsbG8=".to_string(),
        })
    }

    async fn expand_url(&self, shortened_url: &str) -> Result<ExpansionReport, MockError> {
        self.log(format!("expand_url {shortened_url}"));
        Ok(ExpansionReport {
            shortened: shortened_url.to_string(),
            final_url: shortened_url.to_string(),
            redirect_chain: vec![shortened_url.to_string()],
            redirect_count: 0,
            status_code: 200,
        })
    }

    async fn create_url_collection(
        &self,
        name: &str,
        _description: Option<&str>,
    ) -> Result<CollectionReport, MockError> {
        self.log(format!("create_url_collection {name}"));
        Ok(CollectionReport { name: name.to_string(), created: true })
    }

    async fn list_my_urls(
        &self,
        _collection: Option<&str>,
        _tags: Option<&str>,
        _limit: usize,
    ) -> Result<UrlListing, MockError> {
        self.log("list_my_urls".to_string());
        Ok(UrlListing { records: Vec::new() })
    }

    async fn search_urls(&self, term: &str, _limit: usize) -> Result<UrlListing, MockError> {
        self.log(format!("search_urls {term}"));
        Ok(UrlListing { records: Vec::new() })
    }

    async fn list_collections(&self) -> Result<CollectionListing, MockError> {
        self.log("list_collections".to_string());
        Ok(CollectionListing { collections: Vec::<Collection>::new() })
    }
}

#[tokio::test]
async fn test_check_keyword_runs_validation_only() {
    let workflow = Workflow::new(MockToolkit::default());
    let state = workflow
        .run_state("Please check if this URL works: https://www.python.org")
        .await;

    assert_eq!(state.intent, Some(Intent::Validate));
    let calls = workflow.toolkit().calls();
    assert_eq!(calls, vec!["validate_url https://www.python.org"]);
    assert!(state.summary.contains("**Operation**: Validate"));
    assert!(state.summary.contains("Valid and reachable"));
}

#[tokio::test]
async fn test_shorten_cascades_into_analysis_and_organization() {
    let workflow = Workflow::new(MockToolkit::default());
    let state = workflow.run_state("Shorten these URLs: https://a.com and https://b.com").await;

    assert_eq!(state.intent, Some(Intent::BatchProcess));
    let calls = workflow.toolkit().calls();
    assert_eq!(calls[0], "shorten_url_batch https://a.com\nhttps://b.com");
    assert_eq!(workflow.toolkit().count("shorten_url_batch"), 1);
    assert!(workflow.toolkit().count("get_url_metadata") > 0, "analysis ran");
    assert_eq!(workflow.toolkit().count("create_url_collection"), 1, "organization ran");
    assert!(state.batch.is_some());
}

#[tokio::test]
async fn test_no_urls_no_keywords_still_renders_summary() {
    let workflow = Workflow::new(MockToolkit::default());
    let state = workflow.run_state("hello there").await;

    assert_eq!(state.intent, Some(Intent::Validate));
    assert!(state.urls.is_empty());
    assert_eq!(state.errors, vec!["No URLs provided for validation"]);
    assert!(workflow.toolkit().calls().is_empty());
    assert!(state.summary.contains("No URLs provided for validation"));
}

#[tokio::test]
async fn test_detail_cap_limits_analysis_to_three_urls() {
    for (url_count, expected_details) in [(0, 0), (1, 1), (3, 3), (10, 3)] {
        let workflow = Workflow::new(MockToolkit::default());
        let urls: Vec<String> = (0..url_count).map(|i| format!("https://site{i}.org")).collect();
        let input = format!("analyze these: {}", urls.join(" "));
        let state = workflow.run_state(&input).await;

        assert_eq!(state.intent, Some(Intent::ContentAnalysis));
        assert_eq!(workflow.toolkit().count("get_url_metadata"), expected_details);
        assert_eq!(workflow.toolkit().count("check_url_safety"), expected_details);
    }
}

#[tokio::test]
async fn test_detail_cap_applies_after_batch_too() {
    let workflow = Workflow::new(MockToolkit::default());
    let urls: Vec<String> = (0..10).map(|i| format!("https://site{i}.org")).collect();
    let input = format!("shorten all of these: {}", urls.join("\n"));
    let state = workflow.run_state(&input).await;

    assert_eq!(state.intent, Some(Intent::BatchProcess));
    assert_eq!(workflow.toolkit().count("shorten_url_batch"), 1);
    // batch detail pass and the cascaded analysis pass hit the same 3 URLs
    assert_eq!(workflow.toolkit().count("get_url_metadata"), 6);
    assert_eq!(state.results.len(), 3, "merge by URL, no duplicate entries");
}

#[tokio::test]
async fn test_batch_failure_recorded_and_summary_renders() {
    let workflow = Workflow::new(MockToolkit { fail_batch: true, ..Default::default() });
    let state = workflow.run_state("shorten https://a.com https://b.com").await;

    assert!(state.batch.is_none());
    assert!(state.errors.iter().any(|e| e.starts_with("Batch processing failed:")));
    assert!(state.summary.contains("Errors Encountered"));
}

#[tokio::test]
async fn test_qr_generated_for_keyword_urls_only() {
    let workflow = Workflow::new(MockToolkit::default());
    let state = workflow
        .run_state("analyze https://github.com/rust-lang/rust and https://a.com")
        .await;

    let calls = workflow.toolkit().calls();
    assert!(calls.contains(&"generate_qr_code https://github.com/rust-lang/rust".to_string()));
    assert_eq!(workflow.toolkit().count("generate_qr_code"), 1);

    let github = state.results.iter().find(|o| o.url.contains("github")).unwrap();
    assert!(github.qr_generated);
    let plain = state.results.iter().find(|o| o.url == "https://a.com").unwrap();
    assert!(!plain.qr_generated);
}

#[tokio::test]
async fn test_qr_failure_is_swallowed() {
    let workflow = Workflow::new(MockToolkit { fail_qr: true, ..Default::default() });
    let state = workflow.run_state("analyze https://docs.rs/serde").await;

    let outcome = &state.results[0];
    assert!(!outcome.qr_generated);
    assert!(outcome.error.is_none(), "QR failure never surfaces as an error");
    assert_eq!(outcome.status, OutcomeStatus::Analyzed);
    assert!(state.errors.is_empty());
}

#[tokio::test]
async fn test_metadata_failure_becomes_per_url_error() {
    let workflow = Workflow::new(MockToolkit { fail_metadata: true, ..Default::default() });
    let state = workflow.run_state("analyze https://a.com").await;

    let outcome = &state.results[0];
    assert_eq!(outcome.status, OutcomeStatus::Failed);
    assert!(outcome.error.as_deref().unwrap_or_default().contains("fetch failed"));
    assert!(!state.summary.is_empty(), "a failed analysis still renders");
}

#[tokio::test]
async fn test_organize_uses_named_collection() {
    let workflow = Workflow::new(MockToolkit::default());
    let state = workflow
        .run_state("organize https://a.com into collection: research")
        .await;

    assert_eq!(state.intent, Some(Intent::Organize));
    assert_eq!(state.collection_name.as_deref(), Some("research"));
    let calls = workflow.toolkit().calls();
    assert!(calls.contains(&"create_url_collection research".to_string()));
}

#[tokio::test]
async fn test_organize_synthesizes_collection_name_from_domain() {
    let workflow = Workflow::new(MockToolkit::default());
    let state = workflow.run_state("curate https://docs.rs/serde").await;

    // curate routes through analysis, so the domain is known by organize time
    assert_eq!(state.intent, Some(Intent::ContentAnalysis));
    assert_eq!(state.collection_name.as_deref(), Some("urls_from_docs_rs"));
}

#[tokio::test]
async fn test_earlier_keyword_tier_wins_end_to_end() {
    let workflow = Workflow::new(MockToolkit::default());
    let state = workflow.run_state("validate and shorten https://a.com https://b.com").await;

    assert_eq!(state.intent, Some(Intent::Validate));
    assert_eq!(workflow.toolkit().count("shorten_url_batch"), 0);
    assert_eq!(workflow.toolkit().count("validate_url"), 2);
}
