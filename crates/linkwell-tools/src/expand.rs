//! Shortened-URL expansion.
//!
//! Follows redirects with a custom policy that records every hop, so the
//! report can show the full chain, not just the destination.

use crate::{ToolError, UrlTools, USER_AGENT};
use linkwell_domain::ExpansionReport;
use std::sync::{Arc, Mutex};

const MAX_REDIRECT_HOPS: usize = 10;

impl UrlTools {
    pub(crate) async fn expand(&self, shortened: &str) -> Result<ExpansionReport, ToolError> {
        let chain: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        // reqwest does not expose the redirect history, so capture it from
        // inside the redirect policy.
        let hops = chain.clone();
        let policy = reqwest::redirect::Policy::custom(move |attempt| {
            let previous: Vec<String> =
                attempt.previous().iter().map(|u| u.to_string()).collect();
            if let Ok(mut hops) = hops.lock() {
                *hops = previous;
            }
            if attempt.previous().len() >= MAX_REDIRECT_HOPS {
                attempt.stop()
            } else {
                attempt.follow()
            }
        });

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.config().timeout)
            .redirect(policy)
            .build()?;

        let response = client.head(shortened).send().await?;

        let redirect_chain = chain.lock().map(|hops| hops.clone()).unwrap_or_default();

        Ok(ExpansionReport {
            shortened: shortened.to_string(),
            final_url: response.url().to_string(),
            redirect_count: redirect_chain.len(),
            redirect_chain,
            status_code: response.status().as_u16(),
        })
    }
}
