//! manage_urls tool - free-text request through the workflow

use crate::error::McpError;
use linkwell_tools::UrlTools;
use linkwell_workflow::Workflow;
use serde::{Deserialize, Serialize};

/// Parameters for a workflow request
#[derive(Debug, Deserialize)]
pub struct ManageParams {
    /// Free-text request, e.g. "shorten these URLs: ..."
    pub request: String,
}

/// Result of a workflow run
#[derive(Debug, Serialize)]
pub struct ManageResult {
    /// Rendered workflow summary
    pub summary: String,
}

/// Handle a manage_urls invocation
pub async fn handle_manage(
    workflow: &Workflow<UrlTools>,
    params: ManageParams,
) -> Result<ManageResult, McpError> {
    let summary = workflow.run(&params.request).await;
    Ok(ManageResult { summary })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manage_params_deserialize() {
        let params: ManageParams =
            serde_json::from_str(r#"{"request": "check https://www.python.org"}"#).unwrap();
        assert!(params.request.contains("python.org"));
    }
}
