//! Library tools: create_url_collection, list_my_urls, search_urls,
//! list_collections

use crate::error::McpError;
use linkwell_domain::UrlToolkit;
use linkwell_tools::UrlTools;
use serde::{Deserialize, Serialize};

fn default_list_limit() -> usize {
    100
}

fn default_search_limit() -> usize {
    50
}

/// Parameters for creating a collection
#[derive(Debug, Deserialize)]
pub struct CreateCollectionParams {
    /// Collection name (unique)
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

/// Result of a collection-creation attempt
#[derive(Debug, Serialize)]
pub struct CreateCollectionResult {
    /// The collection name
    pub name: String,
    /// False when the name already existed
    pub created: bool,
    /// Rendered text report
    pub report: String,
}

/// Parameters for listing stored URLs
#[derive(Debug, Deserialize)]
pub struct ListUrlsParams {
    /// Only records in this collection
    #[serde(default)]
    pub collection: Option<String>,
    /// Comma-separated tags; records must carry all of them
    #[serde(default)]
    pub tags: Option<String>,
    /// Maximum number of records (default 100)
    #[serde(default = "default_list_limit")]
    pub limit: usize,
}

/// Result of a URL listing
#[derive(Debug, Serialize)]
pub struct ListUrlsResult {
    /// Number of records returned
    pub count: usize,
    /// Rendered text report
    pub report: String,
}

/// Parameters for searching stored URLs
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Term matched against title, description, and original URL
    pub search_term: String,
    /// Maximum number of records (default 50)
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

/// Result of a search
#[derive(Debug, Serialize)]
pub struct SearchResult {
    /// Number of records returned
    pub count: usize,
    /// Rendered text report
    pub report: String,
}

/// Result of listing collections
#[derive(Debug, Serialize)]
pub struct CollectionsResult {
    /// Number of collections
    pub count: usize,
    /// Rendered text report
    pub report: String,
}

/// Handle a create_url_collection invocation
pub async fn handle_create_collection(
    tools: &UrlTools,
    params: CreateCollectionParams,
) -> Result<CreateCollectionResult, McpError> {
    let report = tools.create_url_collection(&params.name, params.description.as_deref()).await?;
    Ok(CreateCollectionResult {
        name: report.name.clone(),
        created: report.created,
        report: report.to_string(),
    })
}

/// Handle a list_my_urls invocation
pub async fn handle_list_urls(
    tools: &UrlTools,
    params: ListUrlsParams,
) -> Result<ListUrlsResult, McpError> {
    let listing = tools
        .list_my_urls(params.collection.as_deref(), params.tags.as_deref(), params.limit)
        .await?;
    Ok(ListUrlsResult { count: listing.records.len(), report: listing.to_string() })
}

/// Handle a search_urls invocation
pub async fn handle_search(
    tools: &UrlTools,
    params: SearchParams,
) -> Result<SearchResult, McpError> {
    let listing = tools.search_urls(&params.search_term, params.limit).await?;
    Ok(SearchResult { count: listing.records.len(), report: listing.to_string() })
}

/// Handle a list_collections invocation
pub async fn handle_list_collections(tools: &UrlTools) -> Result<CollectionsResult, McpError> {
    let listing = tools.list_collections().await?;
    Ok(CollectionsResult { count: listing.collections.len(), report: listing.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_defaults() {
        let params: ListUrlsParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.collection, None);
        assert_eq!(params.tags, None);
        assert_eq!(params.limit, 100);
    }

    #[test]
    fn test_search_params_require_term() {
        assert!(serde_json::from_str::<SearchParams>("{}").is_err());
        let params: SearchParams =
            serde_json::from_str(r#"{"search_term": "python", "limit": 5}"#).unwrap();
        assert_eq!(params.limit, 5);
    }
}
