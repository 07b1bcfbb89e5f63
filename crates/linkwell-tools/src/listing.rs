//! Store-backed operations: listings, search, and collection management.

use crate::{ToolError, UrlTools};
use linkwell_domain::traits::{UrlFilter, UrlStore};
use linkwell_domain::{split_tags, CollectionListing, CollectionReport, UrlListing};
use linkwell_store::StoreError;

impl UrlTools {
    pub(crate) fn list_urls(
        &self,
        collection: Option<&str>,
        tags: Option<&str>,
        limit: usize,
    ) -> Result<UrlListing, ToolError> {
        let filter = UrlFilter {
            collection: collection.filter(|c| !c.is_empty()).map(str::to_string),
            tags: tags.map(split_tags).unwrap_or_default(),
            limit,
        };
        let records = self.store()?.list_urls(&filter)?;
        Ok(UrlListing { records })
    }

    pub(crate) fn search(&self, term: &str, limit: usize) -> Result<UrlListing, ToolError> {
        let records = self.store()?.search_urls(term, limit)?;
        Ok(UrlListing { records })
    }

    /// Create a collection. A duplicate name is a report state (`created:
    /// false`), not an error: explicit callers surface the rejection text,
    /// the workflow's auto-organization ignores it.
    pub(crate) fn create_collection(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<CollectionReport, ToolError> {
        match self.store()?.create_collection(name, description) {
            Ok(_) => Ok(CollectionReport { name: name.to_string(), created: true }),
            Err(StoreError::Duplicate) => {
                Ok(CollectionReport { name: name.to_string(), created: false })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub(crate) fn collections(&self) -> Result<CollectionListing, ToolError> {
        let collections = self.store()?.list_collections()?;
        Ok(CollectionListing { collections })
    }
}
