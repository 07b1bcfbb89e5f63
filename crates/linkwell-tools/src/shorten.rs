//! URL shortening: the v.gd custom-alias path and the multi-service
//! fallback chain, plus batch shortening with persistence.

use crate::{normalize_url, safety, ToolError, UrlTools, BATCH_MAX_URLS};
use linkwell_domain::traits::UrlStore;
use linkwell_domain::{split_tags, BatchItem, BatchReport, NewUrl, ShortenReport};
use serde::Deserialize;
use tracing::{debug, warn};

// V.gd error code for an alias that is already taken.
const VGD_ALIAS_TAKEN: i64 = 2;

#[derive(Deserialize)]
struct VgdResponse {
    shorturl: Option<String>,
    errorcode: Option<i64>,
    errormessage: Option<String>,
}

impl UrlTools {
    /// Shorten one URL and persist the record.
    ///
    /// A custom alias goes to the v.gd create API, which supports aliases.
    /// Without one, a fallback chain of services is tried in order and the
    /// first success wins.
    pub(crate) async fn shorten(
        &self,
        raw: &str,
        custom_alias: Option<&str>,
        collection_name: Option<&str>,
        tags: Option<&str>,
    ) -> Result<ShortenReport, ToolError> {
        let url = normalize_url(raw);

        let alias = custom_alias.filter(|a| !a.is_empty());
        let (shortened, service) = match alias {
            Some(alias) => (self.shorten_vgd_alias(&url, alias).await?, "V.gd"),
            None => self.shorten_via_chain(&url).await?,
        };

        // Best-effort metadata scrape for the stored record; a failure here
        // never fails the shorten.
        let metadata = self.fetch_metadata(&url).await.ok();
        let safety = safety::check_url_safety(&url);

        let record = NewUrl {
            original_url: url.clone(),
            shortened_url: shortened.clone(),
            custom_alias: alias.map(str::to_string),
            title: metadata.as_ref().map(|m| m.title.clone()),
            description: metadata.as_ref().map(|m| m.description.clone()),
            tags: tags.map(split_tags).unwrap_or_default(),
            collection_name: collection_name
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            service_used: Some(service.to_string()),
            is_safe: safety.is_safe,
            metadata: metadata
                .as_ref()
                .map(|m| {
                    serde_json::json!({
                        "domain": m.domain,
                        "content_type": m.content_type,
                        "status_code": m.status_code,
                    })
                })
                .unwrap_or(serde_json::Value::Null),
        };
        self.store()?.save_url(record)?;

        Ok(ShortenReport {
            original: url,
            shortened,
            service: service.to_string(),
            custom_alias: alias.map(str::to_string),
        })
    }

    /// Shorten a newline/comma-joined list of URLs.
    ///
    /// More than [`BATCH_MAX_URLS`] URLs is a rejection with zero rows
    /// persisted. Per-URL failures are recorded in the report and do not
    /// abort the batch. Batch items skip the metadata scrape; callers wanting
    /// details fetch them separately.
    pub(crate) async fn shorten_batch(
        &self,
        urls: &str,
        collection_name: Option<&str>,
        tags: Option<&str>,
    ) -> Result<BatchReport, ToolError> {
        let parsed: Vec<String> = urls
            .split(['\n', ','])
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(normalize_url)
            .collect();

        if parsed.is_empty() {
            return Err(ToolError::EmptyBatch);
        }
        if parsed.len() > BATCH_MAX_URLS {
            return Err(ToolError::BatchTooLarge { count: parsed.len(), max: BATCH_MAX_URLS });
        }

        let collection = collection_name.filter(|c| !c.is_empty());
        let tag_list = tags.map(split_tags).unwrap_or_default();

        let mut items = Vec::with_capacity(parsed.len());
        let mut succeeded = 0;

        for url in &parsed {
            match self.shorten_via_chain(url).await {
                Ok((shortened, service)) => {
                    let record = NewUrl {
                        original_url: url.clone(),
                        shortened_url: shortened.clone(),
                        tags: tag_list.clone(),
                        collection_name: collection.map(str::to_string),
                        service_used: Some(service.to_string()),
                        is_safe: safety::check_url_safety(url).is_safe,
                        metadata: serde_json::Value::Null,
                        ..Default::default()
                    };
                    self.store()?.save_url(record)?;
                    succeeded += 1;
                    items.push(BatchItem {
                        original: url.clone(),
                        shortened: Some(shortened),
                        service: Some(service.to_string()),
                        error: None,
                    });
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "batch item failed");
                    items.push(BatchItem {
                        original: url.clone(),
                        shortened: None,
                        service: None,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        Ok(BatchReport {
            requested: parsed.len(),
            succeeded,
            collection_name: collection.map(str::to_string),
            items,
        })
    }

    /// Try each shortening service in order; first success wins.
    async fn shorten_via_chain(&self, url: &str) -> Result<(String, &'static str), ToolError> {
        let config = self.config();
        let services: [(&'static str, String, Vec<(&str, &str)>); 3] = [
            ("TinyURL", config.tinyurl_api.clone(), vec![("url", url)]),
            ("Chilp.it", config.chilpit_api.clone(), vec![("url", url)]),
            ("V.gd", config.vgd_api.clone(), vec![("format", "simple"), ("url", url)]),
        ];

        let mut last_error = String::from("no services configured");

        for (name, endpoint, query) in services {
            match self.call_text_service(&endpoint, &query).await {
                Ok(shortened) => {
                    debug!(service = name, url = %url, shortened = %shortened, "shortened");
                    return Ok((shortened, name));
                }
                Err(e) => {
                    debug!(service = name, url = %url, error = %e, "service failed");
                    last_error = e.to_string();
                }
            }
        }

        Err(ToolError::AllServicesFailed(last_error))
    }

    /// One plain-text shortening API call. Success is a 2xx response whose
    /// body looks like a URL.
    async fn call_text_service(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<String, ToolError> {
        let response = self.http().get(endpoint).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::Service(format!("HTTP {status} from {endpoint}")));
        }

        let body = response.text().await?.trim().to_string();
        if body.starts_with("http://") || body.starts_with("https://") {
            Ok(body)
        } else {
            Err(ToolError::Service(format!("unexpected response: {body}")))
        }
    }

    /// Create a custom-alias short URL through the v.gd JSON API.
    async fn shorten_vgd_alias(&self, url: &str, alias: &str) -> Result<String, ToolError> {
        let response = self
            .http()
            .get(&self.config().vgd_api)
            .query(&[("url", url), ("shorturl", alias), ("format", "json")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::Service(format!("HTTP {status} from V.gd")));
        }

        let parsed: VgdResponse = response
            .json()
            .await
            .map_err(|e| ToolError::Service(format!("invalid response from V.gd: {e}")))?;

        if let Some(shorturl) = parsed.shorturl {
            return Ok(shorturl);
        }
        match parsed.errorcode {
            Some(VGD_ALIAS_TAKEN) => Err(ToolError::AliasTaken(alias.to_string())),
            _ => Err(ToolError::Service(format!(
                "V.gd service error: {}",
                parsed.errormessage.unwrap_or_else(|| "unknown error".to_string())
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vgd_response_shapes() {
        let ok: VgdResponse = serde_json::from_str(r#"{"shorturl": "https://v.gd/abc"}"#).unwrap();
        assert_eq!(ok.shorturl.as_deref(), Some("https://v.gd/abc"));

        let taken: VgdResponse =
            serde_json::from_str(r#"{"errorcode": 2, "errormessage": "alias taken"}"#).unwrap();
        assert_eq!(taken.errorcode, Some(2));
        assert!(taken.shorturl.is_none());
    }
}
