//! Page metadata scraping.
//!
//! Fetches the page and recovers title, description, favicon and preview
//! image from the usual meta tags, preferring OpenGraph over Twitter over
//! plain HTML, as the original tool layer did.

use crate::{normalize_url, ToolError, UrlTools};
use linkwell_domain::MetadataReport;
use scraper::{Html, Selector};
use url::Url;

impl UrlTools {
    pub(crate) async fn fetch_metadata(&self, raw: &str) -> Result<MetadataReport, ToolError> {
        let url = normalize_url(raw);
        let parsed =
            Url::parse(&url).map_err(|e| ToolError::InvalidUrl(format!("{url}: {e}")))?;

        let response = self.http().get(parsed.clone()).send().await?.error_for_status()?;

        let status_code = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        let scraped = scrape(&body, &parsed);

        Ok(MetadataReport {
            domain: parsed.host_str().unwrap_or_default().to_string(),
            is_secure: parsed.scheme() == "https",
            url,
            title: scraped.title,
            description: scraped.description,
            favicon_url: scraped.favicon_url,
            image_url: scraped.image_url,
            content_type,
            content_length: body.len(),
            status_code,
        })
    }
}

struct ScrapedMeta {
    title: String,
    description: String,
    favicon_url: Option<String>,
    image_url: Option<String>,
}

fn scrape(html: &str, base: &Url) -> ScrapedMeta {
    let doc = Html::parse_document(html);

    let title = meta_content(&doc, r#"meta[property="og:title"]"#)
        .or_else(|| meta_content(&doc, r#"meta[name="twitter:title"]"#))
        .or_else(|| element_text(&doc, "title"))
        .unwrap_or_default();

    let description = meta_content(&doc, r#"meta[property="og:description"]"#)
        .or_else(|| meta_content(&doc, r#"meta[name="twitter:description"]"#))
        .or_else(|| meta_content(&doc, r#"meta[name="description"]"#))
        .unwrap_or_default();

    let favicon_url = link_href(&doc, r#"link[rel="icon"]"#)
        .or_else(|| link_href(&doc, r#"link[rel="shortcut icon"]"#))
        .and_then(|href| base.join(&href).ok())
        .map(|u| u.to_string());

    let image_url = meta_content(&doc, r#"meta[property="og:image"]"#)
        .or_else(|| meta_content(&doc, r#"meta[name="twitter:image"]"#))
        .and_then(|src| base.join(&src).ok())
        .map(|u| u.to_string());

    ScrapedMeta { title, description, favicon_url, image_url }
}

fn meta_content(doc: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

fn element_text(doc: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    doc.select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
}

fn link_href(doc: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(str::to_string)
}
