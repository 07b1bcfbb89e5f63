//! Typed tool reports.
//!
//! Every tool operation returns one of these structs. The workflow layer
//! consumes the typed fields directly; the `Display` impls render the legacy
//! text reports, preserving the marker lines (`Title:`, `Domain:`,
//! `Description:`) and the ✅/❌/⚠️ status glyphs that the original text-only
//! tool surface exposed. Nothing in this codebase parses those markers back
//! out of a string.

use crate::record::{Collection, UrlRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Heuristic risk level for a URL safety check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// At most one warning
    Low,
    /// Two or three warnings
    Medium,
    /// More than three warnings
    High,
}

impl RiskLevel {
    /// Derive the risk level from a warning count.
    pub fn from_warning_count(count: usize) -> Self {
        match count {
            0 | 1 => RiskLevel::Low,
            2 | 3 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// Result of a format + reachability check.
///
/// An invalid or unreachable URL is still a report, not an error: validation
/// is a total operation from the caller's point of view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// The URL as checked (scheme prepended when it was missing)
    pub url: String,
    /// Whether the URL parses as a well-formed absolute URL with a host
    pub is_valid: bool,
    /// Whether a HEAD request came back with a status below 400
    pub is_reachable: bool,
    /// Status code of the final response, when one was received
    pub status_code: Option<u16>,
    /// URL after following redirects, when a response was received
    pub final_url: Option<String>,
    /// Whether the final URL differs from the requested one
    pub redirected: bool,
    /// Description of the format failure, when invalid
    pub error: Option<String>,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid {
            write!(f, "❌ Invalid URL format\nURL: {}", self.url)?;
            if let Some(error) = &self.error {
                write!(f, "\nError: {error}")?;
            }
            return Ok(());
        }
        if self.is_reachable {
            write!(f, "✅ URL is valid and reachable\nURL: {}", self.url)?;
        } else {
            write!(f, "⚠️ URL is valid but not reachable\nURL: {}", self.url)?;
        }
        if let Some(code) = self.status_code {
            write!(f, "\nStatus code: {code}")?;
        }
        if let Some(final_url) = &self.final_url {
            write!(f, "\nFinal URL: {final_url}")?;
        }
        write!(f, "\nRedirected: {}", if self.redirected { "yes" } else { "no" })
    }
}

/// Result of a successful single-URL shorten.
///
/// Failures (alias taken, every service down) surface as errors from the
/// tool layer, not as report states.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenReport {
    /// The URL that was shortened
    pub original: String,
    /// The shortened URL
    pub shortened: String,
    /// Display name of the service that produced the short URL
    pub service: String,
    /// The custom alias, when one was requested
    pub custom_alias: Option<String>,
}

impl fmt::Display for ShortenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.custom_alias.is_some() {
            write!(f, "✅ URL successfully shortened with custom alias!\n")?;
        } else {
            write!(f, "✅ URL successfully shortened!\n")?;
        }
        write!(
            f,
            "Service: {}\nOriginal: {}\nShortened: {}",
            self.service, self.original, self.shortened
        )?;
        if let Some(alias) = &self.custom_alias {
            write!(f, "\nCustom alias: {alias}")?;
        }
        Ok(())
    }
}

/// Per-URL outcome within a batch shorten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItem {
    /// The URL submitted for shortening
    pub original: String,
    /// Shortened URL, on success
    pub shortened: Option<String>,
    /// Service that produced the short URL, on success
    pub service: Option<String>,
    /// Failure description, on failure
    pub error: Option<String>,
}

/// Result of a batch shorten call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Number of URLs submitted
    pub requested: usize,
    /// Number of URLs shortened and persisted
    pub succeeded: usize,
    /// Collection the batch was filed under, if any
    pub collection_name: Option<String>,
    /// Per-URL outcomes in submission order
    pub items: Vec<BatchItem>,
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "📊 Batch shortening complete: {}/{} URLs shortened",
            self.succeeded, self.requested
        )?;
        if let Some(collection) = &self.collection_name {
            write!(f, "\nCollection: {collection}")?;
        }
        for item in &self.items {
            match (&item.shortened, &item.error) {
                (Some(short), _) => write!(f, "\n✅ {} -> {}", item.original, short)?,
                (None, Some(error)) => write!(f, "\n❌ {}: {}", item.original, error)?,
                (None, None) => write!(f, "\n❌ {}", item.original)?,
            }
        }
        Ok(())
    }
}

/// Metadata scraped from a URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataReport {
    /// The URL that was fetched
    pub url: String,
    /// Page title (og:title, twitter:title, then `<title>`); may be empty
    pub title: String,
    /// Page description (og, twitter, then meta description); may be empty
    pub description: String,
    /// Host portion of the URL
    pub domain: String,
    /// Whether the URL uses HTTPS
    pub is_secure: bool,
    /// Favicon URL resolved against the page URL
    pub favicon_url: Option<String>,
    /// Preview image URL (og:image or twitter:image)
    pub image_url: Option<String>,
    /// Content-Type header of the response
    pub content_type: Option<String>,
    /// Size of the response body in bytes
    pub content_length: usize,
    /// HTTP status of the response
    pub status_code: u16,
}

impl fmt::Display for MetadataReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "📄 URL Metadata\nURL: {}", self.url)?;
        write!(f, "\nTitle: {}", self.title)?;
        write!(f, "\nDescription: {}", self.description)?;
        write!(f, "\nDomain: {}", self.domain)?;
        write!(f, "\nSecure: {}", if self.is_secure { "yes" } else { "no" })?;
        if let Some(content_type) = &self.content_type {
            write!(f, "\nContent-Type: {content_type}")?;
        }
        write!(f, "\nContent length: {} bytes", self.content_length)?;
        write!(f, "\nStatus code: {}", self.status_code)?;
        if let Some(favicon) = &self.favicon_url {
            write!(f, "\nFavicon: {favicon}")?;
        }
        if let Some(image) = &self.image_url {
            write!(f, "\nPreview image: {image}")?;
        }
        Ok(())
    }
}

/// Result of the heuristic safety check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyReport {
    /// The URL that was checked
    pub url: String,
    /// Lowercased host portion of the URL
    pub domain: String,
    /// No suspicious-domain hit and at most one warning
    pub is_safe: bool,
    /// Risk tier derived from the warning count
    pub risk_level: RiskLevel,
    /// Human-readable warnings, possibly empty
    pub warnings: Vec<String>,
}

impl fmt::Display for SafetyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_safe {
            write!(f, "✅ URL appears safe")?;
        } else {
            write!(f, "⚠️ URL has safety warnings")?;
        }
        write!(f, "\nURL: {}\nDomain: {}", self.url, self.domain)?;
        write!(f, "\nRisk level: {}", self.risk_level)?;
        for warning in &self.warnings {
            write!(f, "\n• {warning}")?;
        }
        Ok(())
    }
}

/// A generated QR code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrReport {
    /// The encoded URL
    pub url: String,
    /// Image format of the payload
    pub format: String,
    /// Image dimensions, e.g. `29x29`
    pub dimensions: String,
    /// Base64-encoded image payload
    pub base64: String,
}

impl fmt::Display for QrReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "✅ QR Code Generated\nURL: {}\nFormat: {}\nSize: {}\ndata:image/svg+xml;base64,{}",
            self.url, self.format, self.dimensions, self.base64
        )
    }
}

/// Result of expanding a shortened URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpansionReport {
    /// The shortened URL that was expanded
    pub shortened: String,
    /// Final destination after following redirects
    pub final_url: String,
    /// Intermediate URLs visited, in order
    pub redirect_chain: Vec<String>,
    /// Number of redirect hops
    pub redirect_count: usize,
    /// HTTP status of the final response
    pub status_code: u16,
}

impl fmt::Display for ExpansionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "🔗 URL Expansion\nShortened: {}\nFinal URL: {}\nRedirects: {}\nStatus code: {}",
            self.shortened, self.final_url, self.redirect_count, self.status_code
        )?;
        for hop in &self.redirect_chain {
            write!(f, "\n  -> {hop}")?;
        }
        Ok(())
    }
}

/// Result of a collection-creation attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionReport {
    /// The collection name
    pub name: String,
    /// True when a new row was created; false when the name already existed
    pub created: bool,
}

impl fmt::Display for CollectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.created {
            write!(f, "✅ Collection '{}' created", self.name)
        } else {
            write!(f, "❌ Collection '{}' already exists", self.name)
        }
    }
}

/// A page of stored URL records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlListing {
    /// Matching records, newest first
    pub records: Vec<UrlRecord>,
}

impl fmt::Display for UrlListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "No saved URLs found");
        }
        write!(f, "📋 {} saved URL(s)", self.records.len())?;
        for record in &self.records {
            write!(f, "\n• {} -> {}", record.original_url, record.shortened_url)?;
            if let Some(title) = &record.title {
                if !title.is_empty() {
                    write!(f, "\n  Title: {title}")?;
                }
            }
            if let Some(collection) = &record.collection_name {
                write!(f, "\n  Collection: {collection}")?;
            }
            if !record.tags.is_empty() {
                write!(f, "\n  Tags: {}", record.tags.join(", "))?;
            }
        }
        Ok(())
    }
}

/// All known collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionListing {
    /// Collections, newest first
    pub collections: Vec<Collection>,
}

impl fmt::Display for CollectionListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.collections.is_empty() {
            return write!(f, "No collections found");
        }
        write!(f, "📁 {} collection(s)", self.collections.len())?;
        for collection in &self.collections {
            write!(f, "\n• {}", collection.name)?;
            if let Some(description) = &collection.description {
                if !description.is_empty() {
                    write!(f, ": {description}")?;
                }
            }
        }
        Ok(())
    }
}
