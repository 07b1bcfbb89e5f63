//! Fixed-pattern extraction of URLs, a collection name, and a tag string
//! from one line of free text.
//!
//! Three independent regexes applied once each. Best-effort: the bare-domain
//! pattern has known false positives (version strings, any dotted token with
//! a TLD-looking suffix) and that is accepted.

use regex::Regex;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // URL literal: scheme then everything up to whitespace or a bracket
    Regex::new(r#"https?://[^\s<>"{}|\\^`\[\]]+"#).unwrap()
});

static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // label(.label)*.tld, labels up to 63 chars, no leading/trailing hyphen
    Regex::new(r"\b(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}\b").unwrap()
});

static COLLECTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // "collection: name", name optionally quoted; quote styles spelled out
    // as alternatives since this engine has no backreferences
    Regex::new(r#"(?i)collection[:\s]+(?:"([^"\s]+)"|'([^'\s]+)'|([^"'\s]+))"#).unwrap()
});

static TAGS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // "tags: a, b, c" up to end of line, optionally quoted
    Regex::new(r#"(?i)tags?[:\s]+(?:"([^"\n]+)"|'([^'\n]+)'|([^"'\n]+))"#).unwrap()
});

/// Domains never promoted to synthesized URLs.
const EXCLUDED_DOMAINS: [&str; 2] = ["example.com", "test.com"];

/// What one pass over the input text yields.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// URLs in order of first appearance, not deduplicated
    pub urls: Vec<String>,
    /// First `collection: <name>` match, if any
    pub collection_name: Option<String>,
    /// First `tags: <run>` match, raw and unsplit, if any
    pub tags: Option<String>,
}

fn first_group(captures: &regex::Captures<'_>) -> Option<String> {
    (1..captures.len()).find_map(|i| captures.get(i)).map(|m| m.as_str().to_string())
}

/// Run all three patterns over the input once.
pub fn extract(input: &str) -> Extraction {
    let mut urls: Vec<String> =
        URL_PATTERN.find_iter(input).map(|m| m.as_str().to_string()).collect();

    // Bare domains get a synthesized https:// form, unless an already-found
    // URL contains the domain or it is on the exclusion list
    for m in DOMAIN_PATTERN.find_iter(input) {
        let domain = m.as_str();
        if EXCLUDED_DOMAINS.contains(&domain) {
            continue;
        }
        if urls.iter().any(|url| url.contains(domain)) {
            continue;
        }
        urls.push(format!("https://{domain}"));
    }

    let collection_name = COLLECTION_PATTERN.captures(input).and_then(|c| first_group(&c));
    let tags = TAGS_PATTERN.captures(input).and_then(|c| first_group(&c));

    Extraction { urls, collection_name, tags }
}
