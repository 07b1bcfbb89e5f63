//! Heuristic URL safety check.
//!
//! A deliberate placeholder, not a real classifier: a small suspicious-domain
//! substring list plus structural checks on the URL. The threshold is part of
//! the contract: `is_safe` requires no suspicious-domain hit and at most one
//! warning.

use linkwell_domain::{RiskLevel, SafetyReport};
use url::Url;

const SUSPICIOUS_DOMAINS: &[&str] =
    &["malware-site.com", "phishing-example.org", "suspicious-domain.net"];

const SUSPICIOUS_PARAMS: &[&str] = &["redirect", "goto", "url", "link", "forward"];

const MAX_URL_LEN: usize = 200;
const MAX_PATH_SEGMENTS: usize = 10;

pub(crate) fn check_url_safety(url: &str) -> SafetyReport {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => {
            return SafetyReport {
                url: url.to_string(),
                domain: String::new(),
                is_safe: false,
                risk_level: RiskLevel::High,
                warnings: vec!["Failed to analyze URL safety".to_string()],
            };
        }
    };

    let domain = parsed.host_str().unwrap_or_default().to_lowercase();
    let mut warnings = Vec::new();
    let mut domain_hit = false;

    for suspicious in SUSPICIOUS_DOMAINS {
        if domain.contains(suspicious) {
            warnings.push(format!("Domain '{domain}' matches suspicious pattern"));
            domain_hit = true;
        }
    }

    if url.len() > MAX_URL_LEN {
        warnings.push("URL is unusually long".to_string());
    }

    if url.matches('/').count() > MAX_PATH_SEGMENTS {
        warnings.push("URL has suspicious number of path segments".to_string());
    }

    let query = parsed.query().unwrap_or_default().to_lowercase();
    for param in SUSPICIOUS_PARAMS {
        if query.contains(param) {
            warnings.push(format!("URL contains potentially suspicious parameter: {param}"));
        }
    }

    if parsed.scheme() != "https" {
        warnings.push("URL is not using secure HTTPS protocol".to_string());
    }

    SafetyReport {
        url: url.to_string(),
        domain,
        // One minor warning is allowed; a suspicious domain never is.
        is_safe: !domain_hit && warnings.len() <= 1,
        risk_level: RiskLevel::from_warning_count(warnings.len()),
        warnings,
    }
}
