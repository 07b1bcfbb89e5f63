//! Keyword-based intent classification.
//!
//! An explicit ranked rule table: the first tier whose keyword appears in
//! the lowercased text wins, so a request containing both "check" and
//! "shorten" always classifies as [`Intent::Validate`]. When no tier
//! matches, the URL count decides.

/// The four workflow categories, chosen exactly once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Reachability checks only
    Validate,
    /// Shorten many URLs, then cascade into analysis and organization
    BatchProcess,
    /// Metadata, safety, and opportunistic QR generation
    ContentAnalysis,
    /// Collection creation only
    Organize,
}

/// The rule table, in priority order. A keyword from an earlier tier always
/// beats one from a later tier.
const INTENT_RULES: [(&[&str], Intent); 5] = [
    (&["validate", "check", "verify", "test"], Intent::Validate),
    (&["shorten", "short", "compress"], Intent::BatchProcess),
    (&["analyze", "metadata", "info", "details"], Intent::ContentAnalysis),
    (&["organize", "collection", "group", "categorize"], Intent::Organize),
    (&["curate", "research", "study"], Intent::ContentAnalysis),
];

/// Classify one request. Total over all inputs.
pub fn classify(input: &str, url_count: usize) -> Intent {
    let lowered = input.to_lowercase();
    for (keywords, intent) in INTENT_RULES {
        if keywords.iter().any(|k| lowered.contains(k)) {
            return intent;
        }
    }
    // No keyword matched: fall back on the URL count
    match url_count {
        0 => Intent::Validate,
        1 => Intent::ContentAnalysis,
        _ => Intent::BatchProcess,
    }
}
