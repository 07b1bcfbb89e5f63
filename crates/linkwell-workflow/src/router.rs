//! Intent-to-stage routing.

use crate::intent::Intent;

/// One step of a pipeline. Every sequence ends with [`Stage::Summary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Sequential per-URL reachability checks
    ValidateUrls,
    /// One batch shorten call, then capped per-URL detail
    ProcessBatch,
    /// Metadata + safety (+ opportunistic QR) for capped URLs
    AnalyzeContent,
    /// Ensure a collection exists, synthesizing a name if needed
    OrganizeUrls,
    /// Render the final report; always last, runs no external calls
    Summary,
}

const VALIDATE_STAGES: &[Stage] = &[Stage::ValidateUrls, Stage::Summary];
const BATCH_STAGES: &[Stage] =
    &[Stage::ProcessBatch, Stage::AnalyzeContent, Stage::OrganizeUrls, Stage::Summary];
const ANALYSIS_STAGES: &[Stage] = &[Stage::AnalyzeContent, Stage::OrganizeUrls, Stage::Summary];
const ORGANIZE_STAGES: &[Stage] = &[Stage::OrganizeUrls, Stage::Summary];

/// Map an intent to its fixed stage sequence.
///
/// Batch always cascades into analysis and organization. The wildcard arm
/// keeps batch processing as the route for any intent added later.
pub fn route(intent: Intent) -> &'static [Stage] {
    match intent {
        Intent::Validate => VALIDATE_STAGES,
        Intent::ContentAnalysis => ANALYSIS_STAGES,
        Intent::Organize => ORGANIZE_STAGES,
        _ => BATCH_STAGES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_are_fixed() {
        assert_eq!(route(Intent::Validate), VALIDATE_STAGES);
        assert_eq!(route(Intent::BatchProcess), BATCH_STAGES);
        assert_eq!(route(Intent::ContentAnalysis), ANALYSIS_STAGES);
        assert_eq!(route(Intent::Organize), ORGANIZE_STAGES);
    }

    #[test]
    fn test_every_route_ends_in_summary() {
        for intent in
            [Intent::Validate, Intent::BatchProcess, Intent::ContentAnalysis, Intent::Organize]
        {
            assert_eq!(route(intent).last(), Some(&Stage::Summary));
        }
    }
}
