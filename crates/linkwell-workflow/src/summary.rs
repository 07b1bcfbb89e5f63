//! Summary rendering.
//!
//! A pure formatting fold over the final [`WorkflowState`]: no external
//! calls, no mutation beyond the returned string. Layout follows the
//! original report surface (header block, per-intent results section,
//! errors, recommendations).

use crate::intent::Intent;
use crate::state::{OutcomeStatus, WorkflowState};
use crate::stages::PER_URL_DETAIL_CAP;
use chrono::Local;
use std::fmt::Write;

fn intent_label(intent: Option<Intent>) -> &'static str {
    match intent {
        Some(Intent::Validate) => "Validate",
        Some(Intent::BatchProcess) => "Batch Process",
        Some(Intent::ContentAnalysis) => "Content Analysis",
        Some(Intent::Organize) => "Organize",
        None => "Unknown",
    }
}

/// Truncate on a character boundary, appending an ellipsis when shortened.
fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}...")
    }
}

/// Render the final report.
pub fn render(state: &WorkflowState) -> String {
    let mut out = String::from("# 📊 Smart URL Manager Workflow Results\n\n");
    let _ = writeln!(out, "**Operation**: {}", intent_label(state.intent));
    let _ = writeln!(out, "**URLs Processed**: {}", state.urls.len());
    let _ = writeln!(out, "**Timestamp**: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    out.push('\n');

    if let Some(collection) = &state.collection_name {
        let _ = writeln!(out, "**Collection**: {collection}");
    }
    if let Some(tags) = &state.tags {
        let _ = writeln!(out, "**Tags**: {tags}");
    }

    out.push_str("\n## 📋 Results\n\n");
    match state.intent {
        Some(Intent::Validate) => render_validation(&mut out, state),
        Some(Intent::BatchProcess) => render_batch(&mut out, state),
        Some(Intent::ContentAnalysis) => render_analysis(&mut out, state),
        Some(Intent::Organize) => render_organization(&mut out, state),
        None => {}
    }

    if !state.errors.is_empty() {
        out.push_str("## ⚠️ Errors Encountered\n\n");
        for error in &state.errors {
            let _ = writeln!(out, "• {error}");
        }
        out.push('\n');
    }

    out.push_str("## 💡 Recommendations\n\n");
    match state.intent {
        Some(Intent::Validate) => {
            out.push_str("• Consider using the batch shortening feature for valid URLs\n");
            out.push_str("• Review any failed validations and check URL formats\n");
        }
        Some(Intent::BatchProcess) => {
            out.push_str("• URLs have been shortened and organized in your collection\n");
            out.push_str("• Use search functionality to find specific URLs later\n");
        }
        Some(Intent::ContentAnalysis) => {
            out.push_str("• Consider organizing analyzed URLs into themed collections\n");
            out.push_str("• Generate QR codes for frequently accessed URLs\n");
        }
        _ => {}
    }
    out.push_str("• Use `list_my_urls` to view all your saved URLs\n");
    out.push_str("• Use `search_urls` to find specific content\n");

    out
}

fn render_validation(out: &mut String, state: &WorkflowState) {
    let validated =
        state.results.iter().filter(|o| o.status == OutcomeStatus::Validated).count();
    let _ = writeln!(
        out,
        "✅ **Validation Results**: {}/{} URLs validated successfully\n",
        validated,
        state.results.len()
    );

    for outcome in &state.results {
        match &outcome.validation {
            Some(report) if report.is_valid && report.is_reachable => {
                let _ = writeln!(out, "✅ **{}**: Valid and reachable", outcome.url);
            }
            Some(report) if !report.is_valid => {
                let _ = writeln!(out, "❌ **{}**: Validation failed", outcome.url);
            }
            Some(_) => {
                let _ = writeln!(out, "ℹ️ **{}**: Validation completed", outcome.url);
            }
            None => {
                let _ = writeln!(out, "❌ **{}**: Validation failed", outcome.url);
            }
        }
    }
    out.push('\n');
}

fn render_batch(out: &mut String, state: &WorkflowState) {
    match &state.batch {
        Some(batch) => {
            let _ = writeln!(
                out,
                "📊 **Batch Processing**: {}/{} URLs shortened successfully\n",
                batch.succeeded, batch.requested
            );
        }
        None => out.push_str("📊 **Batch Processing**: No batch results\n\n"),
    }

    if !state.results.is_empty() {
        out.push_str("📄 **Content Analysis Summary**:\n");
        for outcome in state.results.iter().take(PER_URL_DETAIL_CAP) {
            match &outcome.metadata {
                Some(metadata) if !metadata.title.is_empty() => {
                    let _ =
                        writeln!(out, "• **{}** ({})", clip(&metadata.title, 50), outcome.url);
                }
                _ => {
                    let _ = writeln!(out, "• **{}**", outcome.url);
                }
            }
        }
        out.push('\n');
    }
}

fn render_analysis(out: &mut String, state: &WorkflowState) {
    out.push_str("📄 **Content Analysis Results**:\n\n");
    for outcome in &state.results {
        out.push_str("### URL Analysis\n");
        let _ = writeln!(out, "**URL**: {}", outcome.url);

        if let Some(metadata) = &outcome.metadata {
            if !metadata.title.is_empty() {
                let _ = writeln!(out, "**Title**: {}", metadata.title);
            }
            if !metadata.description.is_empty() {
                let _ = writeln!(out, "**Description**: {}", clip(&metadata.description, 100));
            }
        }
        if let Some(safety) = &outcome.safety {
            if safety.is_safe {
                out.push_str("**Safety**: ✅ Safe\n");
            } else {
                out.push_str("**Safety**: ⚠️ Warning\n");
            }
        }
        if outcome.qr_generated {
            out.push_str("**QR Code**: Generated\n");
        }
        if let Some(error) = &outcome.error {
            let _ = writeln!(out, "**Error**: {error}");
        }
        out.push('\n');
    }
}

fn render_organization(out: &mut String, state: &WorkflowState) {
    out.push_str("🗂️ **Organization Results**:\n");
    let _ = writeln!(
        out,
        "Collection: {}",
        state.collection_name.as_deref().unwrap_or("None")
    );
    let _ = writeln!(out, "URLs organized: {}\n", state.results.len());
}
