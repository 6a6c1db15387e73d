//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use content_bridge::core::models::{FallbackMode, Item};
use content_bridge::core::services::{Candidates, Resolution};
use content_bridge::output::{ItemView, OutputMode, ResolveReport, format_item_list};

use crate::common::items;

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// ResolveReport Tests
// =============================================================================

#[test]
fn report_from_matched_resolution() {
    let candidates = Candidates {
        matched: items(2),
        latest: items(4),
    };
    let report = ResolveReport::from(&Resolution::new(4, FallbackMode::Latest, candidates));

    assert_eq!(report.status, "Matched: 2");
    assert_eq!(report.matched_count, 2);
    assert_eq!(report.items, report.matched);
}

#[test]
fn report_from_fallback_resolution() {
    let candidates = Candidates {
        matched: Vec::new(),
        latest: items(3),
    };
    let report = ResolveReport::from(&Resolution::new(3, FallbackMode::Latest, candidates));

    assert_eq!(report.status, "No match → fallback: latest");
    assert_eq!(report.matched_count, 0);
    assert_eq!(report.items.len(), 3);
}

#[test]
fn report_serialization() {
    let candidates = Candidates {
        matched: Vec::new(),
        latest: vec![Item::new(7, "Hello World", "hello-world").with_term("category", "news")],
    };
    let report = ResolveReport::from(&Resolution::new(4, FallbackMode::None, candidates));

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"fallback\":\"none\""));
    assert!(json.contains("\"limit\":4"));
    assert!(json.contains("\"items\":[]"));
    assert!(!json.contains("category"));
}

#[test]
fn item_view_keeps_only_display_fields() {
    let item = Item::new(7, "Hello World", "hello-world").with_term("category", "news");
    let json = serde_json::to_string(&ItemView::from(&item)).unwrap();
    assert_eq!(json, r#"{"id":7,"title":"Hello World","slug":"hello-world"}"#);
}

// =============================================================================
// Text Rendering Tests
// =============================================================================

#[test]
fn empty_list_text() {
    let text = format_item_list("Rendered", &[]);
    assert_eq!(text, "Rendered\n  No posts found.\n");
}

#[test]
fn list_text_shows_title_and_slug() {
    let views: Vec<ItemView> = items(1).iter().map(ItemView::from).collect();
    let text = format_item_list("Rendered", &views);
    assert!(text.contains("• Post 1 [1]"));
    assert!(text.contains("slug: post-1"));
}
