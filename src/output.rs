//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Items are rendered from
//! their id, title and slug only.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{FallbackMode, Item, ItemId};
use crate::core::services::Resolution;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// The rendered view of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    /// Item id
    pub id: ItemId,
    /// Display title
    pub title: String,
    /// URL-safe identifier
    pub slug: String,
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            slug: item.slug.clone(),
        }
    }
}

/// Result of a resolve operation
#[derive(Debug, Serialize)]
pub struct ResolveReport {
    /// Status line ("Matched: N" or "No match → fallback: MODE")
    pub status: String,
    /// Number of matched items
    pub matched_count: usize,
    /// Fallback mode in effect
    pub fallback: FallbackMode,
    /// Sanitized limit
    pub limit: i64,
    /// Matched items
    pub matched: Vec<ItemView>,
    /// Items to render after fallback
    pub items: Vec<ItemView>,
}

impl From<&Resolution> for ResolveReport {
    fn from(resolution: &Resolution) -> Self {
        Self {
            status: resolution.status().to_string(),
            matched_count: resolution.matched.len(),
            fallback: resolution.fallback,
            limit: resolution.limit,
            matched: resolution.matched.iter().map(ItemView::from).collect(),
            items: resolution.resolved().iter().map(ItemView::from).collect(),
        }
    }
}

/// Result of a limit operation
#[derive(Debug, Serialize)]
pub struct LimitReport {
    /// Raw input, if any
    pub raw: Option<String>,
    /// Sanitized limit
    pub limit: i64,
    /// Lower bound
    pub min: i64,
    /// Upper bound
    pub max: i64,
    /// Default used for unparseable input
    pub default: i64,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

/// Render a titled list of items as text
#[must_use]
pub fn format_item_list(title: &str, items: &[ItemView]) -> String {
    let mut out = format!("{title}\n");
    if items.is_empty() {
        out.push_str("  No posts found.\n");
        return out;
    }
    for item in items {
        out.push_str(&format!("  • {} [{}]\n", item.title, item.id));
        out.push_str(&format!("    slug: {}\n", item.slug));
    }
    out
}

impl ResolveReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let status = if self.matched_count > 0 {
            self.status.as_str().green()
        } else {
            self.status.as_str().yellow()
        };
        println!("Status: {status} / limit used: {}\n", self.limit);
        println!("{}", format_item_list("Matched posts (tax/term)", &self.matched));
        print!("{}", format_item_list("Rendered result (after fallback)", &self.items));
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl LimitReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.limit),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
