//! Item model
//!
//! An item is an opaque content record. The resolver only moves whole items
//! between lists; the taxonomy keys are read by the term filter alone.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Identifier of an item
///
/// Datasets use both numeric and textual ids, so both are accepted. Any
/// JSON number is a valid numeric id, including negative and fractional ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Numeric id (e.g., a `WordPress` post id)
    Number(Number),
    /// Textual id
    Text(String),
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A content record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,

    /// Display title
    pub title: String,

    /// URL-safe identifier
    pub slug: String,

    /// Taxonomy key (e.g., "category")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<String>,

    /// Term key within the taxonomy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
}

impl Item {
    /// Create an item without taxonomy keys
    #[must_use]
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
            tax: None,
            term: None,
        }
    }

    /// Attach a taxonomy/term pair
    #[must_use]
    pub fn with_term(mut self, tax: impl Into<String>, term: impl Into<String>) -> Self {
        self.tax = Some(tax.into());
        self.term = Some(term.into());
        self
    }
}
