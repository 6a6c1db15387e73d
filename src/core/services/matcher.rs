//! Term matcher service - matches items against a taxonomy/term filter
//!
//! This module contains pure matching logic with no I/O dependencies.
//! Matching is whole-key equality after trimming; case folding is an
//! explicit choice of the caller.

use crate::core::models::Item;

/// Case policy for comparing taxonomy and term keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchCase {
    /// Keys must be byte-for-byte equal
    #[default]
    Exact,
    /// Keys are lowercased before comparing
    Insensitive,
}

impl MatchCase {
    /// Pick a policy from a `case_insensitive` flag
    #[must_use]
    pub const fn from_flag(case_insensitive: bool) -> Self {
        if case_insensitive { Self::Insensitive } else { Self::Exact }
    }
}

/// A taxonomy/term filter built from raw user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermFilter {
    tax: String,
    term: String,
    case: MatchCase,
}

impl TermFilter {
    /// Build a filter from raw input, trimming both keys
    #[must_use]
    pub fn new(tax: &str, term: &str, case: MatchCase) -> Self {
        let fold = |s: &str| match case {
            MatchCase::Exact => s.trim().to_string(),
            MatchCase::Insensitive => s.trim().to_lowercase(),
        };
        Self {
            tax: fold(tax),
            term: fold(term),
            case,
        }
    }

    /// Normalized taxonomy key
    #[must_use]
    pub fn tax(&self) -> &str {
        &self.tax
    }

    /// Normalized term key
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// A filter with a blank key matches nothing
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.tax.is_empty() || self.term.is_empty()
    }

    /// Check whether an item carries this taxonomy/term pair
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        if self.is_blank() {
            return false;
        }
        let (Some(tax), Some(term)) = (item.tax.as_deref(), item.term.as_deref()) else {
            return false;
        };
        self.key_eq(&self.tax, tax) && self.key_eq(&self.term, term)
    }

    fn key_eq(&self, wanted: &str, actual: &str) -> bool {
        match self.case {
            MatchCase::Exact => actual == wanted,
            MatchCase::Insensitive => actual.trim().to_lowercase() == wanted,
        }
    }
}
