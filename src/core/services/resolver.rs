//! Fallback resolver - picks the list to render
//!
//! The decision only looks at whether the matched list is empty. Item
//! contents never influence it, and the chosen list is returned as-is.

use std::fmt;

use crate::core::models::FallbackMode;

/// Choose the list to render
///
/// Returns `matched` when it has any items, otherwise `latest` for
/// [`FallbackMode::Latest`] or an empty slice for [`FallbackMode::None`].
/// The result always borrows from one of the inputs (or is the empty
/// slice); nothing is copied, merged or truncated.
#[must_use]
pub fn resolve<'a, T>(matched: &'a [T], latest: &'a [T], mode: FallbackMode) -> &'a [T] {
    if !matched.is_empty() {
        return matched;
    }
    match mode {
        FallbackMode::Latest => latest,
        FallbackMode::None => &[],
    }
}

/// How a resolution was reached, for display next to the rendered list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStatus {
    /// The filter matched this many items
    Matched {
        /// Number of matched items
        count: usize,
    },
    /// Nothing matched, so the fallback mode decided
    Fallback {
        /// Mode that was applied
        mode: FallbackMode,
    },
}

impl ResolutionStatus {
    /// Derive the status for a matched list and fallback mode
    #[must_use]
    pub const fn of<T>(matched: &[T], mode: FallbackMode) -> Self {
        if matched.is_empty() {
            Self::Fallback { mode }
        } else {
            Self::Matched {
                count: matched.len(),
            }
        }
    }

    /// Whether the filter produced any items
    #[must_use]
    pub const fn is_matched(self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

impl fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matched { count } => write!(f, "Matched: {count}"),
            Self::Fallback { mode } => write!(f, "No match → fallback: {mode}"),
        }
    }
}
