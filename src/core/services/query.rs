//! Query service - composes sanitizer, matcher and resolver
//!
//! One call is one query/render cycle: items are loaded from a source,
//! split into matched and latest candidates bounded by the sanitized
//! limit, and handed to the resolver. Nothing is kept between calls.

use log::debug;

use super::matcher::{MatchCase, TermFilter};
use super::resolver::{ResolutionStatus, resolve};
use crate::core::models::{FallbackMode, Item, LimitBounds};
use crate::core::ports::ItemSource;

/// Raw query input, as collected from a form or command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Raw taxonomy key
    pub tax: String,
    /// Raw term key
    pub term: String,
    /// Raw limit text, if any
    pub limit: Option<String>,
    /// Fallback mode (already narrowed from user input)
    pub fallback: FallbackMode,
}

/// Matched and latest candidate lists, both limit-truncated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    /// Items carrying the filter's taxonomy/term pair
    pub matched: Vec<Item>,
    /// The first items of the dataset
    pub latest: Vec<Item>,
}

/// Split a dataset into matched and latest candidates
///
/// Both lists keep dataset order and hold at most `limit` items.
#[must_use]
pub fn select_candidates(items: &[Item], filter: &TermFilter, limit: usize) -> Candidates {
    let matched = items.iter().filter(|item| filter.matches(item)).take(limit).cloned().collect();
    let latest = items.iter().take(limit).cloned().collect();
    Candidates { matched, latest }
}

/// Outcome of one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Sanitized limit that bounded both lists
    pub limit: i64,
    /// Fallback mode that applies when nothing matched
    pub fallback: FallbackMode,
    /// Matched candidates
    pub matched: Vec<Item>,
    /// Latest candidates
    pub latest: Vec<Item>,
}

impl Resolution {
    /// Build a resolution from candidates
    #[must_use]
    pub fn new(limit: i64, fallback: FallbackMode, candidates: Candidates) -> Self {
        Self {
            limit,
            fallback,
            matched: candidates.matched,
            latest: candidates.latest,
        }
    }

    /// The list to render
    #[must_use]
    pub fn resolved(&self) -> &[Item] {
        resolve(&self.matched, &self.latest, self.fallback)
    }

    /// Status shown next to the rendered list
    #[must_use]
    pub fn status(&self) -> ResolutionStatus {
        ResolutionStatus::of(self.matched.as_slice(), self.fallback)
    }
}

/// Run one query against an item source
pub fn run_query(
    source: &dyn ItemSource,
    query: &Query,
    bounds: &LimitBounds,
    case: MatchCase,
) -> anyhow::Result<Resolution> {
    let limit = bounds.sanitize(query.limit.as_deref());
    let len = usize::try_from(limit).unwrap_or(0);

    let items = source.items()?;
    debug!("Loaded {} item(s) from {}", items.len(), source.name());

    let filter = TermFilter::new(&query.tax, &query.term, case);
    if filter.is_blank() {
        debug!("Blank tax/term, nothing can match");
    }

    let candidates = select_candidates(&items, &filter, len);
    let resolution = Resolution::new(limit, query.fallback, candidates);
    debug!("Resolved {} item(s): {}", resolution.resolved().len(), resolution.status());

    Ok(resolution)
}
