//! Business logic services
//!
//! Pure logic that operates on domain models. Only [`query`] touches a
//! port, and only to load items.
//!
//! - [`sanitizer`] - Bound a raw limit
//! - [`resolver`] - Pick matched or fallback items
//! - [`matcher`] - Match items against a taxonomy/term filter
//! - [`query`] - Compose the three into one query cycle

pub mod matcher;
pub mod query;
pub mod resolver;
pub mod sanitizer;

pub use matcher::{MatchCase, TermFilter};
pub use query::{Candidates, Query, Resolution, run_query, select_candidates};
pub use resolver::{ResolutionStatus, resolve};
pub use sanitizer::sanitize_limit;
