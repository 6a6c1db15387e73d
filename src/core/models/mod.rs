//! Domain models for content-bridge
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Item`] - A content record (id, title, slug)
//! - [`FallbackMode`] - What to render when nothing matched
//! - [`LimitBounds`] - The range a limit is clamped into

mod fallback;
mod item;
mod limit;

pub use fallback::FallbackMode;
pub use item::{Item, ItemId};
pub use limit::{LimitBounds, LimitError};
