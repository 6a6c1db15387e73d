//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the pure resolution core
//! and the collaborators that feed it.
//!
//! Implementations live in the `adapters` module.

mod item_source;

pub use item_source::ItemSource;
