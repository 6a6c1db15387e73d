//! Item source port
//!
//! Defines the interface for loading the full item collection.

use super::super::models::Item;

/// Supplier of the full, unfiltered item collection
///
/// Implementations may read a JSON dataset, hold items in memory, or wrap
/// any other store. Filtering and truncation happen after loading.
pub trait ItemSource: Send + Sync {
    /// Short human-readable description of where items come from
    fn name(&self) -> &str;

    /// Load all items in display order
    fn items(&self) -> anyhow::Result<Vec<Item>>;
}
