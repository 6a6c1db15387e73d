//! In-memory item source
//!
//! Holds items directly. Used for the built-in sample posts and in tests.

use crate::core::models::Item;
use crate::core::ports::ItemSource;

/// Item source over a fixed list of items
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    items: Vec<Item>,
}

impl StaticSource {
    /// Create a source over the given items
    #[must_use]
    pub const fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// The built-in sample posts, used when no dataset is configured
    #[must_use]
    pub fn sample() -> Self {
        Self::new(vec![
            Item::new(1, "Hello World", "hello-world"),
            Item::new(2, "Shopify x WordPress", "shopify-wp"),
        ])
    }
}

impl ItemSource for StaticSource {
    fn name(&self) -> &str {
        "built-in sample"
    }

    fn items(&self) -> anyhow::Result<Vec<Item>> {
        Ok(self.items.clone())
    }
}
