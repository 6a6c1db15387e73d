//! JSON file item source
//!
//! Implements the `ItemSource` port trait over a JSON dataset file.
//! The file is read on every call, so re-running a query picks up edits.

use std::path::{Path, PathBuf};

use log::debug;

use crate::core::models::Item;
use crate::core::ports::ItemSource;

use super::parser::load_file;

/// Item source backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonDataset {
    path: PathBuf,
    name: String,
}

impl JsonDataset {
    /// Create a source for the given file
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    /// Path of the dataset file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemSource for JsonDataset {
    fn name(&self) -> &str {
        &self.name
    }

    fn items(&self) -> anyhow::Result<Vec<Item>> {
        debug!("Reading dataset {}", self.path.display());
        Ok(load_file(&self.path)?)
    }
}
