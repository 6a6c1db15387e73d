//! JSON dataset parser
//!
//! Reads a top-level JSON array of items (the `wp-posts.json` shape).
//! Unknown fields on each record are ignored.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::core::models::Item;

/// Errors that can occur while loading a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Dataset file does not exist
    #[error("dataset not found: {0}")]
    NotFound(PathBuf),

    /// Dataset file could not be read
    #[error("failed to read dataset {path}: {source}")]
    Io {
        /// Offending file
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Content is not valid JSON or a record is malformed
    #[error("invalid dataset {origin}: {source}")]
    Parse {
        /// Where the content came from
        origin: String,
        /// Underlying error
        source: serde_json::Error,
    },

    /// Top-level value is not an array
    #[error("invalid dataset {origin}: expected a JSON array of items, found {found}")]
    NotAnArray {
        /// Where the content came from
        origin: String,
        /// Kind of value that was found
        found: &'static str,
    },
}

/// Parse items from JSON text
///
/// `origin` names the content in error messages (usually a path).
pub fn parse_items(content: &str, origin: &str) -> Result<Vec<Item>, DatasetError> {
    let parse_err = |source| DatasetError::Parse {
        origin: origin.to_string(),
        source,
    };

    let value: Value = serde_json::from_str(content).map_err(parse_err)?;
    if !value.is_array() {
        return Err(DatasetError::NotAnArray {
            origin: origin.to_string(),
            found: value_kind(&value),
        });
    }
    serde_json::from_value(value).map_err(parse_err)
}

/// Load items from a JSON file
pub fn load_file(path: &Path) -> Result<Vec<Item>, DatasetError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            DatasetError::NotFound(path.to_path_buf())
        } else {
            DatasetError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    parse_items(&content, &path.display().to_string())
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
