//! JSON dataset adapter
//!
//! Implements `ItemSource` over JSON files.
//!
//! - [`parser`] - Read and deserialize item arrays
//! - [`dataset`] - `ItemSource` implementation

pub mod dataset;
pub mod parser;

pub use dataset::JsonDataset;
pub use parser::{DatasetError, load_file, parse_items};
