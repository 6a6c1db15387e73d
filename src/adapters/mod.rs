//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `json/` - JSON dataset files
//! - `memory/` - In-memory items (built-in sample, tests)

pub mod json;
pub mod memory;

pub use json::JsonDataset;
pub use memory::StaticSource;
