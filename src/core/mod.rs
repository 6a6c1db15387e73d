//! Core domain logic for content-bridge
//!
//! This module contains the resolution rules with no I/O dependencies.
//! Loading items is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Item, `FallbackMode`, `LimitBounds`)
//! - `services/` - Sanitizer, matcher, resolver and query composition
//! - `ports/` - Trait definitions for item sources

pub mod models;
pub mod ports;
pub mod services;
