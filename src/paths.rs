//! Centralized path definitions for content-bridge
//!
//! ## Storage Layout
//!
//! ```text
//! project/
//! └── .content-bridge.toml        # Project config (takes precedence)
//!
//! ~/.content-bridge/
//! └── config.toml                 # User-level config
//! ```

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const PROJECT_CONFIG: &str = ".content-bridge.toml";

/// Global config directory name
const GLOBAL_DIR: &str = ".content-bridge";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the project config file in `dir`.
#[must_use]
pub fn project_config(dir: &Path) -> PathBuf {
    dir.join(PROJECT_CONFIG)
}

/// Get the global content-bridge directory.
///
/// Returns `~/.content-bridge/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.content-bridge/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
