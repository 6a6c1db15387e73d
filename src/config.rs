//! Configuration management
//!
//! Settings are read from `.content-bridge.toml` in the working directory,
//! falling back to `~/.content-bridge/config.toml`, then to built-in
//! defaults. An explicitly given path must load; discovered files that
//! fail to parse are logged and skipped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{FallbackMode, LimitBounds};
use crate::core::services::MatchCase;
use crate::paths;

/// Errors that can occur while loading or writing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read or written
    #[error("config io error at {path}: {source}")]
    Io {
        /// Offending file
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Config file is not valid (including invalid limit bounds)
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Offending file
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// Config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Refused to overwrite an existing file
    #[error("config already exists: {0} (use --force to overwrite)")]
    AlreadyExists(PathBuf),
}

/// content-bridge configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Dataset file used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,

    /// Limit bounds
    #[serde(default)]
    pub limit: LimitBounds,

    /// Resolution settings
    #[serde(default)]
    pub resolve: ResolveConfig,

    /// Term matching settings
    #[serde(default)]
    pub matching: MatchingConfig,
}

/// Resolution settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveConfig {
    /// Fallback mode used when none is given on the command line
    #[serde(default)]
    pub fallback: FallbackMode,
}

/// Term matching settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Lowercase taxonomy and term keys before comparing
    #[serde(default)]
    pub case_insensitive: bool,
}

impl BridgeConfig {
    /// Load config from a specific file
    ///
    /// A relative `dataset` path is resolved against the file's directory.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(dataset) = &config.dataset
            && dataset.is_relative()
            && let Some(dir) = path.parent()
        {
            config.dataset = Some(dir.join(dataset));
        }
        Ok(config)
    }

    /// Find the config file that applies to `dir`, if any
    #[must_use]
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        [paths::project_config(dir), paths::global_config()]
            .into_iter()
            .find(|candidate| candidate.is_file())
    }

    /// Load config for `dir`, or from `explicit` when given
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!("Loading config from {}", path.display());
            return Self::load_from(path);
        }

        let Some(path) = Self::discover(dir) else {
            debug!("No config file found, using defaults");
            return Ok(Self::default());
        };

        debug!("Loading config from {}", path.display());
        Ok(Self::load_from(&path).unwrap_or_else(|err| {
            warn!("Ignoring {err}");
            Self::default()
        }))
    }

    /// Render config as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write config to `path`, refusing to overwrite unless `force`
    pub fn save(&self, path: &Path, force: bool) -> Result<(), ConfigError> {
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }
        let content = self.to_toml()?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Case policy for term matching
    #[must_use]
    pub const fn match_case(&self) -> MatchCase {
        MatchCase::from_flag(self.matching.case_insensitive)
    }
}
