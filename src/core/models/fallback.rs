//! Fallback modes
//!
//! Decides what gets rendered when nothing matched the term filter.

use serde::{Deserialize, Serialize};

/// Fallback policy applied when the matched list is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    /// Render the latest items instead
    #[default]
    Latest,
    /// Render nothing
    None,
}

impl FallbackMode {
    /// All modes, in the order they are offered to users
    pub const ALL: [Self; 2] = [Self::Latest, Self::None];

    /// Return the string representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for FallbackMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FallbackMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latest" => Ok(Self::Latest),
            "none" => Ok(Self::None),
            _ => Err(format!("Invalid fallback mode: {s}. Use: latest, none")),
        }
    }
}
