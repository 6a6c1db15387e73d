//! Limit bounds
//!
//! The closed range a sanitized limit is clamped into, plus the value used
//! when the raw input is absent or not a number.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::sanitize_limit;

/// Errors raised when building limit bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LimitError {
    /// The range is inverted
    #[error("limit range is inverted: min {min} > max {max}")]
    InvertedRange {
        /// Lower bound
        min: i64,
        /// Upper bound
        max: i64,
    },

    /// The lower bound is not a positive count
    #[error("limit min must be at least 1, got {0}")]
    NonPositiveMin(i64),

    /// The default lies outside the range
    #[error("default limit {default} is outside {min}..={max}")]
    DefaultOutOfRange {
        /// Lower bound
        min: i64,
        /// Upper bound
        max: i64,
        /// Offending default
        default: i64,
    },
}

/// Validated bounds for the limit sanitizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLimitBounds", into = "RawLimitBounds")]
pub struct LimitBounds {
    min: i64,
    max: i64,
    default: i64,
}

impl LimitBounds {
    /// Bounds used when nothing is configured: `1..=12`, default 4
    pub const DEFAULT: Self = Self {
        min: 1,
        max: 12,
        default: 4,
    };

    /// Build bounds, checking `1 <= min <= default <= max`
    pub const fn new(min: i64, max: i64, default: i64) -> Result<Self, LimitError> {
        if min > max {
            return Err(LimitError::InvertedRange { min, max });
        }
        if min < 1 {
            return Err(LimitError::NonPositiveMin(min));
        }
        if default < min || default > max {
            return Err(LimitError::DefaultOutOfRange { min, max, default });
        }
        Ok(Self { min, max, default })
    }

    /// Lower bound (inclusive)
    #[must_use]
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound (inclusive)
    #[must_use]
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Value used for absent or unparseable input
    #[must_use]
    pub const fn default_limit(&self) -> i64 {
        self.default
    }

    /// Sanitize raw limit text into these bounds
    #[must_use]
    pub fn sanitize(&self, raw: Option<&str>) -> i64 {
        sanitize_limit(raw, self.min, self.max, self.default)
    }
}

impl Default for LimitBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// On-disk shape of [`LimitBounds`], validated on conversion
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
struct RawLimitBounds {
    min: i64,
    max: i64,
    default: i64,
}

impl Default for RawLimitBounds {
    fn default() -> Self {
        LimitBounds::DEFAULT.into()
    }
}

impl TryFrom<RawLimitBounds> for LimitBounds {
    type Error = LimitError;

    fn try_from(raw: RawLimitBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max, raw.default)
    }
}

impl From<LimitBounds> for RawLimitBounds {
    fn from(bounds: LimitBounds) -> Self {
        Self {
            min: bounds.min,
            max: bounds.max,
            default: bounds.default,
        }
    }
}
