//! Limit sanitizer - turns untrusted text into a bounded count
//!
//! Pure function, no allocation, no error path.

/// Sanitize a raw limit into `[min, max]`
///
/// Surrounding whitespace is ignored. Anything that does not parse as a
/// finite number (absent, empty, `abc`, `NaN`, `inf`) yields `default`
/// unchanged. Numbers are truncated toward zero and then clamped.
///
/// The caller guarantees `min <= max`; [`LimitBounds`] is the checked way
/// to hold such a range.
///
/// # Arguments
///
/// * `raw` - The raw limit text, if any
/// * `min` - Lower bound (inclusive)
/// * `max` - Upper bound (inclusive)
/// * `default` - Returned when `raw` is not a finite number
///
/// [`LimitBounds`]: crate::core::models::LimitBounds
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn sanitize_limit(raw: Option<&str>, min: i64, max: i64, default: i64) -> i64 {
    let Some(n) = raw.and_then(|s| s.trim().parse::<f64>().ok()).filter(|n| n.is_finite()) else {
        return default;
    };

    let n = n.trunc();
    // Float-to-int casts saturate, so huge negatives land on i64::MIN first
    let upper = if n >= max as f64 { max } else { n as i64 };
    upper.max(min)
}
