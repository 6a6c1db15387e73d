//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use content_bridge::core::models::{FallbackMode, Item};
use content_bridge::core::services::{MatchCase, TermFilter, sanitize_limit};
use test_case::test_case;

// =============================================================================
// Limit Sanitizer Tests
// =============================================================================

#[test_case(Some("4"), 4 ; "in range")]
#[test_case(Some(""), 4 ; "empty uses default")]
#[test_case(Some("999"), 12 ; "above max clamps")]
#[test_case(Some("-5"), 1 ; "below min clamps")]
#[test_case(Some("2.9"), 2 ; "fraction truncates")]
#[test_case(Some("12.99"), 12 ; "fraction at max truncates")]
#[test_case(Some("1"), 1 ; "min is kept")]
#[test_case(Some("12"), 12 ; "max is kept")]
#[test_case(Some("0"), 1 ; "zero clamps to min")]
#[test_case(Some("abc"), 4 ; "text uses default")]
#[test_case(Some("NaN"), 4 ; "nan uses default")]
#[test_case(Some("Infinity"), 4 ; "infinity uses default")]
#[test_case(Some("-inf"), 4 ; "negative infinity uses default")]
#[test_case(Some("  7  "), 7 ; "whitespace is ignored")]
#[test_case(Some("1e1"), 10 ; "exponent notation")]
#[test_case(Some("0x10"), 4 ; "hex literal uses default")]
#[test_case(None, 4 ; "absent uses default")]
fn test_sanitize_limit(raw: Option<&str>, expected: i64) {
    assert_eq!(sanitize_limit(raw, 1, 12, 4), expected, "raw={raw:?}");
}

#[test_case(Some("3"), 5, 5, 5, 5 ; "single point range")]
#[test_case(Some("x"), 1, 10, 99, 99 ; "default is returned unchanged")]
#[test_case(Some("-2.5"), -10, 10, 0, -2 ; "negative truncates toward zero")]
fn test_sanitize_limit_custom_bounds(
    raw: Option<&str>,
    min: i64,
    max: i64,
    default: i64,
    expected: i64,
) {
    assert!(min <= max);
    assert_eq!(sanitize_limit(raw, min, max, default), expected);
}

// =============================================================================
// Fallback Mode Tests
// =============================================================================

#[test_case("latest", Some(FallbackMode::Latest) ; "latest")]
#[test_case("none", Some(FallbackMode::None) ; "none")]
#[test_case("LATEST", Some(FallbackMode::Latest) ; "uppercase")]
#[test_case("newest", None ; "unknown")]
#[test_case("", None ; "empty")]
fn test_fallback_mode_parsing(input: &str, expected: Option<FallbackMode>) {
    assert_eq!(input.parse::<FallbackMode>().ok(), expected);
}

// =============================================================================
// Term Matcher Tests
// =============================================================================

#[test_case("category", "x", "category", "x", MatchCase::Exact, true ; "exact match")]
#[test_case("category", "X", "category", "x", MatchCase::Exact, false ; "exact rejects case")]
#[test_case("category", "X", "category", "x", MatchCase::Insensitive, true ; "insensitive folds case")]
#[test_case(" category ", " x ", "category", "x", MatchCase::Exact, true ; "query is trimmed")]
#[test_case("category", "x", "category", "xy", MatchCase::Insensitive, false ; "no prefix match")]
#[test_case("category", "", "category", "", MatchCase::Exact, false ; "blank term never matches")]
#[test_case("", "x", "", "x", MatchCase::Exact, false ; "blank tax never matches")]
#[test_case("tag", "x", "category", "x", MatchCase::Exact, false ; "other taxonomy")]
fn test_term_matching(
    tax: &str,
    term: &str,
    item_tax: &str,
    item_term: &str,
    case: MatchCase,
    expected: bool,
) {
    let item = Item::new(1, "Post", "post").with_term(item_tax, item_term);
    assert_eq!(TermFilter::new(tax, term, case).matches(&item), expected);
}
