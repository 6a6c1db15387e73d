//! Tests for configuration management

use std::path::PathBuf;

use content_bridge::config::{BridgeConfig, ConfigError};
use content_bridge::core::models::{FallbackMode, LimitBounds};
use content_bridge::core::services::MatchCase;
use content_bridge::paths;

use crate::common::TestDir;

// =============================================================================
// BASIC CONFIG TESTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = BridgeConfig::default();
    assert_eq!(config.limit, LimitBounds::DEFAULT);
    assert_eq!(config.resolve.fallback, FallbackMode::Latest);
    assert_eq!(config.match_case(), MatchCase::Exact);
    assert!(config.dataset.is_none());
}

#[test]
fn test_config_full_file() {
    let dir = TestDir::new();
    let path = dir.add_file(
        "bridge.toml",
        r#"
dataset = "data/posts.json"

[limit]
min = 2
max = 20
default = 5

[resolve]
fallback = "none"

[matching]
case_insensitive = true
"#,
    );

    let config = BridgeConfig::load_from(&path).unwrap();
    assert_eq!(config.limit, LimitBounds::new(2, 20, 5).unwrap());
    assert_eq!(config.resolve.fallback, FallbackMode::None);
    assert_eq!(config.match_case(), MatchCase::Insensitive);
    assert_eq!(config.dataset, Some(dir.path().join("data/posts.json")));
}

#[test]
fn test_config_partial_limit_table() {
    let dir = TestDir::new();
    let path = dir.add_file("bridge.toml", "[limit]\nmax = 30\n");

    let config = BridgeConfig::load_from(&path).unwrap();
    assert_eq!(config.limit, LimitBounds::new(1, 30, 4).unwrap());
}

#[test]
fn test_config_absolute_dataset_kept() {
    let dir = TestDir::new();
    let path = dir.add_file("bridge.toml", "dataset = \"/srv/posts.json\"\n");

    let config = BridgeConfig::load_from(&path).unwrap();
    assert_eq!(config.dataset, Some(PathBuf::from("/srv/posts.json")));
}

// =============================================================================
// VALIDATION TESTS
// =============================================================================

#[test]
fn test_config_inverted_range_rejected() {
    let dir = TestDir::new();
    let path = dir.add_file("bridge.toml", "[limit]\nmin = 10\nmax = 2\ndefault = 4\n");

    let err = BridgeConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("inverted"));
}

#[test]
fn test_config_unknown_fallback_rejected() {
    let dir = TestDir::new();
    let path = dir.add_file("bridge.toml", "[resolve]\nfallback = \"random\"\n");

    assert!(matches!(BridgeConfig::load_from(&path), Err(ConfigError::Parse { .. })));
}

#[test]
fn test_config_missing_explicit_file_errors() {
    let dir = TestDir::new();
    let result = BridgeConfig::load(Some(&dir.path().join("missing.toml")), dir.path());
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

// =============================================================================
// DISCOVERY TESTS
// =============================================================================

#[test]
fn test_config_project_file_discovered() {
    let dir = TestDir::new();
    dir.add_file(paths::PROJECT_CONFIG, "[resolve]\nfallback = \"none\"\n");

    assert_eq!(BridgeConfig::discover(dir.path()), Some(paths::project_config(dir.path())));
    let config = BridgeConfig::load(None, dir.path()).unwrap();
    assert_eq!(config.resolve.fallback, FallbackMode::None);
}

#[test]
fn test_config_broken_discovered_file_falls_back() {
    let dir = TestDir::new();
    dir.add_file(paths::PROJECT_CONFIG, "this is = = not toml");

    let config = BridgeConfig::load(None, dir.path()).unwrap();
    assert_eq!(config, BridgeConfig::default());
}

// =============================================================================
// SAVE TESTS
// =============================================================================

#[test]
fn test_config_save_and_reload() {
    let dir = TestDir::new();
    let path = paths::project_config(dir.path());

    BridgeConfig::default().save(&path, false).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[limit]"));
    assert!(content.contains("fallback = \"latest\""));

    assert_eq!(BridgeConfig::load_from(&path).unwrap(), BridgeConfig::default());
}

#[test]
fn test_config_save_refuses_overwrite() {
    let dir = TestDir::new();
    let path = dir.add_file(paths::PROJECT_CONFIG, "# mine\n");

    let err = BridgeConfig::default().save(&path, false).unwrap_err();
    assert!(matches!(err, ConfigError::AlreadyExists(_)));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

    BridgeConfig::default().save(&path, true).unwrap();
    assert!(std::fs::read_to_string(&path).unwrap().contains("[resolve]"));
}
