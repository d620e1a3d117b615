//! # Configuration Tests
//!
//! Tests for configuration defaults, JSON deserialization, and
//! construction-time validation.

use oosim_frontend::common::ConfigError;
use oosim_frontend::config::{CacheMode, FrontendConfig};

#[test]
fn test_config_defaults() {
    let config = FrontendConfig::default();
    assert_eq!(config.line_width, 64);
    assert_eq!(config.uop_cache_entries, 128);
    assert_eq!(config.predecode_cache_entries, 4);
    assert_eq!(config.cache_mode, CacheMode::BoundedLru);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_from_json() {
    let config: FrontendConfig = serde_json::from_str(
        r#"{ "line_width": 32, "uop_cache_entries": 16, "cache_mode": "Unbounded" }"#,
    )
    .unwrap();
    assert_eq!(config.line_width, 32);
    assert_eq!(config.uop_cache_entries, 16);
    // Omitted fields fall back to defaults.
    assert_eq!(config.predecode_cache_entries, 4);
    assert_eq!(config.cache_mode, CacheMode::Unbounded);
}

#[test]
fn test_cache_mode_aliases() {
    let lru: CacheMode = serde_json::from_str(r#""LRU""#).unwrap();
    assert_eq!(lru, CacheMode::BoundedLru);
    let inf: CacheMode = serde_json::from_str(r#""Infinite""#).unwrap();
    assert_eq!(inf, CacheMode::Unbounded);
}

#[test]
fn test_non_power_of_two_line_width_rejected() {
    let config = FrontendConfig {
        line_width: 48,
        ..FrontendConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::LineWidthNotPowerOfTwo(48)));
}

#[test]
fn test_zero_line_width_rejected() {
    let config = FrontendConfig {
        line_width: 0,
        ..FrontendConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::LineWidthNotPowerOfTwo(0)));
}

#[test]
fn test_zero_uop_capacity_rejected() {
    let config = FrontendConfig {
        uop_cache_entries: 0,
        ..FrontendConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::ZeroCapacity("micro-op cache")));
}

#[test]
fn test_zero_predecode_capacity_rejected() {
    let config = FrontendConfig {
        predecode_cache_entries: 0,
        ..FrontendConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::ZeroCapacity("predecode cache")));
}
