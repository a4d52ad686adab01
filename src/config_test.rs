#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_page_behavior() {
    let config = Config::default();
    assert_eq!(config.hover_opacity, 0.5);
    assert_eq!(config.reveal_threshold, 0.15);
    assert_eq!(config.lazy_margin_px, 200.0);
    assert_eq!(config.log_level, "info");
}

#[test]
fn empty_object_yields_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_object_overrides_only_given_fields() {
    let config = Config::from_json(r#"{"hover_opacity": 0.3, "log_level": "debug"}"#).unwrap();
    assert_eq!(config.hover_opacity, 0.3);
    assert_eq!(config.reveal_threshold, 0.15);
    assert_eq!(config.level().unwrap(), log::Level::Debug);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = Config::from_json("{hover_opacity:").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn opacity_above_one_is_rejected() {
    let err = Config::from_json(r#"{"hover_opacity": 1.5}"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "hover_opacity", .. }));
}

#[test]
fn negative_threshold_is_rejected() {
    let err = Config::from_json(r#"{"reveal_threshold": -0.1}"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "reveal_threshold", .. }));
}

#[test]
fn negative_margin_is_rejected() {
    let err = Config::from_json(r#"{"lazy_margin_px": -5}"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "lazy_margin_px", .. }));
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = Config::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::LogLevel(name) if name == "loud"));
}

#[test]
fn lazy_root_margin_formats_pixels() {
    assert_eq!(Config::default().lazy_root_margin(), "200px");
    let config = Config { lazy_margin_px: 64.5, ..Config::default() };
    assert_eq!(config.lazy_root_margin(), "64.5px");
}
