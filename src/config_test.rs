#![allow(clippy::float_cmp)]

use super::*;

fn parse(raw: &str) -> SiteConfig {
    let mut cfg = SiteConfig::from_json(raw).unwrap();
    cfg.normalize();
    cfg
}

#[test]
fn defaults_match_stock_page() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.phrases, vec!["Frontend Developer", "Programmer", "Freelancer"]);
    assert_eq!(cfg.header_offset, 80.0);
    assert_eq!(cfg.back_to_top_offset, 500.0);
    assert_eq!(cfg.section_lead, 200.0);
    assert_eq!(cfg.skills_threshold, 0.5);
    assert_eq!(cfg.status_clear_ms, 5000);
    assert_eq!(cfg.preloader_fade_ms, 500);
    assert_eq!(cfg.theme_key, "theme");
    assert_eq!(cfg.contact_endpoint, None);
}

#[test]
fn empty_object_yields_defaults() {
    let cfg = parse("{}");
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = parse(r#"{"phrases": ["Writer"], "typing": {"type_ms": 80}}"#);
    assert_eq!(cfg.phrases, vec!["Writer"]);
    assert_eq!(cfg.typing.type_ms, 80);
    assert_eq!(cfg.typing.delete_ms, 50);
    assert_eq!(cfg.header_offset, 80.0);
}

#[test]
fn empty_phrase_list_falls_back_to_defaults() {
    let cfg = parse(r#"{"phrases": []}"#);
    assert_eq!(cfg.phrases.len(), 3);
}

#[test]
fn threshold_is_clamped() {
    let cfg = parse(r#"{"skills_threshold": 3.5}"#);
    assert_eq!(cfg.skills_threshold, 1.0);
}

#[test]
fn blank_endpoint_means_simulated_send() {
    let cfg = parse(r#"{"contact_endpoint": "   "}"#);
    assert_eq!(cfg.contact_endpoint, None);

    let cfg = parse(r#"{"contact_endpoint": " https://relay.example/send "}"#);
    assert_eq!(cfg.contact_endpoint.as_deref(), Some("https://relay.example/send"));
}

#[test]
fn normalize_reports_each_replacement() {
    let mut cfg = SiteConfig::from_json(r#"{"phrases": [], "skills_threshold": -1.0}"#).unwrap();
    let notes = cfg.normalize();
    assert_eq!(notes.len(), 2);
    assert!(notes[0].contains("typing phrases"));
    assert!(notes[1].contains("skills threshold"));
    assert_eq!(cfg.skills_threshold, 0.0);
}

#[test]
fn normalize_is_silent_for_valid_config() {
    let mut cfg = SiteConfig::default();
    assert!(cfg.normalize().is_empty());
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn malformed_json_is_config_error() {
    let err = SiteConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, FolioError::Config(_)));
}

#[test]
fn log_level_parses_or_defaults() {
    let mut cfg = SiteConfig::default();
    cfg.log_level = "debug".to_owned();
    assert_eq!(cfg.log_level(), log::Level::Debug);
    cfg.log_level = "chatty".to_owned();
    assert_eq!(cfg.log_level(), log::Level::Info);
}
