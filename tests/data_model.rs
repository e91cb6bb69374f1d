use std::error::Error;

use iniwatch::errors::IniError;
use iniwatch::ini::{Config, DEFAULT_SECTION, Section};
use iniwatch_test_utils::builders::ConfigBuilder;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn new_section_appends_in_order_and_rejects_bad_names() -> TestResult {
    let mut cfg = Config::new();

    cfg.new_section("sec1")?;
    assert!(matches!(cfg.new_section(""), Err(IniError::EmptySectionName)));
    match cfg.new_section("sec1") {
        Err(IniError::DuplicateSection(name)) => assert_eq!(name, "sec1"),
        other => panic!("expected DuplicateSection, got: {other:?}"),
    }
    cfg.new_section("sec2")?;

    assert_eq!(cfg.section_names(), ["sec1", "sec2"]);
    assert_eq!(cfg.len(), 2);
    assert!(cfg.section("sec1").is_some_and(Section::is_empty));
    assert!(cfg.section("sec2").is_some_and(Section::is_empty));

    Ok(())
}

#[test]
fn failed_new_section_leaves_config_untouched() -> TestResult {
    let mut cfg = Config::new();
    cfg.new_section("only")?;
    let before = cfg.clone();

    assert!(cfg.new_section("only").is_err());
    assert!(cfg.new_section("").is_err());

    assert_eq!(cfg, before);
    Ok(())
}

#[test]
fn new_entry_rejects_duplicate_keys_without_overwriting() -> TestResult {
    let mut sec = Section::new();

    sec.new_entry("key1", "value")?;
    match sec.new_entry("key1", "other") {
        Err(IniError::DuplicateKey(key)) => assert_eq!(key, "key1"),
        other => panic!("expected DuplicateKey, got: {other:?}"),
    }
    sec.new_entry("key2", "value")?;

    assert_eq!(sec.get("key1"), Some("value"));
    assert_eq!(sec.get("key2"), Some("value"));
    assert_eq!(sec.len(), 2);
    assert_eq!(sec.keys().collect::<Vec<_>>(), vec!["key1", "key2"]);
    Ok(())
}

#[test]
fn new_entry_accepts_empty_key_and_value() -> TestResult {
    let mut sec = Section::new();
    sec.new_entry("", "")?;
    assert!(sec.contains_key(""));
    assert_eq!(sec.get(""), Some(""));
    Ok(())
}

#[test]
fn lookups_never_fall_back_to_default_section() {
    let cfg = ConfigBuilder::new()
        .default_section(&[("app_mode", "development")])
        .section("server", &[("port", "9999")])
        .build();

    assert_eq!(cfg.get(DEFAULT_SECTION, "app_mode"), Some("development"));
    assert_eq!(cfg.get("server", "app_mode"), None);
    assert_eq!(cfg.get("missing", "port"), None);
    assert!(cfg.section("").is_none());
}

#[test]
fn sections_iterate_in_insertion_order() {
    let cfg = ConfigBuilder::new()
        .section("zeta", &[])
        .section("alpha", &[("k", "v")])
        .section("mid", &[])
        .build();

    let names: Vec<&str> = cfg.sections().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    assert!(cfg.contains_section("alpha"));
    assert!(!cfg.is_empty());
}

#[test]
fn config_serializes_sections_in_order() -> TestResult {
    let cfg = ConfigBuilder::new()
        .section("server", &[("port", "9999"), ("protocol", "http")])
        .section("paths", &[("data", "/home/git/grafana")])
        .build();

    let rendered = toml::to_string(&cfg)?;
    let server_at = rendered.find("[server]").ok_or("missing [server]")?;
    let paths_at = rendered.find("[paths]").ok_or("missing [paths]")?;
    assert!(server_at < paths_at, "unexpected order:\n{rendered}");
    assert!(rendered.contains("port = \"9999\""));
    assert!(rendered.contains("data = \"/home/git/grafana\""));
    Ok(())
}
