//! End-to-end configuration loading tests.

use std::io::Write;

use weft_config::{DarkMode, Error, ThemeConfig};

/// The authored configuration, as it ships on disk.
const AUTHORED: &str = r##"
content = [
    "./index.html",
    "./src/**/*.{rs,html}",
]

plugins = []

[theme.extend.colors]
"ct-dark-600" = "#222"
"ct-dark-200" = "#e5e7eb"
"ct-dark-100" = "#f5f6f7"
"ct-blue-600" = "#2363eb"
"ct-yellow-600" = "#f9d13e"
"ct-red-500" = "#ef4444"

[theme.extend.fontFamily]
Poppins = ["Poppins, sans-serif"]

[theme.extend.container]
center = true
padding = "1rem"

[theme.extend.container.screens]
lg = "1125px"
xl = "1125px"
"2xl" = "1125px"
"##;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn authored_document_matches_builtin() {
    // The on-disk form of the authored configuration loads to exactly the
    // record `load()` builds in code.
    let parsed = ThemeConfig::from_toml(AUTHORED).unwrap();
    assert_eq!(&parsed, ThemeConfig::load());
}

#[test]
fn loading_twice_is_deterministic() {
    let first = ThemeConfig::from_toml(AUTHORED).unwrap();
    let second = ThemeConfig::from_toml(AUTHORED).unwrap();
    assert_eq!(first, second);

    assert!(std::ptr::eq(ThemeConfig::load(), ThemeConfig::load()));
}

#[test]
fn color_token_preserves_source_text() {
    let config = ThemeConfig::from_toml(
        r##"
        [theme.extend.colors]
        "ct-dark-600" = "#222"
        "##,
    )
    .unwrap();

    assert_eq!(config.colors.get("ct-dark-600").unwrap().as_str(), "#222");
}

#[test]
fn container_values() {
    let config = ThemeConfig::from_toml(
        r#"
        [theme.extend.container]
        padding = "1rem"

        [theme.extend.container.screens]
        lg = "1125px"
        "#,
    )
    .unwrap();

    assert_eq!(config.container.padding.as_ref().unwrap().as_str(), "1rem");
    assert_eq!(config.container.screen("lg").unwrap().as_str(), "1125px");
    assert!(!config.container.center);
}

#[test]
fn content_globs_ordered() {
    let config =
        ThemeConfig::from_toml(r#"content = ["./index.html", "./src/**/*.{rs,html}"]"#).unwrap();

    assert_eq!(config.content.len(), 2);
    let patterns: Vec<&str> = config.content.iter().map(|p| p.as_str()).collect();
    assert_eq!(patterns, ["./index.html", "./src/**/*.{rs,html}"]);
}

#[test]
fn empty_plugins_is_valid() {
    let config = ThemeConfig::from_toml("plugins = []").unwrap();
    assert!(config.plugins.is_empty());
}

#[test]
fn every_authored_color_parses() {
    let config = ThemeConfig::from_toml(AUTHORED).unwrap();
    for (name, value) in config.colors.iter() {
        assert!(
            value.color().is_some() || value.is_reference(),
            "token '{}' did not parse",
            name
        );
    }
}

#[test]
fn font_stacks_preserve_order() {
    let config = ThemeConfig::from_toml(
        r#"
        [theme.extend.fontFamily]
        display = ["Poppins", "Helvetica Neue", "sans-serif"]
        "#,
    )
    .unwrap();

    let stack = config.font_families.get("display").unwrap();
    assert_eq!(stack.primary(), "Poppins");
    let families: Vec<&str> = stack.iter().collect();
    assert_eq!(families, ["Poppins", "Helvetica Neue", "sans-serif"]);
}

#[test]
fn loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weft.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(AUTHORED.as_bytes()).unwrap();

    let config = ThemeConfig::from_file(&path).unwrap();
    assert_eq!(&config, ThemeConfig::load());
}

#[test]
fn missing_file_reports_path() {
    let err = ThemeConfig::from_file("/nonexistent/weft.toml").unwrap_err();
    match err {
        Error::Io { path, .. } => assert!(path.ends_with("weft.toml")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn dark_mode_round_trips() {
    let config = ThemeConfig::from_toml(r#"darkMode = "class""#).unwrap();
    assert_eq!(config.dark_mode, Some(DarkMode::Class));

    let config = ThemeConfig::from_toml(AUTHORED).unwrap();
    assert_eq!(config.dark_mode, None);
}

#[test]
fn non_monotonic_screens_load_with_warning_only() {
    init_tracing();

    let config = ThemeConfig::from_toml(
        r#"
        [theme.extend.container.screens]
        sm = "1200px"
        md = "600px"
        "#,
    )
    .unwrap();

    assert_eq!(config.container.screen("md").unwrap().as_str(), "600px");
}

#[test]
fn malformed_document_is_all_or_nothing() {
    // One bad token fails the whole load, even with valid keys present.
    let err = ThemeConfig::from_toml(
        r##"
        content = ["./index.html"]

        [theme.extend.colors]
        good = "#fff"
        bad = "not a color"
        "##,
    )
    .unwrap_err();

    assert!(matches!(err, Error::InvalidColor { ref token, .. } if token == "bad"));
}
