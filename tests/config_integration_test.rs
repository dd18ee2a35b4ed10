use myna_tools::utils::validation::Validate;
use myna_tools::{BuildConfig, ColorValue, MynaError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_validate_and_emit_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("myna.toml");

    fs::write(
        &config_path,
        r##"
        purge = ["./templates/**/*.html", "./theme/**/*.html"]
        plugins = ["@tailwindcss/typography"]

        [theme.colors]
        transparent = "transparent"
        current = "currentColor"
        black = "#000"

        [theme.colors.teal]
        500 = "#14B8A6"
        600 = "#0D9488"
        "##,
    )
    .unwrap();

    let config = BuildConfig::from_file(&config_path).unwrap();
    config.validate().unwrap();

    assert_eq!(config.purge.len(), 2);
    assert_eq!(
        config.theme.colors.get("current"),
        Some(&ColorValue::Single("currentColor".to_string()))
    );

    let json: serde_json::Value = serde_json::from_str(&config.to_json_string().unwrap()).unwrap();
    assert_eq!(json["theme"]["colors"]["teal"]["600"], "#0D9488");
    assert_eq!(json["variants"], serde_json::json!({}));
    assert_eq!(json["plugins"][0], "@tailwindcss/typography");
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = BuildConfig::from_file(temp_dir.path().join("absent.toml"));
    assert!(matches!(result, Err(MynaError::IoError(_))));
}

#[test]
fn test_malformed_toml_is_config_error() {
    let result = BuildConfig::from_toml_str("purge = [unterminated");
    assert!(matches!(result, Err(MynaError::ConfigError { .. })));
}

#[test]
fn test_scan_content_finds_template_files() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();

    fs::create_dir_all(base.join("templates/partials")).unwrap();
    fs::create_dir_all(base.join("theme")).unwrap();
    fs::write(base.join("templates/index.html"), "<html></html>").unwrap();
    fs::write(base.join("templates/partials/nav.html"), "<nav></nav>").unwrap();
    fs::write(base.join("theme/layout.html"), "<body></body>").unwrap();
    // Non-HTML files are outside the purge globs.
    fs::write(base.join("theme/site.css"), "body {}").unwrap();

    let config = BuildConfig::default();
    let files = config.scan_content(base).unwrap();

    let names: Vec<String> = files
        .iter()
        .map(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string()
        })
        .collect();

    assert_eq!(files.len(), 3);
    assert!(names.contains(&"index.html".to_string()));
    assert!(names.contains(&"nav.html".to_string()));
    assert!(names.contains(&"layout.html".to_string()));
    assert!(!names.contains(&"site.css".to_string()));
}

#[test]
fn test_scan_content_empty_tree() {
    let temp_dir = TempDir::new().unwrap();
    let config = BuildConfig::default();
    let files = config.scan_content(temp_dir.path()).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_default_config_round_trips_through_disk() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("myna.toml");

    let config = BuildConfig::default();
    fs::write(&config_path, config.to_toml_string().unwrap()).unwrap();

    let reparsed = BuildConfig::from_file(&config_path).unwrap();
    reparsed.validate().unwrap();
    assert_eq!(reparsed.purge, config.purge);
    assert_eq!(reparsed.theme.colors, config.theme.colors);
    assert_eq!(reparsed.variants, config.variants);
    assert_eq!(reparsed.plugins, config.plugins);
}
