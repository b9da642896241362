use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

use netflop_config::{ConfigLoadError, ConfigLoader, EnvConfig};

fn env_from(pairs: &[(&str, &str)]) -> EnvConfig {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    EnvConfig::gather_from(|key| map.get(key).cloned())
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn defaults_apply_without_file_or_env() {
    let load = ConfigLoader::new()
        .load_with_env(EnvConfig::default())
        .expect("load");

    let config = load.config;
    assert_eq!(config.catalog.base_url.as_str(), "https://api.themoviedb.org/3");
    assert_eq!(config.catalog.language, "fr-FR");
    assert_eq!(config.catalog.region.as_deref(), Some("FR"));
    assert_eq!(config.search.debounce, Duration::from_millis(100));
    assert_eq!(config.search.min_query_len, 2);
    assert_eq!(config.search.suggestion_batch, 6);
    assert!(config.metadata.config_path.is_none());

    // No file and no credentials are both worth telling the user about.
    assert_eq!(load.warnings.len(), 2);
}

#[test]
fn environment_overrides_file_values() {
    let file = write_config(
        r#"
        [catalog]
        api_key = "from-file"
        language = "en-US"

        [search]
        debounce = "250ms"
        min_query_len = 3
        "#,
    );

    let env = env_from(&[
        ("TMDB_LANG", "de-DE"),
        ("NETFLOP_DEBOUNCE_MS", "50"),
        ("TMDB_REGION", "  "),
    ]);
    let load = ConfigLoader::new()
        .with_config_path(file.path())
        .load_with_env(env)
        .expect("load");

    let config = load.config;
    assert_eq!(config.catalog.api_key.as_deref(), Some("from-file"));
    assert_eq!(config.catalog.language, "de-DE");
    assert_eq!(config.catalog.region.as_deref(), Some("FR"));
    assert_eq!(config.search.debounce, Duration::from_millis(50));
    assert_eq!(config.search.min_query_len, 3);
    assert_eq!(config.metadata.config_path.as_deref(), Some(file.path()));
    assert!(load.warnings.is_empty());
}

#[test]
fn file_durations_use_humantime() {
    let file = write_config(
        r#"
        [catalog]
        bearer_token = "token"
        request_timeout = "3s"

        [search]
        debounce = "150ms"
        "#,
    );

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load_with_env(EnvConfig::default())
        .expect("load")
        .config;

    assert_eq!(config.catalog.request_timeout, Duration::from_secs(3));
    assert_eq!(config.search.debounce, Duration::from_millis(150));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let err = ConfigLoader::new()
        .with_config_path("/definitely/not/here/netflop.toml")
        .load_with_env(EnvConfig::default())
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::MissingConfig { .. }));
}

#[test]
fn invalid_values_are_reported_with_their_field() {
    let file = write_config("[ui]\npage_url = \"not a url\"\n");
    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load_with_env(EnvConfig::default())
        .unwrap_err();
    match err {
        ConfigLoadError::InvalidUrl { field, .. } => assert_eq!(field, "ui.page_url"),
        other => panic!("unexpected error: {other}"),
    }

    let file = write_config("[search]\ndebounce = \"soon\"\n");
    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load_with_env(EnvConfig::default())
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::InvalidDuration { .. }));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = write_config("[catalog\napi_key = 1");
    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load_with_env(EnvConfig::default())
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Parse { .. }));
}

#[test]
fn debug_output_redacts_credentials() {
    let env = env_from(&[("TMDB_BEARER_TOKEN", "super-secret")]);
    let config = ConfigLoader::new().load_with_env(env).expect("load").config;
    let rendered = format!("{:?}", config.catalog);
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("<redacted>"));
}
