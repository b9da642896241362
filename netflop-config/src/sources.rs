use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub catalog: FileCatalogConfig,
    #[serde(default)]
    pub search: FileSearchConfig,
    #[serde(default)]
    pub ui: FileUiConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCatalogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Human readable duration, e.g. `"10s"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileSearchConfig {
    /// Human readable duration, e.g. `"100ms"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debounce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_query_len: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion_batch: Option<usize>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileUiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_file: Option<PathBuf>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub tmdb_api_key: Option<String>,
    pub tmdb_bearer_token: Option<String>,
    pub tmdb_language: Option<String>,
    pub tmdb_region: Option<String>,
    pub tmdb_base_url: Option<String>,
    pub tmdb_image_base_url: Option<String>,
    pub debounce_ms: Option<u64>,
    pub min_query_len: Option<usize>,
    pub theme_file: Option<PathBuf>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::gather_from(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn gather_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            config_path: var("NETFLOP_CONFIG").map(PathBuf::from),
            tmdb_api_key: var("TMDB_API_KEY"),
            tmdb_bearer_token: var("TMDB_BEARER_TOKEN"),
            tmdb_language: var("TMDB_LANG"),
            tmdb_region: var("TMDB_REGION"),
            tmdb_base_url: var("TMDB_BASE_URL"),
            tmdb_image_base_url: var("TMDB_IMAGE_BASE_URL"),
            debounce_ms: var("NETFLOP_DEBOUNCE_MS").and_then(|s| s.trim().parse().ok()),
            min_query_len: var("NETFLOP_MIN_QUERY_LEN")
                .and_then(|s| s.trim().parse().ok()),
            theme_file: var("NETFLOP_THEME_FILE").map(PathBuf::from),
        }
    }
}
