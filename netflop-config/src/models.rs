use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_LANGUAGE: &str = "fr-FR";
pub const DEFAULT_REGION: &str = "FR";
pub const DEFAULT_PAGE_URL: &str = "http://localhost/search.html";
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;
pub const DEFAULT_SUGGESTION_BATCH: usize = 6;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Effective configuration after composing env, file and defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub search: SearchConfig,
    pub ui: UiConfig,
    pub metadata: ConfigMetadata,
}

#[derive(Clone)]
pub struct CatalogConfig {
    pub base_url: Url,
    pub image_base_url: Url,
    pub api_key: Option<String>,
    pub bearer_token: Option<String>,
    pub language: String,
    pub region: Option<String>,
    pub request_timeout: Duration,
}

impl CatalogConfig {
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some() || self.bearer_token.is_some()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_CATALOG_BASE_URL)
                .unwrap_or_else(|_| unreachable!("default catalog url parses")),
            image_base_url: Url::parse(DEFAULT_IMAGE_BASE_URL)
                .unwrap_or_else(|_| unreachable!("default image url parses")),
            api_key: None,
            bearer_token: None,
            language: DEFAULT_LANGUAGE.to_string(),
            region: Some(DEFAULT_REGION.to_string()),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

// Credentials never reach logs.
impl fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("base_url", &self.base_url.as_str())
            .field("image_base_url", &self.image_base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field(
                "bearer_token",
                &self.bearer_token.as_ref().map(|_| "<redacted>"),
            )
            .field("language", &self.language)
            .field("region", &self.region)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub debounce: Duration,
    pub min_query_len: usize,
    /// Items taken from each suggestion batch.
    pub suggestion_batch: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            suggestion_batch: DEFAULT_SUGGESTION_BATCH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Address of the search page; its `q` parameter carries the query.
    pub page_url: Url,
    /// Override for the theme preference file.
    pub theme_file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_url: Url::parse(DEFAULT_PAGE_URL)
                .unwrap_or_else(|_| unreachable!("default page url parses")),
            theme_file: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
