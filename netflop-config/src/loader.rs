use once_cell::sync::Lazy;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;
use url::Url;

use crate::{
    models::{
        CatalogConfig, Config, ConfigMetadata, DEFAULT_CATALOG_BASE_URL,
        DEFAULT_DEBOUNCE, DEFAULT_IMAGE_BASE_URL, DEFAULT_LANGUAGE,
        DEFAULT_MIN_QUERY_LEN, DEFAULT_PAGE_URL, DEFAULT_REGION,
        DEFAULT_REQUEST_TIMEOUT, DEFAULT_SUGGESTION_BATCH, SearchConfig,
        UiConfig,
    },
    sources::{EnvConfig, FileConfig},
    validation::{self, ConfigWarnings},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("netflop.toml"),
        PathBuf::from("config/netflop.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Seed the process environment from `.env`, then compose the config.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let mut load = self.load_with_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        if env_file_loaded {
            tracing::debug!("loaded .env file");
        }
        Ok(load)
    }

    /// Compose the config from an already gathered environment.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let config_present = file_config.is_some();

        let config = compose_config(file_config.unwrap_or_default(), env, config_path)?;

        let mut warnings = ConfigWarnings::default();
        if !config_present {
            warnings.push_with_hint(
                "No netflop.toml detected; using environment variables and defaults",
                "Create netflop.toml or point NETFLOP_CONFIG at one",
            );
        }
        warnings.extend(validation::check(&config));

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigLoadError::MissingConfig { path });
                }
                path
            }
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(found) => found.clone(),
                None => return Ok((None, None)),
            },
        };

        let file_config = read_file_config(&path)?;
        Ok((Some(file_config), Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn compose_config(
    file: FileConfig,
    env: EnvConfig,
    config_path: Option<PathBuf>,
) -> Result<Config, ConfigLoadError> {
    let FileConfig {
        catalog: file_catalog,
        search: file_search,
        ui: file_ui,
    } = file;

    let base_url = parse_url(
        "catalog.base_url",
        env.tmdb_base_url
            .or(file_catalog.base_url)
            .as_deref()
            .unwrap_or(DEFAULT_CATALOG_BASE_URL),
    )?;
    let image_base_url = parse_url(
        "catalog.image_base_url",
        env.tmdb_image_base_url
            .or(file_catalog.image_base_url)
            .as_deref()
            .unwrap_or(DEFAULT_IMAGE_BASE_URL),
    )?;
    let request_timeout = match file_catalog.request_timeout {
        Some(raw) => parse_duration("catalog.request_timeout", &raw)?,
        None => DEFAULT_REQUEST_TIMEOUT,
    };

    let catalog = CatalogConfig {
        base_url,
        image_base_url,
        api_key: env.tmdb_api_key.or(file_catalog.api_key),
        bearer_token: env.tmdb_bearer_token.or(file_catalog.bearer_token),
        language: env
            .tmdb_language
            .or(file_catalog.language)
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        region: env
            .tmdb_region
            .or(file_catalog.region)
            .or_else(|| Some(DEFAULT_REGION.to_string())),
        request_timeout,
    };

    let debounce = match (env.debounce_ms, file_search.debounce) {
        (Some(ms), _) => Duration::from_millis(ms),
        (None, Some(raw)) => parse_duration("search.debounce", &raw)?,
        (None, None) => DEFAULT_DEBOUNCE,
    };
    let search = SearchConfig {
        debounce,
        min_query_len: env
            .min_query_len
            .or(file_search.min_query_len)
            .unwrap_or(DEFAULT_MIN_QUERY_LEN),
        suggestion_batch: file_search
            .suggestion_batch
            .unwrap_or(DEFAULT_SUGGESTION_BATCH),
    };

    let ui = UiConfig {
        page_url: parse_url(
            "ui.page_url",
            file_ui.page_url.as_deref().unwrap_or(DEFAULT_PAGE_URL),
        )?,
        theme_file: env.theme_file.or(file_ui.theme_file),
    };

    Ok(Config {
        catalog,
        search,
        ui,
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded: false,
        },
    })
}

fn parse_url(field: &'static str, value: &str) -> Result<Url, ConfigLoadError> {
    Url::parse(value.trim()).map_err(|source| ConfigLoadError::InvalidUrl {
        field,
        value: value.to_string(),
        source,
    })
}

fn parse_duration(
    field: &'static str,
    value: &str,
) -> Result<Duration, ConfigLoadError> {
    humantime::parse_duration(value.trim()).map_err(|source| {
        ConfigLoadError::InvalidDuration {
            field,
            value: value.to_string(),
            source,
        }
    })
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid URL for {field}: '{value}'")]
    InvalidUrl {
        field: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid duration for {field}: '{value}'")]
    InvalidDuration {
        field: &'static str,
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
