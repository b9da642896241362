use thiserror::Error;

/// Failures of a catalog read.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("TMDB {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Not found")]
    NotFound,

    #[error("Rate limited")]
    RateLimited,

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("No TMDB credentials configured")]
    MissingCredentials,

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl CatalogError {
    /// Text shown to the user in the feedback line.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Network(err) if err.is_timeout() => {
                "délai de réponse dépassé".to_string()
            }
            CatalogError::Network(err) if err.is_connect() => {
                "connexion au catalogue impossible".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Failures attaching the background video player.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmbedError {
    #[error("player runtime unavailable: {0}")]
    RuntimeUnavailable(String),

    #[error("background container not found")]
    ContainerMissing,

    #[error("invalid video id: {0}")]
    InvalidVideoId(String),
}

#[derive(Debug, Error)]
pub enum ThemeStoreError {
    #[error("failed to access theme store {path}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("theme store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no configuration directory available for the theme store")]
    NoConfigDir,
}
