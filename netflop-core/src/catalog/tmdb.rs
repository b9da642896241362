use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use netflop_config::CatalogConfig;
use netflop_model::{
    CatalogId, CatalogPage, Credits, MediaKind, MovieDetails, ResultItem,
    SeasonDetails, ShowDetails, TimeWindow, VideoList,
};

use super::CatalogApi;
use super::wire::{RawCatalogItem, RawPage};
use crate::error::{CatalogError, CatalogResult};

/// Videos are requested in English; localized trailer lists are mostly empty.
const VIDEO_LANGUAGE: &str = "en-US";

/// HTTP client for the TMDB v3 API.
#[derive(Clone)]
pub struct TmdbCatalog {
    http: Client,
    base_url: String,
    language: String,
    region: Option<String>,
    api_key: Option<String>,
    bearer_token: Option<String>,
}

impl std::fmt::Debug for TmdbCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbCatalog")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("region", &self.region)
            .field("authenticated", &self.has_credentials())
            .finish()
    }
}

impl TmdbCatalog {
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("netflop/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
            language: config.language.clone(),
            region: config.region.clone(),
            api_key: config.api_key.clone(),
            bearer_token: config.bearer_token.clone(),
        })
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some() || self.bearer_token.is_some()
    }

    /// Absolute URL for `path` with `params` appended. Empty values are
    /// skipped; the configured language is added unless `params` sets one.
    pub fn request_url(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> CatalogResult<Url> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            self.base_url,
            path.trim_start_matches('/')
        ))?;

        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                if !value.is_empty() {
                    pairs.append_pair(key, value);
                }
            }
            if !params.iter().any(|(key, _)| *key == "language") {
                pairs.append_pair("language", &self.language);
            }
            if self.bearer_token.is_none()
                && let Some(key) = &self.api_key
            {
                pairs.append_pair("api_key", key);
            }
        }

        Ok(url)
    }

    async fn get_tmdb_json<T>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> CatalogResult<T>
    where
        T: DeserializeOwned,
    {
        if !self.has_credentials() {
            return Err(CatalogError::MissingCredentials);
        }

        let url = self.request_url(path, params)?;
        debug!(path, "catalog request");

        let mut request = self.http.get(url);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            return serde_json::from_slice::<T>(&body)
                .map_err(|err| CatalogError::Decode(err.to_string()));
        }

        #[derive(Debug, Deserialize)]
        struct TmdbErrorBody {
            #[serde(default)]
            status_message: Option<String>,
        }

        let message = response
            .json::<TmdbErrorBody>()
            .await
            .ok()
            .and_then(|body| body.status_message)
            .unwrap_or_else(|| {
                status.canonical_reason().unwrap_or("request failed").to_string()
            });

        warn!(path, status = status.as_u16(), %message, "catalog request failed");

        match status.as_u16() {
            401 => Err(CatalogError::InvalidApiKey),
            404 => Err(CatalogError::NotFound),
            429 => Err(CatalogError::RateLimited),
            code => Err(CatalogError::Status {
                status: code,
                message,
            }),
        }
    }

    /// Fetch a listing. Feeds that only ever contain one kind pass it as
    /// `default_kind` so untagged records are not guessed from field presence.
    async fn get_page(
        &self,
        path: &str,
        params: &[(&str, String)],
        page: u32,
        default_kind: Option<MediaKind>,
    ) -> CatalogResult<CatalogPage<ResultItem>> {
        let mut raw: RawPage<RawCatalogItem> =
            self.get_tmdb_json(path, params).await?;
        if let Some(kind) = default_kind {
            for item in &mut raw.results {
                item.media_type
                    .get_or_insert_with(|| kind.as_path().to_string());
            }
        }
        Ok(raw.into_page(page))
    }
}

#[async_trait]
impl CatalogApi for TmdbCatalog {
    async fn search(
        &self,
        query: &str,
        page: u32,
    ) -> CatalogResult<CatalogPage<ResultItem>> {
        let page = page.max(1);
        self.get_page(
            "search/multi",
            &[
                ("query", query.trim().to_string()),
                ("page", page.to_string()),
                ("include_adult", "false".to_string()),
            ],
            page,
            None,
        )
        .await
    }

    async fn trending_movies(
        &self,
        window: TimeWindow,
        page: u32,
    ) -> CatalogResult<CatalogPage<ResultItem>> {
        let page = page.max(1);
        self.get_page(
            &format!("trending/movie/{}", window.as_path()),
            &[("page", page.to_string())],
            page,
            Some(MediaKind::Movie),
        )
        .await
    }

    async fn popular_shows(
        &self,
        page: u32,
    ) -> CatalogResult<CatalogPage<ResultItem>> {
        let page = page.max(1);
        self.get_page(
            "tv/popular",
            &[
                ("page", page.to_string()),
                ("region", self.region.clone().unwrap_or_default()),
            ],
            page,
            Some(MediaKind::Show),
        )
        .await
    }

    async fn movie_details(&self, id: CatalogId) -> CatalogResult<MovieDetails> {
        self.get_tmdb_json(&format!("movie/{id}"), &[]).await
    }

    async fn show_details(&self, id: CatalogId) -> CatalogResult<ShowDetails> {
        self.get_tmdb_json(&format!("tv/{id}"), &[]).await
    }

    async fn show_season(
        &self,
        id: CatalogId,
        season: u32,
    ) -> CatalogResult<SeasonDetails> {
        self.get_tmdb_json(&format!("tv/{id}/season/{season}"), &[])
            .await
    }

    async fn credits(
        &self,
        kind: MediaKind,
        id: CatalogId,
    ) -> CatalogResult<Credits> {
        self.get_tmdb_json(&format!("{}/{id}/credits", kind.as_path()), &[])
            .await
    }

    async fn videos(
        &self,
        kind: MediaKind,
        id: CatalogId,
    ) -> CatalogResult<VideoList> {
        self.get_tmdb_json(
            &format!("{}/{id}/videos", kind.as_path()),
            &[("language", VIDEO_LANGUAGE.to_string())],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(api_key: Option<&str>, bearer: Option<&str>) -> TmdbCatalog {
        let config = CatalogConfig {
            api_key: api_key.map(str::to_string),
            bearer_token: bearer.map(str::to_string),
            ..CatalogConfig::default()
        };
        TmdbCatalog::new(&config).unwrap()
    }

    #[test]
    fn request_url_skips_empty_params_and_adds_language() {
        let tmdb = catalog(Some("k3y"), None);
        let url = tmdb
            .request_url(
                "search/multi",
                &[("query", "batman".into()), ("region", String::new())],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.themoviedb.org/3/search/multi?query=batman&language=fr-FR&api_key=k3y"
        );
    }

    #[test]
    fn bearer_token_keeps_key_out_of_url() {
        let tmdb = catalog(Some("k3y"), Some("t0ken"));
        let url = tmdb
            .request_url("tv/1/videos", &[("language", "en-US".into())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.themoviedb.org/3/tv/1/videos?language=en-US"
        );
        assert!(!format!("{tmdb:?}").contains("t0ken"));
    }

    #[tokio::test]
    async fn missing_credentials_fail_before_any_request() {
        let tmdb = catalog(None, None);
        let err = tmdb.search("batman", 1).await.unwrap_err();
        assert!(matches!(err, CatalogError::MissingCredentials));
    }
}
