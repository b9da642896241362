//! Shared fixtures for netflop-core integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use netflop_core::catalog::CatalogApi;
use netflop_core::error::{CatalogError, CatalogResult};
use netflop_model::{
    CatalogId, CatalogPage, Credits, MediaKind, MovieDetails, MovieSummary,
    ResultItem, SeasonDetails, ShowDetails, ShowSummary, TimeWindow, VideoList,
};
use parking_lot::Mutex;

pub fn movie(id: u64, title: &str) -> ResultItem {
    ResultItem::Movie(MovieSummary {
        id: CatalogId::new(id).expect("fixture ids are non-zero"),
        title: title.to_string(),
        original_title: None,
        overview: None,
        release_date: None,
        poster_path: Some(format!("/{id}.jpg")),
        backdrop_path: None,
        vote_average: None,
        popularity: None,
    })
}

pub fn show(id: u64, name: &str) -> ResultItem {
    ResultItem::Show(ShowSummary {
        id: CatalogId::new(id).expect("fixture ids are non-zero"),
        name: name.to_string(),
        original_name: None,
        overview: None,
        first_air_date: None,
        poster_path: None,
        backdrop_path: None,
        vote_average: None,
        popularity: None,
        origin_country: Vec::new(),
    })
}

/// `count` movies with ids starting at `first_id`.
pub fn movies(first_id: u64, count: usize, title: &str) -> Vec<ResultItem> {
    (0..count as u64)
        .map(|offset| movie(first_id + offset, &format!("{title} {}", offset + 1)))
        .collect()
}

pub fn page_of(
    results: Vec<ResultItem>,
    page: u32,
    total_pages: u32,
    total_results: u32,
) -> CatalogPage<ResultItem> {
    CatalogPage {
        page,
        results,
        total_pages,
        total_results,
    }
}

pub fn id(raw: u64) -> CatalogId {
    CatalogId::new(raw).expect("fixture ids are non-zero")
}

#[derive(Debug, Clone)]
pub enum FakeResponse {
    Page(CatalogPage<ResultItem>),
    Fail { status: u16, message: String },
}

impl FakeResponse {
    fn into_result(self) -> CatalogResult<CatalogPage<ResultItem>> {
        match self {
            FakeResponse::Page(page) => Ok(page),
            FakeResponse::Fail { status, message } => {
                Err(CatalogError::Status { status, message })
            }
        }
    }
}

/// In-memory catalog with canned responses and call recording.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    searches: HashMap<(String, u32), FakeResponse>,
    delays: HashMap<String, Duration>,
    trending: Option<Vec<ResultItem>>,
    popular: Option<Vec<ResultItem>>,
    movies: HashMap<u64, MovieDetails>,
    shows: HashMap<u64, ShowDetails>,
    seasons: HashMap<(u64, u32), SeasonDetails>,
    credits: HashMap<u64, Credits>,
    videos: HashMap<u64, VideoList>,
    search_calls: Mutex<Vec<(String, u32)>>,
    listing_calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self {
            trending: Some(Vec::new()),
            popular: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn with_page(
        mut self,
        query: &str,
        page: CatalogPage<ResultItem>,
    ) -> Self {
        self.searches
            .insert((query.to_string(), page.page), FakeResponse::Page(page));
        self
    }

    pub fn with_failure(mut self, query: &str, page: u32, status: u16, message: &str) -> Self {
        self.searches.insert(
            (query.to_string(), page),
            FakeResponse::Fail {
                status,
                message: message.to_string(),
            },
        );
        self
    }

    /// Delay every search for `query`.
    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    pub fn with_suggestions(mut self, trending: Vec<ResultItem>, popular: Vec<ResultItem>) -> Self {
        self.trending = Some(trending);
        self.popular = Some(popular);
        self
    }

    pub fn with_failing_listings(mut self) -> Self {
        self.trending = None;
        self.popular = None;
        self
    }

    pub fn with_movie(mut self, details: MovieDetails) -> Self {
        self.movies.insert(details.id, details);
        self
    }

    pub fn with_show(mut self, details: ShowDetails) -> Self {
        self.shows.insert(details.id, details);
        self
    }

    pub fn with_season(mut self, show_id: u64, season: SeasonDetails) -> Self {
        self.seasons.insert((show_id, season.season_number), season);
        self
    }

    pub fn with_credits(mut self, title_id: u64, credits: Credits) -> Self {
        self.credits.insert(title_id, credits);
        self
    }

    pub fn with_videos(mut self, title_id: u64, videos: VideoList) -> Self {
        self.videos.insert(title_id, videos);
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn search_calls(&self) -> Vec<(String, u32)> {
        self.search_calls.lock().clone()
    }

    /// Number of trending/popular listing requests served.
    pub fn listing_calls(&self) -> usize {
        self.listing_calls.load(Ordering::SeqCst)
    }

    fn listing(
        &self,
        items: &Option<Vec<ResultItem>>,
        page: u32,
    ) -> CatalogResult<CatalogPage<ResultItem>> {
        self.listing_calls.fetch_add(1, Ordering::SeqCst);
        match items {
            Some(items) => {
                let total = items.len() as u32;
                Ok(page_of(items.clone(), page, 1, total))
            }
            None => Err(CatalogError::Status {
                status: 503,
                message: "listing unavailable".to_string(),
            }),
        }
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn search(
        &self,
        query: &str,
        page: u32,
    ) -> CatalogResult<CatalogPage<ResultItem>> {
        self.search_calls.lock().push((query.to_string(), page));
        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        self.searches
            .get(&(query.to_string(), page))
            .cloned()
            .map(FakeResponse::into_result)
            .unwrap_or_else(|| Ok(CatalogPage::empty(page)))
    }

    async fn trending_movies(
        &self,
        _window: TimeWindow,
        page: u32,
    ) -> CatalogResult<CatalogPage<ResultItem>> {
        self.listing(&self.trending, page)
    }

    async fn popular_shows(
        &self,
        page: u32,
    ) -> CatalogResult<CatalogPage<ResultItem>> {
        self.listing(&self.popular, page)
    }

    async fn movie_details(&self, id: CatalogId) -> CatalogResult<MovieDetails> {
        self.movies.get(&id.get()).cloned().ok_or(CatalogError::NotFound)
    }

    async fn show_details(&self, id: CatalogId) -> CatalogResult<ShowDetails> {
        self.shows.get(&id.get()).cloned().ok_or(CatalogError::NotFound)
    }

    async fn show_season(
        &self,
        id: CatalogId,
        season: u32,
    ) -> CatalogResult<SeasonDetails> {
        self.seasons
            .get(&(id.get(), season))
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    async fn credits(
        &self,
        _kind: MediaKind,
        id: CatalogId,
    ) -> CatalogResult<Credits> {
        Ok(self.credits.get(&id.get()).cloned().unwrap_or_default())
    }

    async fn videos(
        &self,
        _kind: MediaKind,
        id: CatalogId,
    ) -> CatalogResult<VideoList> {
        Ok(self.videos.get(&id.get()).cloned().unwrap_or_default())
    }
}
