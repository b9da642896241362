//! Home page: two rows of titles under a hero banner.

use netflop_model::{ImageSize, ResultItem, TimeWindow};
use tracing::{debug, warn};

use crate::catalog::{CatalogApi, ImageUrls};
use crate::error::CatalogResult;
use crate::render::CardGrid;

pub const HERO_FALLBACK_TITLE: &str = "Tendances";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub title: String,
    pub backdrop_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaRow {
    /// Anchor of the row (`series`, `films`).
    pub id: &'static str,
    pub title: &'static str,
    pub cards: CardGrid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub hero: Option<Hero>,
    pub rows: Vec<MediaRow>,
}

/// Hero from the top-ranked trending movie.
pub fn hero_from(item: &ResultItem, images: &ImageUrls) -> Hero {
    let title = item.title().trim();
    Hero {
        title: if title.is_empty() {
            HERO_FALLBACK_TITLE.to_string()
        } else {
            title.to_string()
        },
        backdrop_url: images.url(item.backdrop_path(), ImageSize::backdrop()),
    }
}

pub fn build_home(
    shows: &[ResultItem],
    movies: &[ResultItem],
    images: &ImageUrls,
) -> HomeView {
    HomeView {
        hero: movies.first().map(|top| hero_from(top, images)),
        rows: vec![
            MediaRow {
                id: "series",
                title: "Séries",
                cards: CardGrid::from_items(shows, images),
            },
            MediaRow {
                id: "films",
                title: "Films",
                cards: CardGrid::from_items(movies, images),
            },
        ],
    }
}

/// Fetch popular shows and this week's trending movies concurrently.
pub async fn load_home(
    catalog: &dyn CatalogApi,
    images: &ImageUrls,
) -> CatalogResult<HomeView> {
    let fetched = futures::try_join!(
        catalog.popular_shows(1),
        catalog.trending_movies(TimeWindow::Week, 1),
    );
    match fetched {
        Ok((shows, movies)) => {
            debug!(
                shows = shows.results.len(),
                movies = movies.results.len(),
                "home rows loaded"
            );
            Ok(build_home(&shows.results, &movies.results, images))
        }
        Err(err) => {
            warn!(error = %err, "failed to load home rows");
            Err(err)
        }
    }
}
