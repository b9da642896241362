//! Placeholder content shown when no search is active.

use std::collections::HashSet;
use std::sync::Arc;

use netflop_model::{ResultItem, TimeWindow};
use tracing::{debug, warn};

use crate::catalog::{CatalogApi, ImageUrls};
use crate::error::{CatalogError, CatalogResult};
use crate::render::CardGrid;

pub const SUGGESTIONS_LOADING: &str = "Chargement des suggestions…";
pub const SUGGESTIONS_EMPTY: &str = "Aucune suggestion pour le moment.";
pub const SUGGESTIONS_FAILED: &str =
    "Impossible de charger les suggestions pour le moment.";

/// Fetches trending-today movies and popular shows as suggestions.
#[derive(Debug, Clone)]
pub struct SuggestionProvider {
    catalog: Arc<dyn CatalogApi>,
    batch: usize,
}

impl SuggestionProvider {
    pub fn new(catalog: Arc<dyn CatalogApi>, batch: usize) -> Self {
        Self { catalog, batch }
    }

    pub fn batch(&self) -> usize {
        self.batch
    }

    /// Both batches are fetched concurrently; either failing fails the load.
    pub async fn load(&self) -> CatalogResult<Vec<ResultItem>> {
        let (movies, shows) = futures::try_join!(
            self.catalog.trending_movies(TimeWindow::Day, 1),
            self.catalog.popular_shows(1),
        )?;
        let merged = merge(movies.results, shows.results, self.batch);
        debug!(count = merged.len(), "suggestions loaded");
        Ok(merged)
    }
}

/// First `batch` items of each list, concatenated and de-duplicated by
/// (kind, id). The first occurrence wins.
pub fn merge(
    movies: Vec<ResultItem>,
    shows: Vec<ResultItem>,
    batch: usize,
) -> Vec<ResultItem> {
    let mut seen = HashSet::new();
    movies
        .into_iter()
        .take(batch)
        .chain(shows.into_iter().take(batch))
        .filter(|item| seen.insert(item.key()))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SuggestionStatus {
    #[default]
    NotLoaded,
    Loading,
    Loaded(CardGrid),
    Empty,
    Error,
}

/// The suggestions section: visibility plus its load state.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionPanel {
    pub hidden: bool,
    pub status: SuggestionStatus,
    ticket: u64,
}

impl Default for SuggestionPanel {
    fn default() -> Self {
        Self {
            hidden: true,
            status: SuggestionStatus::NotLoaded,
            ticket: 0,
        }
    }
}

impl SuggestionPanel {
    /// Reveal the panel. Returns the ticket of a load the caller must start,
    /// or `None` when the current content can be reused.
    pub fn show(&mut self, force: bool) -> Option<u64> {
        self.hidden = false;
        let needs_load = match self.status {
            SuggestionStatus::Loaded(_) | SuggestionStatus::Loading => force,
            SuggestionStatus::NotLoaded
            | SuggestionStatus::Empty
            | SuggestionStatus::Error => true,
        };
        needs_load.then(|| self.begin_loading())
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn begin_loading(&mut self) -> u64 {
        self.ticket += 1;
        self.status = SuggestionStatus::Loading;
        self.ticket
    }

    /// Apply a finished load. Outcomes of superseded loads are ignored.
    pub fn apply(
        &mut self,
        ticket: u64,
        outcome: Result<Vec<ResultItem>, CatalogError>,
        images: &ImageUrls,
    ) -> bool {
        if ticket != self.ticket {
            debug!(ticket, current = self.ticket, "stale suggestions discarded");
            return false;
        }

        self.status = match outcome {
            Ok(items) if items.is_empty() => SuggestionStatus::Empty,
            Ok(items) => SuggestionStatus::Loaded(CardGrid::from_items(&items, images)),
            Err(err) => {
                warn!(error = %err, "failed to load suggestions");
                SuggestionStatus::Error
            }
        };
        true
    }

    /// Placeholder text for non-card states.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self.status {
            SuggestionStatus::Loading => Some(SUGGESTIONS_LOADING),
            SuggestionStatus::Empty => Some(SUGGESTIONS_EMPTY),
            SuggestionStatus::Error => Some(SUGGESTIONS_FAILED),
            SuggestionStatus::NotLoaded | SuggestionStatus::Loaded(_) => None,
        }
    }

    pub fn grid(&self) -> Option<&CardGrid> {
        match &self.status {
            SuggestionStatus::Loaded(grid) => Some(grid),
            _ => None,
        }
    }
}
