//! Read access to the remote movie/TV catalog.

pub mod images;
pub mod tmdb;
pub mod wire;

use std::fmt::Debug;

use async_trait::async_trait;
use netflop_model::{
    CatalogId, CatalogPage, Credits, MediaKind, MovieDetails, ResultItem,
    SeasonDetails, ShowDetails, TimeWindow, Video, VideoList,
};

use crate::error::CatalogResult;

pub use images::ImageUrls;
pub use tmdb::TmdbCatalog;

/// Catalog operations used by the search, home and details screens.
///
/// Listing operations return already-discriminated [`ResultItem`]s; records
/// that are neither movies nor shows never leave the implementation.
#[async_trait]
pub trait CatalogApi: Send + Sync + Debug {
    /// Multi search across movies and shows. `page` is 1-based.
    async fn search(
        &self,
        query: &str,
        page: u32,
    ) -> CatalogResult<CatalogPage<ResultItem>>;

    async fn trending_movies(
        &self,
        window: TimeWindow,
        page: u32,
    ) -> CatalogResult<CatalogPage<ResultItem>>;

    async fn popular_shows(
        &self,
        page: u32,
    ) -> CatalogResult<CatalogPage<ResultItem>>;

    async fn movie_details(&self, id: CatalogId) -> CatalogResult<MovieDetails>;

    async fn show_details(&self, id: CatalogId) -> CatalogResult<ShowDetails>;

    async fn show_season(
        &self,
        id: CatalogId,
        season: u32,
    ) -> CatalogResult<SeasonDetails>;

    async fn credits(&self, kind: MediaKind, id: CatalogId)
    -> CatalogResult<Credits>;

    async fn videos(
        &self,
        kind: MediaKind,
        id: CatalogId,
    ) -> CatalogResult<VideoList>;

    /// First official trailer of a title, if any.
    async fn trailer(
        &self,
        kind: MediaKind,
        id: CatalogId,
    ) -> CatalogResult<Option<Video>> {
        Ok(self.videos(kind, id).await?.trailer().cloned())
    }
}
