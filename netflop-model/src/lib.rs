//! Catalog data models shared across netflop crates.

pub use ::chrono;

pub mod dates;
pub mod details;
pub mod error;
pub mod ids;
pub mod image;
pub mod item;
pub mod media_kind;
pub mod page;
pub mod theme;

pub use details::{
    CastMember, Credits, Episode, Genre, MovieDetails, SeasonDetails,
    SeasonSummary, ShowDetails, Video, VideoList,
};
pub use error::{ModelError, Result as ModelResult};
pub use ids::CatalogId;
pub use image::ImageSize;
pub use item::{MovieSummary, ResultItem, ShowSummary};
pub use media_kind::{KindHints, MediaKind, TimeWindow};
pub use page::CatalogPage;
pub use theme::Theme;
