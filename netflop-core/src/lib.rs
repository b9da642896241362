//! Core library of netflop: catalog access, the incremental search
//! controller, page view models and background video embedding.

pub mod catalog;
pub mod debounce;
pub mod details;
pub mod embed;
pub mod error;
pub mod home;
pub mod location;
pub mod render;
pub mod search;
pub mod suggestions;
pub mod theme;

pub use catalog::{CatalogApi, ImageUrls, TmdbCatalog};
pub use debounce::Debouncer;
pub use error::{CatalogError, CatalogResult, EmbedError, ThemeStoreError};
pub use location::UrlLocation;
pub use search::{SearchController, SearchRuntime, SearchSettings};
pub use suggestions::SuggestionProvider;
pub use theme::ThemeStore;
