//! Configuration loading for netflop.
//!
//! Values are composed from environment variables (optionally seeded from a
//! `.env` file), an optional `netflop.toml`, and built-in defaults, in that
//! order of precedence. Non-fatal problems are collected as warnings for the
//! caller to log.

pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions};
pub use models::{
    CatalogConfig, Config, ConfigMetadata, SearchConfig, UiConfig,
};
pub use sources::{EnvConfig, FileConfig};
pub use validation::{ConfigWarning, ConfigWarnings};
