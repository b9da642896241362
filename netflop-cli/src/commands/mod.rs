pub mod details;
pub mod home;
pub mod search;
pub mod theme;

use std::sync::Arc;

use anyhow::Context;
use netflop_config::Config;
use netflop_core::{CatalogApi, ImageUrls, TmdbCatalog};

pub(crate) fn catalog(config: &Config) -> anyhow::Result<Arc<dyn CatalogApi>> {
    let catalog = TmdbCatalog::new(&config.catalog)
        .context("failed to build catalog client")?;
    Ok(Arc::new(catalog))
}

pub(crate) fn images(config: &Config) -> ImageUrls {
    ImageUrls::new(config.catalog.image_base_url.as_str())
}
