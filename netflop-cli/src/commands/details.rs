use netflop_config::Config;
use netflop_core::details::{DetailsLoader, DetailsQuery, DetailsView};
use netflop_core::embed::shared_iframe_runtime;
use netflop_core::location::UrlLocation;
use netflop_core::render::render_details;
use netflop_model::{CatalogId, MediaKind};
use tracing::debug;
use url::Url;

#[derive(Debug)]
pub enum Target {
    Url(Url),
    Id {
        kind: MediaKind,
        id: Option<CatalogId>,
    },
}

impl Target {
    fn query(self) -> DetailsQuery {
        match self {
            Target::Url(url) => DetailsQuery::from_location(&UrlLocation::new(url)),
            Target::Id { kind, id } => DetailsQuery { kind, id },
        }
    }
}

pub async fn run(config: &Config, target: Target, season: Option<u32>) -> anyhow::Result<()> {
    let catalog = super::catalog(config)?;
    let images = super::images(config);
    let origin = config.ui.page_url.origin().ascii_serialization();

    let loader = DetailsLoader::new(catalog.as_ref(), &images)
        .with_player(shared_iframe_runtime(), Some(origin));
    let mut view = loader.load(&target.query()).await;

    if let Some(season) = season
        && let DetailsView::Loaded(page) = &mut view
        && let Some(section) = page.seasons.as_mut()
    {
        if section.picker.select(season) {
            section.episodes = loader.load_season(page.id, season).await;
        } else {
            debug!(season, "unknown season; keeping the latest one");
        }
    }

    println!("{}", render_details(&view));
    Ok(())
}
