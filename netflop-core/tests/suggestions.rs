mod support;

use std::sync::Arc;

use netflop_core::catalog::ImageUrls;
use netflop_core::error::CatalogError;
use netflop_core::home::load_home;
use netflop_core::suggestions::{SUGGESTIONS_FAILED, SuggestionPanel, SuggestionProvider};
use netflop_model::MediaKind;

use support::{FakeCatalog, movie, movies, show};

#[tokio::test]
async fn provider_takes_batches_and_dedupes_by_kind_and_id() {
    let mut trending = movies(1, 8, "Trending");
    trending.insert(1, movie(1, "Trending again"));
    let popular = vec![show(1, "Dark"), show(2, "Lost"), show(2, "Lost"), show(3, "Fargo")];
    let catalog = FakeCatalog::new().with_suggestions(trending, popular).shared();

    let provider = SuggestionProvider::new(catalog.clone(), 3);
    let items = provider.load().await.unwrap();

    let keys: Vec<(MediaKind, u64)> = items
        .iter()
        .map(|item| (item.kind(), item.id().get()))
        .collect();
    assert_eq!(
        keys,
        vec![
            (MediaKind::Movie, 1),
            (MediaKind::Movie, 2),
            (MediaKind::Show, 1),
            (MediaKind::Show, 2),
        ]
    );
    assert_eq!(catalog.listing_calls(), 2);
}

#[tokio::test]
async fn provider_failure_renders_fallback_text() {
    let catalog = FakeCatalog::new().with_failing_listings().shared();
    let provider = SuggestionProvider::new(catalog, 6);

    let outcome = provider.load().await;
    assert!(matches!(outcome, Err(CatalogError::Status { status: 503, .. })));

    let mut panel = SuggestionPanel::default();
    let ticket = panel.show(false).unwrap();
    panel.apply(ticket, outcome, &ImageUrls::default());
    assert_eq!(panel.placeholder(), Some(SUGGESTIONS_FAILED));
    assert!(panel.show(false).is_some(), "failed suggestions can be reloaded");
}

#[tokio::test]
async fn home_rows_and_hero() {
    let catalog = Arc::new(
        FakeCatalog::new()
            .with_suggestions(movies(10, 4, "Film"), vec![show(5, "Dark"), show(6, "Lost")]),
    );

    let home = load_home(catalog.as_ref(), &ImageUrls::default()).await.unwrap();

    assert_eq!(home.hero.as_ref().map(|hero| hero.title.as_str()), Some("Film 1"));
    assert_eq!(home.rows[0].id, "series");
    assert_eq!(home.rows[0].cards.len(), 2);
    assert_eq!(home.rows[1].id, "films");
    assert_eq!(home.rows[1].cards.len(), 4);
}

#[tokio::test]
async fn home_failure_is_reported() {
    let catalog = FakeCatalog::new().with_failing_listings();
    assert!(load_home(&catalog, &ImageUrls::default()).await.is_err());
}
