use netflop_model::{CatalogId, ImageSize, MediaKind, ResultItem};

use crate::catalog::ImageUrls;

pub const POSTER_PLACEHOLDER: &str = "https://placehold.co/400x600";

/// Link to the details page of a title.
pub fn details_href(kind: MediaKind, id: CatalogId) -> String {
    format!("details.html?type={}&id={}", kind.as_path(), id)
}

/// A poster card for one catalog title.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub key: String,
    pub kind: MediaKind,
    pub id: CatalogId,
    pub title: String,
    pub year: Option<i32>,
    pub poster_url: String,
    pub details_href: String,
    pub tab_index: usize,
}

impl Card {
    pub fn from_item(item: &ResultItem, images: &ImageUrls, tab_index: usize) -> Self {
        let (kind, id) = item.key();
        Self {
            key: format!("{}-{}", kind.as_path(), id),
            kind,
            id,
            title: item.title().to_string(),
            year: item.year(),
            poster_url: images
                .url(item.poster_path(), ImageSize::poster())
                .unwrap_or_else(|| POSTER_PLACEHOLDER.to_string()),
            details_href: details_href(kind, id),
            tab_index,
        }
    }
}

/// Ordered cards; tab indices follow insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardGrid {
    cards: Vec<Card>,
}

impl CardGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items<'a>(
        items: impl IntoIterator<Item = &'a ResultItem>,
        images: &ImageUrls,
    ) -> Self {
        let mut grid = Self::new();
        grid.extend(items, images);
        grid
    }

    pub fn push_item(&mut self, item: &ResultItem, images: &ImageUrls) {
        let card = Card::from_item(item, images, self.cards.len());
        self.cards.push(card);
    }

    pub fn extend<'a>(
        &mut self,
        items: impl IntoIterator<Item = &'a ResultItem>,
        images: &ImageUrls,
    ) {
        for item in items {
            self.push_item(item, images);
        }
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl<'a> IntoIterator for &'a CardGrid {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
