//! Raw catalog payloads as returned by the list/search endpoints.

use serde::Deserialize;

use netflop_model::dates::parse_date;
use netflop_model::{
    CatalogId, CatalogPage, KindHints, MediaKind, MovieSummary, ResultItem,
    ShowSummary,
};

#[derive(Debug, Clone, Deserialize)]
pub struct RawPage<T> {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u32>,
}

impl RawPage<RawCatalogItem> {
    /// Convert to a typed page, dropping records that are not titles or have
    /// no usable identifier. Missing `page` falls back to the requested page.
    pub fn into_page(self, requested_page: u32) -> CatalogPage<ResultItem> {
        CatalogPage {
            page: self.page.unwrap_or(requested_page),
            results: self
                .results
                .into_iter()
                .filter_map(RawCatalogItem::into_item)
                .collect(),
            total_pages: self.total_pages.unwrap_or(0),
            total_results: self.total_results.unwrap_or(0),
        }
    }
}

/// A loosely typed movie/show/person record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCatalogItem {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub popularity: Option<f32>,
    #[serde(default)]
    pub origin_country: Option<Vec<String>>,
}

impl RawCatalogItem {
    pub fn kind(&self) -> Option<MediaKind> {
        MediaKind::discriminate(
            self.media_type.as_deref(),
            KindHints {
                has_first_air_date: self.first_air_date.is_some(),
                has_release_date: self.release_date.is_some(),
                has_name: self.name.is_some(),
                has_title: self.title.is_some(),
            },
        )
    }

    pub fn into_item(self) -> Option<ResultItem> {
        let id = self.id.and_then(CatalogId::new)?;
        let kind = self.kind()?;

        let item = match kind {
            MediaKind::Movie => ResultItem::Movie(MovieSummary {
                id,
                title: self
                    .title
                    .or(self.name)
                    .or_else(|| self.original_title.clone())
                    .unwrap_or_default(),
                original_title: self.original_title,
                overview: non_blank(self.overview),
                release_date: self.release_date.as_deref().and_then(parse_date),
                poster_path: non_blank(self.poster_path),
                backdrop_path: non_blank(self.backdrop_path),
                vote_average: self.vote_average,
                popularity: self.popularity,
            }),
            MediaKind::Show => ResultItem::Show(ShowSummary {
                id,
                name: self
                    .name
                    .or(self.title)
                    .or_else(|| self.original_name.clone())
                    .unwrap_or_default(),
                original_name: self.original_name,
                overview: non_blank(self.overview),
                first_air_date: self
                    .first_air_date
                    .as_deref()
                    .and_then(parse_date),
                poster_path: non_blank(self.poster_path),
                backdrop_path: non_blank(self.backdrop_path),
                vote_average: self.vote_average,
                popularity: self.popularity,
                origin_country: self.origin_country.unwrap_or_default(),
            }),
        };
        Some(item)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_search_page_drops_people_and_blank_ids() {
        let raw = r#"{
            "page": 1,
            "total_pages": 5,
            "total_results": 93,
            "results": [
                {"id": 268, "media_type": "movie", "title": "Batman", "release_date": "1989-06-23"},
                {"id": 2098, "media_type": "tv", "name": "Batman: The Animated Series", "first_air_date": "1992-09-05"},
                {"id": 3894, "media_type": "person", "name": "Christian Bale"},
                {"media_type": "movie", "title": "No id"},
                {"id": 0, "media_type": "movie", "title": "Zero id"}
            ]
        }"#;
        let page: RawPage<RawCatalogItem> = serde_json::from_str(raw).unwrap();
        let page = page.into_page(1);

        assert_eq!(page.total_results, 93);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].kind(), MediaKind::Movie);
        assert_eq!(page.results[0].year(), Some(1989));
        assert_eq!(page.results[1].kind(), MediaKind::Show);
        assert_eq!(page.results[1].title(), "Batman: The Animated Series");
    }

    #[test]
    fn untagged_records_use_date_presence() {
        let raw = r#"{"results": [
            {"id": 1399, "name": "Game of Thrones", "first_air_date": ""},
            {"id": 550, "title": "Fight Club", "release_date": "1999-10-15"}
        ]}"#;
        let page: RawPage<RawCatalogItem> = serde_json::from_str(raw).unwrap();
        let page = page.into_page(3);

        assert_eq!(page.page, 3);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.results[0].kind(), MediaKind::Show);
        assert_eq!(page.results[0].date(), None);
        assert_eq!(page.results[1].kind(), MediaKind::Movie);
    }
}
