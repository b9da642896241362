use chrono::{Datelike, NaiveDate};

use crate::ids::CatalogId;
use crate::media_kind::MediaKind;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieSummary {
    pub id: CatalogId,
    pub title: String,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: Option<f32>,
    pub popularity: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShowSummary {
    pub id: CatalogId,
    pub name: String,
    pub original_name: Option<String>,
    pub overview: Option<String>,
    pub first_air_date: Option<NaiveDate>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: Option<f32>,
    pub popularity: Option<f32>,
    pub origin_country: Vec<String>,
}

/// A search/list hit: either a movie or a show.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "media_type"))]
pub enum ResultItem {
    #[cfg_attr(feature = "serde", serde(rename = "movie"))]
    Movie(MovieSummary),
    #[cfg_attr(feature = "serde", serde(rename = "tv"))]
    Show(ShowSummary),
}

impl ResultItem {
    pub fn kind(&self) -> MediaKind {
        match self {
            ResultItem::Movie(_) => MediaKind::Movie,
            ResultItem::Show(_) => MediaKind::Show,
        }
    }

    pub fn id(&self) -> CatalogId {
        match self {
            ResultItem::Movie(movie) => movie.id,
            ResultItem::Show(show) => show.id,
        }
    }

    /// Identity used for de-duplication across mixed movie/show lists.
    pub fn key(&self) -> (MediaKind, CatalogId) {
        (self.kind(), self.id())
    }

    pub fn title(&self) -> &str {
        match self {
            ResultItem::Movie(movie) => &movie.title,
            ResultItem::Show(show) => &show.name,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            ResultItem::Movie(movie) => movie.release_date,
            ResultItem::Show(show) => show.first_air_date,
        }
    }

    pub fn year(&self) -> Option<i32> {
        self.date().map(|date| date.year())
    }

    pub fn overview(&self) -> Option<&str> {
        match self {
            ResultItem::Movie(movie) => movie.overview.as_deref(),
            ResultItem::Show(show) => show.overview.as_deref(),
        }
    }

    pub fn poster_path(&self) -> Option<&str> {
        match self {
            ResultItem::Movie(movie) => movie.poster_path.as_deref(),
            ResultItem::Show(show) => show.poster_path.as_deref(),
        }
    }

    pub fn backdrop_path(&self) -> Option<&str> {
        match self {
            ResultItem::Movie(movie) => movie.backdrop_path.as_deref(),
            ResultItem::Show(show) => show.backdrop_path.as_deref(),
        }
    }

    pub fn vote_average(&self) -> Option<f32> {
        match self {
            ResultItem::Movie(movie) => movie.vote_average,
            ResultItem::Show(show) => show.vote_average,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64) -> ResultItem {
        ResultItem::Movie(MovieSummary {
            id: CatalogId::new(id).unwrap(),
            title: "Heat".into(),
            original_title: None,
            overview: None,
            release_date: NaiveDate::from_ymd_opt(1995, 12, 15),
            poster_path: Some("/heat.jpg".into()),
            backdrop_path: None,
            vote_average: Some(7.9),
            popularity: None,
        })
    }

    #[test]
    fn accessors_follow_variant() {
        let item = movie(949);
        assert_eq!(item.kind(), MediaKind::Movie);
        assert_eq!(item.title(), "Heat");
        assert_eq!(item.year(), Some(1995));
        assert_eq!(item.poster_path(), Some("/heat.jpg"));
        assert_eq!(item.key(), (MediaKind::Movie, CatalogId::new(949).unwrap()));
    }
}
