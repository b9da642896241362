//! Detail records for the title page: full movie/show metadata, seasons,
//! credits and videos.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieDetails {
    pub id: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::dates::deserialize_optional_date")
    )]
    pub release_date: Option<NaiveDate>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    pub vote_average: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub genres: Vec<Genre>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeasonSummary {
    pub season_number: u32,
    pub name: Option<String>,
    pub episode_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShowDetails {
    pub id: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub original_name: Option<String>,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::dates::deserialize_optional_date")
    )]
    pub first_air_date: Option<NaiveDate>,
    /// Typical episode runtimes in minutes; the first entry is representative.
    #[cfg_attr(feature = "serde", serde(default))]
    pub episode_run_time: Vec<u32>,
    pub number_of_seasons: Option<u32>,
    pub number_of_episodes: Option<u32>,
    pub vote_average: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub genres: Vec<Genre>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub seasons: Vec<SeasonSummary>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Episode {
    pub episode_number: u32,
    pub name: Option<String>,
    /// Kept verbatim; it is only ever displayed.
    pub air_date: Option<String>,
    pub runtime: Option<u32>,
    pub overview: Option<String>,
    pub still_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeasonDetails {
    pub season_number: u32,
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub episodes: Vec<Episode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastMember {
    pub name: Option<String>,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Credits {
    #[cfg_attr(feature = "serde", serde(default))]
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Video {
    pub key: String,
    pub site: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub official: bool,
}

impl Video {
    pub fn is_official_trailer(&self) -> bool {
        self.official && self.kind == "Trailer"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VideoList {
    #[cfg_attr(feature = "serde", serde(default))]
    pub results: Vec<Video>,
}

impl VideoList {
    /// First official trailer, if the title has one.
    pub fn trailer(&self) -> Option<&Video> {
        self.results.iter().find(|video| video.is_official_trailer())
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn blank_dates_and_missing_lists_are_tolerated() {
        let raw = r#"{
            "id": 1399,
            "name": "Game of Thrones",
            "first_air_date": "",
            "number_of_seasons": 8,
            "tagline": null
        }"#;
        let show: ShowDetails = serde_json::from_str(raw).unwrap();
        assert_eq!(show.first_air_date, None);
        assert!(show.seasons.is_empty());
        assert!(show.episode_run_time.is_empty());
        assert_eq!(show.number_of_seasons, Some(8));
    }

    #[test]
    fn trailer_requires_official_flag() {
        let raw = r#"{"results": [
            {"key": "teaser1", "type": "Teaser", "official": true},
            {"key": "fan", "type": "Trailer", "official": false},
            {"key": "real", "type": "Trailer", "official": true}
        ]}"#;
        let videos: VideoList = serde_json::from_str(raw).unwrap();
        assert_eq!(videos.trailer().map(|v| v.key.as_str()), Some("real"));
    }
}
