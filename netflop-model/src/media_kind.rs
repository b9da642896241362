use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// The two kinds of titles the browser knows how to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaKind {
    Movie,
    #[cfg_attr(feature = "serde", serde(rename = "tv"))]
    Show,
}

/// Field-presence hints used when a record carries no explicit media type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindHints {
    pub has_first_air_date: bool,
    pub has_release_date: bool,
    pub has_name: bool,
    pub has_title: bool,
}

impl MediaKind {
    /// Catalog path segment and `type` query value (`movie` / `tv`).
    pub const fn as_path(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Show => "tv",
        }
    }

    /// Decide the variant of a catalog record.
    ///
    /// An explicit `media_type` always wins. Without one, a first-air date (or
    /// a `name` with no `title`) marks a show and everything else is a movie.
    /// Explicit types other than `movie`/`tv` (people, collections) yield
    /// `None`.
    pub fn discriminate(explicit: Option<&str>, hints: KindHints) -> Option<Self> {
        match explicit.map(str::trim).filter(|value| !value.is_empty()) {
            Some(raw) => raw.parse().ok(),
            None if hints.has_first_air_date => Some(MediaKind::Show),
            None if hints.has_release_date => Some(MediaKind::Movie),
            None if hints.has_name && !hints.has_title => Some(MediaKind::Show),
            None => Some(MediaKind::Movie),
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for MediaKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" => Ok(MediaKind::Movie),
            "tv" | "show" | "series" => Ok(MediaKind::Show),
            _ => Err(ModelError::UnknownMediaKind(s.to_string())),
        }
    }
}

/// Trending aggregation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeWindow {
    Day,
    #[default]
    Week,
}

impl TimeWindow {
    pub const fn as_path(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }
}

impl Display for TimeWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for TimeWindow {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(TimeWindow::Day),
            "week" => Ok(TimeWindow::Week),
            _ => Err(ModelError::UnknownTimeWindow(s.to_string())),
        }
    }
}
