//! Title details page: hero metadata, trailer background, cast and seasons.

use netflop_model::{
    CatalogId, Credits, Episode, ImageSize, MediaKind, MovieDetails,
    SeasonDetails, ShowDetails,
};
use tracing::{debug, warn};

use crate::catalog::{CatalogApi, ImageUrls};
use crate::embed::{PlayerTarget, SharedRuntime, attach_background_video};
use crate::error::{CatalogResult, EmbedError};
use crate::location::UrlLocation;

pub const MISSING_ID: &str = "Identifiant manquant.";
pub const NO_OVERVIEW: &str = "Aucun synopsis disponible.";
pub const NO_EPISODES: &str = "Aucun épisode pour le moment.";
pub const UNKNOWN_RUNTIME: &str = "Durée Inconnue";
pub const UNTITLED_EPISODE: &str = "Sans titre";
pub const CAST_PLACEHOLDER: &str = "https://placehold.co/240x360?text=No+Photo";
pub const EPISODE_PLACEHOLDER: &str = "https://placehold.co/320x180?text=Episode";
pub const CAST_LIMIT: usize = 20;
pub const VIDEO_CONTAINER: &str = "hero-video";

/// `type` and `id` parameters of the details page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailsQuery {
    pub kind: MediaKind,
    pub id: Option<CatalogId>,
}

impl DetailsQuery {
    /// `type=tv` selects a show; anything else is a movie.
    pub fn from_location(location: &UrlLocation) -> Self {
        let kind = match location.param("type") {
            Some(raw) if raw.trim().eq_ignore_ascii_case("tv") => MediaKind::Show,
            _ => MediaKind::Movie,
        };
        let id = location.param("id").and_then(|raw| raw.parse().ok());
        Self { kind, id }
    }
}

/// `{h}h {m}min`; `None` for unknown or zero runtimes.
pub fn format_runtime(minutes: Option<u32>) -> Option<String> {
    match minutes {
        Some(total) if total > 0 => Some(format!("{}h {}min", total / 60, total % 60)),
        _ => None,
    }
}

fn seasons_label(count: u32) -> String {
    if count > 1 {
        format!("{count} saisons")
    } else {
        format!("{count} saison")
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailsHero {
    pub kind: MediaKind,
    pub title: String,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    /// Year and runtime joined with ` • `.
    pub meta: Option<String>,
    pub seasons: Option<String>,
    pub episodes: Option<String>,
    pub rating: Option<String>,
    pub genres: Vec<String>,
    pub tagline: Option<String>,
    pub overview: String,
}

impl DetailsHero {
    pub fn breadcrumb(&self) -> &'static str {
        match self.kind {
            MediaKind::Show => "Séries",
            MediaKind::Movie => "Films",
        }
    }

    pub fn from_movie(movie: &MovieDetails, images: &ImageUrls) -> Self {
        let year = movie.release_date.map(|date| date.format("%Y").to_string());
        Self {
            kind: MediaKind::Movie,
            title: movie.title.clone(),
            poster_url: images.url(
                movie.poster_path.as_deref().or(movie.backdrop_path.as_deref()),
                ImageSize::poster(),
            ),
            backdrop_url: images.url(movie.backdrop_path.as_deref(), ImageSize::backdrop()),
            meta: join_meta(year, format_runtime(movie.runtime)),
            seasons: None,
            episodes: None,
            rating: rating(movie.vote_average),
            genres: movie.genres.iter().map(|genre| genre.name.clone()).collect(),
            tagline: non_blank(movie.tagline.as_deref()),
            overview: non_blank(movie.overview.as_deref())
                .unwrap_or_else(|| NO_OVERVIEW.to_string()),
        }
    }

    pub fn from_show(show: &ShowDetails, images: &ImageUrls) -> Self {
        let year = show.first_air_date.map(|date| date.format("%Y").to_string());
        Self {
            kind: MediaKind::Show,
            title: show.name.clone(),
            poster_url: images.url(
                show.poster_path.as_deref().or(show.backdrop_path.as_deref()),
                ImageSize::poster(),
            ),
            backdrop_url: images.url(show.backdrop_path.as_deref(), ImageSize::backdrop()),
            meta: join_meta(
                year,
                format_runtime(show.episode_run_time.first().copied()),
            ),
            seasons: show
                .number_of_seasons
                .filter(|count| *count > 0)
                .map(seasons_label),
            episodes: show
                .number_of_episodes
                .filter(|count| *count > 0)
                .map(|count| format!("{count} épisodes")),
            rating: rating(show.vote_average),
            genres: show.genres.iter().map(|genre| genre.name.clone()).collect(),
            tagline: non_blank(show.tagline.as_deref()),
            overview: non_blank(show.overview.as_deref())
                .unwrap_or_else(|| NO_OVERVIEW.to_string()),
        }
    }
}

fn join_meta(year: Option<String>, runtime: Option<String>) -> Option<String> {
    let parts: Vec<String> = [year, runtime].into_iter().flatten().collect();
    (!parts.is_empty()).then(|| parts.join(" • "))
}

fn rating(vote: Option<f32>) -> Option<String> {
    vote.filter(|vote| *vote > 0.0)
        .map(|vote| format!("★ {vote:.1}"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastCard {
    pub name: String,
    pub character: String,
    pub photo_url: String,
}

pub fn cast_cards(credits: &Credits, images: &ImageUrls) -> Vec<CastCard> {
    credits
        .cast
        .iter()
        .take(CAST_LIMIT)
        .map(|member| CastCard {
            name: member.name.clone().unwrap_or_default(),
            character: member.character.clone().unwrap_or_default(),
            photo_url: images
                .url(member.profile_path.as_deref(), ImageSize::profile())
                .unwrap_or_else(|| CAST_PLACEHOLDER.to_string()),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonOption {
    pub season_number: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonPicker {
    pub options: Vec<SeasonOption>,
    pub selected: Option<u32>,
}

impl SeasonPicker {
    /// Options in catalog order; the last season is selected.
    pub fn from_show(show: &ShowDetails) -> Self {
        let options: Vec<SeasonOption> = show
            .seasons
            .iter()
            .map(|season| SeasonOption {
                season_number: season.season_number,
                label: non_blank(season.name.as_deref())
                    .unwrap_or_else(|| format!("Saison {}", season.season_number)),
            })
            .collect();
        let selected = options.last().map(|option| option.season_number);
        Self { options, selected }
    }

    /// Select `season` if the show has it.
    pub fn select(&mut self, season: u32) -> bool {
        let known = self
            .options
            .iter()
            .any(|option| option.season_number == season);
        if known {
            self.selected = Some(season);
        }
        known
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeCard {
    pub title: String,
    pub still_url: String,
    pub meta: String,
    pub overview: String,
}

impl EpisodeCard {
    pub fn from_episode(episode: &Episode, images: &ImageUrls) -> Self {
        let name = non_blank(episode.name.as_deref())
            .unwrap_or_else(|| UNTITLED_EPISODE.to_string());
        let runtime = episode
            .runtime
            .filter(|minutes| *minutes > 0)
            .map(|minutes| format!("{minutes}min"))
            .unwrap_or_else(|| UNKNOWN_RUNTIME.to_string());
        let meta = match non_blank(episode.air_date.as_deref()) {
            Some(air_date) => format!("{air_date} • {runtime}"),
            None => runtime,
        };

        Self {
            title: format!("{}. {name}", episode.episode_number),
            still_url: images
                .url(episode.still_path.as_deref(), ImageSize::still())
                .unwrap_or_else(|| EPISODE_PLACEHOLDER.to_string()),
            meta,
            overview: episode.overview.clone().unwrap_or_default(),
        }
    }
}

/// Episodes of the selected season; `Empty` also covers failed loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EpisodeList {
    Episodes(Vec<EpisodeCard>),
    Empty,
}

impl EpisodeList {
    pub fn from_season(season: Option<&SeasonDetails>, images: &ImageUrls) -> Self {
        match season {
            Some(season) if !season.episodes.is_empty() => EpisodeList::Episodes(
                season
                    .episodes
                    .iter()
                    .map(|episode| EpisodeCard::from_episode(episode, images))
                    .collect(),
            ),
            _ => EpisodeList::Empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonSection {
    pub picker: SeasonPicker,
    pub episodes: EpisodeList,
}

/// Outcome of attaching the trailer behind the hero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundVideo {
    /// No trailer; the static backdrop stays.
    None,
    Attached { video_id: String, embed_url: String },
    /// The player could not be attached; the static backdrop stays.
    Unavailable(EmbedError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailsPage {
    pub id: CatalogId,
    pub hero: DetailsHero,
    pub video: BackgroundVideo,
    pub cast: Vec<CastCard>,
    pub seasons: Option<SeasonSection>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailsView {
    Error(String),
    Loaded(Box<DetailsPage>),
}

/// Loads everything the details page shows.
#[derive(Debug)]
pub struct DetailsLoader<'a> {
    catalog: &'a dyn CatalogApi,
    images: &'a ImageUrls,
    player: Option<&'a SharedRuntime>,
    origin: Option<String>,
}

impl<'a> DetailsLoader<'a> {
    pub fn new(catalog: &'a dyn CatalogApi, images: &'a ImageUrls) -> Self {
        Self {
            catalog,
            images,
            player: None,
            origin: None,
        }
    }

    /// Attach trailers through `runtime`.
    pub fn with_player(mut self, runtime: &'a SharedRuntime, origin: Option<String>) -> Self {
        self.player = Some(runtime);
        self.origin = origin;
        self
    }

    pub async fn load(&self, query: &DetailsQuery) -> DetailsView {
        let Some(id) = query.id else {
            return DetailsView::Error(MISSING_ID.to_string());
        };

        match self.load_page(query.kind, id).await {
            Ok(page) => DetailsView::Loaded(Box::new(page)),
            Err(err) => {
                warn!(kind = %query.kind, %id, error = %err, "failed to load details");
                DetailsView::Error(format!(
                    "Impossible de charger les détails ({}).",
                    err.user_message()
                ))
            }
        }
    }

    async fn load_page(&self, kind: MediaKind, id: CatalogId) -> CatalogResult<DetailsPage> {
        let (hero, picker) = match kind {
            MediaKind::Movie => {
                let movie = self.catalog.movie_details(id).await?;
                (DetailsHero::from_movie(&movie, self.images), None)
            }
            MediaKind::Show => {
                let show = self.catalog.show_details(id).await?;
                (
                    DetailsHero::from_show(&show, self.images),
                    Some(SeasonPicker::from_show(&show)),
                )
            }
        };

        let video = self.background_video(kind, id).await;

        let seasons = match picker {
            Some(picker) => {
                let episodes = match picker.selected {
                    Some(season) => self.load_season(id, season).await,
                    None => EpisodeList::Empty,
                };
                Some(SeasonSection { picker, episodes })
            }
            None => None,
        };

        let cast = match self.catalog.credits(kind, id).await {
            Ok(credits) => cast_cards(&credits, self.images),
            Err(err) => {
                warn!(%kind, %id, error = %err, "credits load failed");
                Vec::new()
            }
        };

        Ok(DetailsPage {
            id,
            hero,
            video,
            cast,
            seasons,
        })
    }

    /// Episodes of one season; a failed load shows as an empty season.
    pub async fn load_season(&self, show: CatalogId, season: u32) -> EpisodeList {
        match self.catalog.show_season(show, season).await {
            Ok(details) => EpisodeList::from_season(Some(&details), self.images),
            Err(err) => {
                debug!(%show, season, error = %err, "season load failed");
                EpisodeList::Empty
            }
        }
    }

    async fn background_video(&self, kind: MediaKind, id: CatalogId) -> BackgroundVideo {
        let Some(runtime) = self.player else {
            return BackgroundVideo::None;
        };
        let trailer = match self.catalog.trailer(kind, id).await {
            Ok(Some(trailer)) => trailer,
            Ok(None) => return BackgroundVideo::None,
            Err(err) => {
                warn!(%kind, %id, error = %err, "trailer lookup failed");
                return BackgroundVideo::None;
            }
        };

        let target = PlayerTarget::fill(VIDEO_CONTAINER);
        match attach_background_video(runtime, Some(&target), &trailer.key, self.origin.as_deref())
            .await
        {
            Ok(handle) => {
                let options = handle.options();
                BackgroundVideo::Attached {
                    video_id: options.video_id.clone(),
                    embed_url: options
                        .embed_url()
                        .map(|url| url.to_string())
                        .unwrap_or_default(),
                }
            }
            Err(err) => {
                warn!(error = %err, "background video unavailable");
                BackgroundVideo::Unavailable(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use netflop_model::{SeasonSummary, chrono::NaiveDate};

    use super::*;

    #[test]
    fn query_defaults_to_movie() {
        let location =
            UrlLocation::parse("http://localhost/details.html?type=TV&id=1399").unwrap();
        let query = DetailsQuery::from_location(&location);
        assert_eq!(query.kind, MediaKind::Show);
        assert_eq!(query.id.map(|id| id.get()), Some(1399));

        let location = UrlLocation::parse("http://localhost/details.html?id=abc").unwrap();
        let query = DetailsQuery::from_location(&location);
        assert_eq!(query.kind, MediaKind::Movie);
        assert_eq!(query.id, None);
    }

    #[test]
    fn runtime_formatting() {
        assert_eq!(format_runtime(Some(155)).as_deref(), Some("2h 35min"));
        assert_eq!(format_runtime(Some(45)).as_deref(), Some("0h 45min"));
        assert_eq!(format_runtime(Some(0)), None);
        assert_eq!(format_runtime(None), None);
    }

    #[test]
    fn movie_hero_meta() {
        let movie = MovieDetails {
            id: 438631,
            title: "Dune".into(),
            original_title: None,
            overview: None,
            tagline: Some(" ".into()),
            release_date: NaiveDate::from_ymd_opt(2021, 9, 15),
            runtime: Some(155),
            vote_average: Some(7.78),
            genres: Vec::new(),
            poster_path: None,
            backdrop_path: Some("/dune.jpg".into()),
        };
        let hero = DetailsHero::from_movie(&movie, &ImageUrls::default());

        assert_eq!(hero.meta.as_deref(), Some("2021 • 2h 35min"));
        assert_eq!(hero.rating.as_deref(), Some("★ 7.8"));
        assert_eq!(hero.tagline, None);
        assert_eq!(
            hero.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w342/dune.jpg")
        );
        assert_eq!(hero.breadcrumb(), "Films");
    }

    #[test]
    fn last_season_is_selected_by_default() {
        let show = ShowDetails {
            id: 1399,
            name: "Game of Thrones".into(),
            original_name: None,
            overview: None,
            tagline: None,
            first_air_date: None,
            episode_run_time: vec![60],
            number_of_seasons: Some(2),
            number_of_episodes: Some(20),
            vote_average: None,
            genres: Vec::new(),
            poster_path: None,
            backdrop_path: None,
            seasons: vec![
                SeasonSummary {
                    season_number: 1,
                    name: Some("Saison 1".into()),
                    episode_count: Some(10),
                },
                SeasonSummary {
                    season_number: 2,
                    name: None,
                    episode_count: Some(10),
                },
            ],
        };

        let mut picker = SeasonPicker::from_show(&show);
        assert_eq!(picker.selected, Some(2));
        assert_eq!(picker.options[1].label, "Saison 2");
        assert!(!picker.select(9));
        assert!(picker.select(1));

        let hero = DetailsHero::from_show(&show, &ImageUrls::default());
        assert_eq!(hero.meta.as_deref(), Some("1h 0min"));
        assert_eq!(hero.seasons.as_deref(), Some("2 saisons"));
        assert_eq!(hero.episodes.as_deref(), Some("20 épisodes"));
        assert_eq!(hero.overview, NO_OVERVIEW);
        assert_eq!(hero.breadcrumb(), "Séries");
    }

    #[test]
    fn episode_card_fallbacks() {
        let episode = Episode {
            episode_number: 3,
            name: None,
            air_date: Some("2019-05-05".into()),
            runtime: None,
            overview: None,
            still_path: None,
        };
        let card = EpisodeCard::from_episode(&episode, &ImageUrls::default());
        assert_eq!(card.title, "3. Sans titre");
        assert_eq!(card.meta, "2019-05-05 • Durée Inconnue");
        assert_eq!(card.still_url, EPISODE_PLACEHOLDER);
        assert_eq!(EpisodeList::from_season(None, &ImageUrls::default()), EpisodeList::Empty);
    }
}
