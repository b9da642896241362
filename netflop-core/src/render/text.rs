//! Plain-text rendering of the page view models.
//!
//! Every function here is pure: same view model in, same text out.

use crate::details::{BackgroundVideo, DetailsPage, DetailsView, EpisodeList, NO_EPISODES};
use crate::home::HomeView;
use crate::search::{FeedbackTone, SearchView};

use super::card::{Card, CardGrid};

const LOAD_MORE_LABEL: &str = "Charger plus";

pub fn card_line(card: &Card) -> String {
    let year = card
        .year
        .map(|year| format!(" ({year})"))
        .unwrap_or_default();
    format!(
        "  [{:>2}] {}{} · {}",
        card.tab_index + 1,
        card.title,
        year,
        card.details_href
    )
}

fn push_grid(lines: &mut Vec<String>, grid: &CardGrid) {
    lines.extend(grid.iter().map(card_line));
}

fn heading(title: &str) -> String {
    format!("── {title} ──")
}

pub fn render_search(view: &SearchView) -> String {
    let mut lines = Vec::new();

    let busy = if view.form_loading { " …" } else { "" };
    lines.push(format!("Recherche : {}{busy}", view.input));

    if let Some(feedback) = &view.feedback {
        let marker = match feedback.tone {
            FeedbackTone::Info => "i",
            FeedbackTone::Success => "✓",
            FeedbackTone::Warning => "!",
            FeedbackTone::Error => "✗",
        };
        lines.push(format!("[{marker}] {}", feedback.message));
    }

    if !view.results.hidden {
        lines.push(String::new());
        let title = match &view.results.count {
            Some(count) => format!("{} ({count})", view.results.title),
            None => view.results.title.clone(),
        };
        lines.push(heading(&title));
        push_grid(&mut lines, &view.results.grid);
        if !view.load_more.hidden {
            if view.load_more.disabled {
                lines.push(format!("  <{LOAD_MORE_LABEL}> (indisponible)"));
            } else {
                lines.push(format!("  <{LOAD_MORE_LABEL}>"));
            }
        }
    }

    if !view.suggestions.hidden {
        lines.push(String::new());
        lines.push(heading("Suggestions"));
        if let Some(placeholder) = view.suggestions.placeholder() {
            lines.push(format!("  {placeholder}"));
        }
        if let Some(grid) = view.suggestions.grid() {
            push_grid(&mut lines, grid);
        }
    }

    lines.join("\n")
}

pub fn render_home(view: &HomeView) -> String {
    let mut lines = Vec::new();

    if let Some(hero) = &view.hero {
        lines.push(format!("★ {}", hero.title));
        if let Some(backdrop) = &hero.backdrop_url {
            lines.push(format!("  {backdrop}"));
        }
    }

    for row in &view.rows {
        lines.push(String::new());
        lines.push(heading(row.title));
        push_grid(&mut lines, &row.cards);
    }

    lines.join("\n")
}

pub fn render_details(view: &DetailsView) -> String {
    match view {
        DetailsView::Error(message) => message.clone(),
        DetailsView::Loaded(page) => render_details_page(page),
    }
}

fn render_details_page(page: &DetailsPage) -> String {
    let hero = &page.hero;
    let mut lines = vec![format!("{} › {}", hero.breadcrumb(), hero.title)];

    let mut meta: Vec<&str> = Vec::new();
    meta.extend(hero.meta.as_deref());
    meta.extend(hero.seasons.as_deref());
    meta.extend(hero.episodes.as_deref());
    meta.extend(hero.rating.as_deref());
    if !meta.is_empty() {
        lines.push(meta.join(" • "));
    }
    if !hero.genres.is_empty() {
        lines.push(hero.genres.join(", "));
    }
    if let Some(tagline) = &hero.tagline {
        lines.push(format!("« {tagline} »"));
    }
    match &page.video {
        BackgroundVideo::Attached { embed_url, .. } => lines.push(format!("▶ {embed_url}")),
        BackgroundVideo::None | BackgroundVideo::Unavailable(_) => {
            if let Some(backdrop) = &hero.backdrop_url {
                lines.push(backdrop.clone());
            }
        }
    }
    lines.push(String::new());
    lines.push(hero.overview.clone());

    if let Some(seasons) = &page.seasons {
        lines.push(String::new());
        let selected = seasons
            .picker
            .options
            .iter()
            .find(|option| Some(option.season_number) == seasons.picker.selected)
            .map(|option| option.label.as_str())
            .unwrap_or("Épisodes");
        lines.push(heading(selected));
        match &seasons.episodes {
            EpisodeList::Episodes(episodes) => {
                for episode in episodes {
                    lines.push(format!("  {}  ({})", episode.title, episode.meta));
                    if !episode.overview.is_empty() {
                        lines.push(format!("     {}", episode.overview));
                    }
                }
            }
            EpisodeList::Empty => lines.push(format!("  {NO_EPISODES}")),
        }
    }

    if !page.cast.is_empty() {
        lines.push(String::new());
        lines.push(heading("Distribution"));
        for member in &page.cast {
            if member.character.is_empty() {
                lines.push(format!("  {}", member.name));
            } else {
                lines.push(format!("  {} ({})", member.name, member.character));
            }
        }
    }

    lines.join("\n")
}
