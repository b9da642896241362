//! View model of the search page. Rendering lives in `crate::render`.

use crate::render::CardGrid;
use crate::suggestions::SuggestionPanel;

pub const LOADING_MESSAGE: &str = "Recherche en cours…";
pub const RESULTS_TITLE: &str = "Résultats";

pub fn too_short_message(min_len: usize) -> String {
    format!("Tapez au moins {min_len} caractères pour lancer une recherche.")
}

pub fn success_message(displayed: usize, total: u32) -> String {
    if total > 0 {
        let shown = displayed.min(usize::try_from(total).unwrap_or(usize::MAX));
        format!("Affichage de {shown} titres sur {total}.")
    } else {
        format!("Affichage de {displayed} titres.")
    }
}

pub fn empty_message(query: &str) -> String {
    format!("Aucun résultat pour « {query} ».")
}

pub fn error_message(detail: &str) -> String {
    format!("Une erreur est survenue : {detail}.")
}

pub fn results_title(query: &str) -> String {
    if query.is_empty() {
        RESULTS_TITLE.to_string()
    } else {
        format!("{RESULTS_TITLE} pour « {query} »")
    }
}

/// `min(displayed, total) / total`, just the displayed count when the total
/// is unknown, nothing when both are zero.
pub fn results_count(displayed: usize, total: u32) -> Option<String> {
    match (displayed, total) {
        (0, 0) => None,
        (shown, 0) => Some(shown.to_string()),
        (shown, total) => Some(format!("{} / {total}", shown.min(total as usize))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    Info,
    Success,
    Warning,
    Error,
}

impl FeedbackTone {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FeedbackTone::Info => "info",
            FeedbackTone::Success => "success",
            FeedbackTone::Warning => "warning",
            FeedbackTone::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub tone: FeedbackTone,
}

impl Feedback {
    pub fn new(message: impl Into<String>, tone: FeedbackTone) -> Self {
        Self {
            message: message.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMoreControl {
    pub hidden: bool,
    pub disabled: bool,
}

impl Default for LoadMoreControl {
    fn default() -> Self {
        Self {
            hidden: true,
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsSection {
    pub hidden: bool,
    pub title: String,
    pub count: Option<String>,
    pub grid: CardGrid,
}

impl Default for ResultsSection {
    fn default() -> Self {
        Self {
            hidden: true,
            title: RESULTS_TITLE.to_string(),
            count: None,
            grid: CardGrid::new(),
        }
    }
}

impl ResultsSection {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Everything the search page displays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchView {
    /// Text of the search field.
    pub input: String,
    /// The form shows a busy indicator.
    pub form_loading: bool,
    pub feedback: Option<Feedback>,
    pub results: ResultsSection,
    pub load_more: LoadMoreControl,
    pub suggestions: SuggestionPanel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_never_exceed_total() {
        assert_eq!(results_count(20, 93).as_deref(), Some("20 / 93"));
        assert_eq!(results_count(40, 31).as_deref(), Some("31 / 31"));
        assert_eq!(results_count(4, 0).as_deref(), Some("4"));
        assert_eq!(results_count(0, 0), None);
    }

    #[test]
    fn french_messages() {
        assert_eq!(success_message(20, 93), "Affichage de 20 titres sur 93.");
        assert_eq!(success_message(3, 0), "Affichage de 3 titres.");
        assert_eq!(success_message(20, 7), "Affichage de 7 titres sur 7.");
        assert_eq!(empty_message("xyz"), "Aucun résultat pour « xyz ».");
        assert_eq!(results_title("dune"), "Résultats pour « dune »");
    }
}
