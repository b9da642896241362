//! Search controller messages and the side effects it requests

use netflop_model::{CatalogPage, ResultItem};

use crate::error::CatalogError;

/// Parameters of one catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
    /// Add results to the grid instead of replacing it.
    pub append: bool,
}

#[derive(Debug)]
pub enum Message {
    // User actions
    /// The search field changed.
    InputChanged(String),
    /// The form was submitted; bypasses the debounce.
    Submit,
    /// "Load more" was activated.
    LoadMore,
    /// Retry the suggestions panel.
    ReloadSuggestions,

    // Internal events
    /// The debounce timer fired.
    DebounceElapsed { ticket: u64, query: String },
    /// A lookup finished. `seq` identifies the request that produced it.
    SearchCompleted {
        seq: u64,
        request: SearchRequest,
        outcome: Result<CatalogPage<ResultItem>, CatalogError>,
    },
    SuggestionsLoaded {
        ticket: u64,
        outcome: Result<Vec<ResultItem>, CatalogError>,
    },
}

impl Message {
    /// Convert to string for debugging
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InputChanged(_) => "InputChanged",
            Self::Submit => "Submit",
            Self::LoadMore => "LoadMore",
            Self::ReloadSuggestions => "ReloadSuggestions",
            Self::DebounceElapsed { .. } => "DebounceElapsed",
            Self::SearchCompleted { .. } => "SearchCompleted",
            Self::SuggestionsLoaded { .. } => "SuggestionsLoaded",
        }
    }
}

/// Side effects requested by the controller. The runtime performs them and
/// feeds the outcome back as a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// (Re)start the debounce timer; fire `DebounceElapsed` with `ticket`.
    ScheduleDebounce { ticket: u64, query: String },
    CancelDebounce,
    Fetch { seq: u64, request: SearchRequest },
    LoadSuggestions { ticket: u64 },
}
