//! The search page state machine.
//!
//! The controller never performs I/O. Every event goes through
//! [`SearchController::update`], which mutates state and the view model and
//! returns the [`Command`]s a driver has to carry out. Completions come back
//! as messages tagged with the sequence number of the request they answer;
//! only the latest issued request is ever applied.

use netflop_config::SearchConfig;
use netflop_model::{CatalogPage, ResultItem};
use tracing::{debug, warn};

use super::messages::{Command, Message, SearchRequest};
use super::state::{SearchPhase, SearchState};
use super::view::{
    self, Feedback, FeedbackTone, LOADING_MESSAGE, LoadMoreControl, SearchView,
};
use crate::catalog::ImageUrls;
use crate::error::CatalogError;
use crate::location::UrlLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    /// Shortest trimmed query (in characters) that is sent to the catalog.
    pub min_query_len: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { min_query_len: 2 }
    }
}

impl From<&SearchConfig> for SearchSettings {
    fn from(config: &SearchConfig) -> Self {
        Self {
            min_query_len: config.min_query_len,
        }
    }
}

#[derive(Debug)]
pub struct SearchController {
    settings: SearchSettings,
    state: SearchState,
    phase: SearchPhase,
    view: SearchView,
    location: UrlLocation,
    images: ImageUrls,
    next_ticket: u64,
    pending_debounce: Option<u64>,
    next_seq: u64,
    current_seq: Option<u64>,
}

impl SearchController {
    pub fn new(
        settings: SearchSettings,
        location: UrlLocation,
        images: ImageUrls,
    ) -> Self {
        Self {
            settings,
            state: SearchState::default(),
            phase: SearchPhase::Idle,
            view: SearchView::default(),
            location,
            images,
            next_ticket: 0,
            pending_debounce: None,
            next_seq: 0,
            current_seq: None,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn view(&self) -> &SearchView {
        &self.view
    }

    pub fn location(&self) -> &UrlLocation {
        &self.location
    }

    pub fn settings(&self) -> SearchSettings {
        self.settings
    }

    /// Sequence number of the request whose response will be applied.
    pub fn current_seq(&self) -> Option<u64> {
        self.current_seq
    }

    /// Initial render: search right away when the location already carries a
    /// long enough query, otherwise show the idle prompt and suggestions.
    pub fn start(&mut self) -> Vec<Command> {
        let query = self.location.query().unwrap_or_default();
        self.view.input = query.clone();

        if self.is_searchable(&query) {
            return self.perform_search(query, 1, false);
        }

        self.phase = SearchPhase::Idle;
        self.set_feedback(
            view::too_short_message(self.settings.min_query_len),
            FeedbackTone::Info,
        );
        self.show_suggestions(false).into_iter().collect()
    }

    pub fn update(&mut self, message: Message) -> Vec<Command> {
        debug!(message = message.as_str(), phase = ?self.phase, "search update");

        match message {
            Message::InputChanged(value) => {
                self.view.input = value;
                self.handle_input()
            }

            Message::Submit => {
                let query = self.view.input.trim().to_string();
                if !self.is_searchable(&query) {
                    return self.handle_input();
                }
                self.pending_debounce = None;
                let mut commands = vec![Command::CancelDebounce];
                commands.extend(self.perform_search(query, 1, false));
                commands
            }

            Message::LoadMore => {
                let resumable =
                    matches!(self.phase, SearchPhase::Results | SearchPhase::Error);
                if self.state.loading || !resumable || !self.state.has_more() {
                    debug!(
                        loading = self.state.loading,
                        page = self.state.page,
                        total_pages = self.state.total_pages,
                        "load more ignored"
                    );
                    return Vec::new();
                }
                self.view.load_more.disabled = true;
                let query = self.state.query.clone();
                let next_page = self.state.page + 1;
                self.perform_search(query, next_page, true)
            }

            Message::ReloadSuggestions => {
                self.show_suggestions(true).into_iter().collect()
            }

            Message::DebounceElapsed { ticket, query } => {
                if self.pending_debounce != Some(ticket) {
                    debug!(ticket, "superseded debounce ignored");
                    return Vec::new();
                }
                self.pending_debounce = None;
                self.perform_search(query, 1, false)
            }

            Message::SearchCompleted {
                seq,
                request,
                outcome,
            } => {
                if self.current_seq != Some(seq) {
                    debug!(
                        seq,
                        current = ?self.current_seq,
                        query = %request.query,
                        "stale search response discarded"
                    );
                    return Vec::new();
                }
                self.current_seq = None;
                self.state.loading = false;
                self.view.form_loading = false;
                self.view.load_more.disabled = false;

                match outcome {
                    Ok(page) => self.apply_page(&request, page),
                    Err(err) => {
                        self.apply_failure(&request, &err);
                        Vec::new()
                    }
                }
            }

            Message::SuggestionsLoaded { ticket, outcome } => {
                self.view.suggestions.apply(ticket, outcome, &self.images);
                Vec::new()
            }
        }
    }

    fn is_searchable(&self, query: &str) -> bool {
        query.chars().count() >= self.settings.min_query_len.max(1)
    }

    /// React to the current input value.
    fn handle_input(&mut self) -> Vec<Command> {
        let query = self.view.input.trim().to_string();

        if self.is_searchable(&query) {
            self.next_ticket += 1;
            self.pending_debounce = Some(self.next_ticket);
            self.phase = SearchPhase::Pending;
            return vec![Command::ScheduleDebounce {
                ticket: self.next_ticket,
                query,
            }];
        }

        let mut commands = vec![Command::CancelDebounce];
        self.pending_debounce = None;
        self.invalidate_in_flight();
        self.reset_results();

        if query.is_empty() {
            self.state.query.clear();
            self.location.clear_query();
            self.phase = SearchPhase::Idle;
            self.set_feedback(
                view::too_short_message(self.settings.min_query_len),
                FeedbackTone::Info,
            );
        } else {
            self.phase = SearchPhase::TooShort;
            self.set_feedback(
                view::too_short_message(self.settings.min_query_len),
                FeedbackTone::Warning,
            );
        }

        commands.extend(self.show_suggestions(false));
        commands
    }

    fn perform_search(&mut self, query: String, page: u32, append: bool) -> Vec<Command> {
        self.state.loading = true;
        self.state.query = query.clone();
        self.view.form_loading = true;
        self.view.suggestions.hide();

        if !append {
            self.view.results.grid.clear();
            self.view.results.hidden = false;
            self.view.results.title = view::results_title(&query);
            self.view.results.count = None;
            self.view.load_more = LoadMoreControl::default();
        }

        self.set_feedback(LOADING_MESSAGE, FeedbackTone::Info);
        self.location.set_query(&query);

        self.next_seq += 1;
        let seq = self.next_seq;
        self.current_seq = Some(seq);
        self.phase = SearchPhase::Loading;
        debug!(%query, seq, page, append, "search issued");

        vec![Command::Fetch {
            seq,
            request: SearchRequest {
                query,
                page,
                append,
            },
        }]
    }

    fn apply_page(
        &mut self,
        request: &SearchRequest,
        page: CatalogPage<ResultItem>,
    ) -> Vec<Command> {
        let kept = if request.append {
            self.view.results.grid.len()
        } else {
            0
        };
        let returned = page.results.len();
        let total_results = if page.total_results > 0 {
            page.total_results
        } else {
            u32::try_from(kept + returned).unwrap_or(u32::MAX)
        };
        let page_number = if page.page > 0 { page.page } else { request.page };
        self.state
            .apply_totals(page_number, page.total_pages, total_results);

        // A page can come back empty after person hits are dropped while
        // later pages still hold titles.
        if returned == 0 && !request.append && !self.state.has_more() {
            self.view.results.grid.clear();
            self.refresh_header();
            self.view.results.hidden = true;
            self.view.load_more = LoadMoreControl::default();
            self.set_feedback(view::empty_message(&request.query), FeedbackTone::Warning);
            self.phase = SearchPhase::Empty;
            debug!(query = %request.query, "search returned no results");
            return self.show_suggestions(false).into_iter().collect();
        }

        if !request.append {
            self.view.results.grid.clear();
        }
        let room = usize::try_from(total_results)
            .unwrap_or(usize::MAX)
            .saturating_sub(kept);
        if returned > room {
            debug!(returned, room, total = total_results, "results beyond the reported total dropped");
        }
        self.view
            .results
            .grid
            .extend(page.results.iter().take(room), &self.images);
        self.view.results.hidden = false;
        self.refresh_header();
        self.refresh_load_more();

        let displayed = self.view.results.grid.len();
        self.set_feedback(
            view::success_message(displayed, self.state.total_results),
            FeedbackTone::Success,
        );
        self.phase = SearchPhase::Results;
        debug!(
            query = %request.query,
            page = self.state.page,
            displayed,
            total = self.state.total_results,
            "search results applied"
        );
        Vec::new()
    }

    fn apply_failure(&mut self, request: &SearchRequest, err: &CatalogError) {
        warn!(query = %request.query, page = request.page, error = %err, "search failed");

        if !request.append {
            self.view.results.grid.clear();
            self.state.apply_totals(1, 0, 0);
        }
        self.view.results.hidden = !request.append;
        self.view.load_more = LoadMoreControl {
            hidden: !(request.append && self.state.has_more()),
            disabled: false,
        };
        self.set_feedback(view::error_message(&err.user_message()), FeedbackTone::Error);
        self.phase = SearchPhase::Error;
    }

    fn invalidate_in_flight(&mut self) {
        if let Some(seq) = self.current_seq.take() {
            debug!(seq, "in-flight search invalidated");
        }
        self.state.loading = false;
        self.view.form_loading = false;
    }

    fn reset_results(&mut self) {
        self.state.apply_totals(1, 0, 0);
        self.view.results.reset();
        self.view.load_more = LoadMoreControl::default();
    }

    fn refresh_header(&mut self) {
        self.view.results.title = view::results_title(&self.state.query);
        self.view.results.count = view::results_count(
            self.view.results.grid.len(),
            self.state.total_results,
        );
    }

    fn refresh_load_more(&mut self) {
        self.view.load_more = LoadMoreControl {
            hidden: !self.state.has_more(),
            disabled: false,
        };
    }

    fn show_suggestions(&mut self, force: bool) -> Option<Command> {
        self.view
            .suggestions
            .show(force)
            .map(|ticket| Command::LoadSuggestions { ticket })
    }

    fn set_feedback(&mut self, message: impl Into<String>, tone: FeedbackTone) {
        self.view.feedback = Some(Feedback::new(message, tone));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(url: &str) -> SearchController {
        SearchController::new(
            SearchSettings::default(),
            UrlLocation::parse(url).unwrap(),
            ImageUrls::default(),
        )
    }

    fn fetch_seq(commands: &[Command]) -> u64 {
        commands
            .iter()
            .find_map(|command| match command {
                Command::Fetch { seq, .. } => Some(*seq),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn start_without_query_shows_suggestions() {
        let mut search = controller("http://localhost/search.html");
        let commands = search.start();

        assert_eq!(commands, vec![Command::LoadSuggestions { ticket: 1 }]);
        assert_eq!(search.phase(), SearchPhase::Idle);
        assert_eq!(
            search.view().feedback.as_ref().map(|f| f.tone),
            Some(FeedbackTone::Info)
        );
    }

    #[test]
    fn start_with_query_searches_immediately() {
        let mut search = controller("http://localhost/search.html?q=dune");
        let commands = search.start();

        assert_eq!(search.view().input, "dune");
        assert_eq!(search.phase(), SearchPhase::Loading);
        assert!(matches!(
            &commands[..],
            [Command::Fetch { request, .. }] if request.query == "dune" && request.page == 1
        ));
    }

    #[test]
    fn typing_schedules_debounce_with_fresh_ticket() {
        let mut search = controller("http://localhost/search.html");
        let first = search.update(Message::InputChanged("ba".into()));
        let second = search.update(Message::InputChanged(" bat ".into()));

        assert_eq!(
            first,
            vec![Command::ScheduleDebounce { ticket: 1, query: "ba".into() }]
        );
        assert_eq!(
            second,
            vec![Command::ScheduleDebounce { ticket: 2, query: "bat".into() }]
        );
        assert_eq!(search.phase(), SearchPhase::Pending);

        let stale = search.update(Message::DebounceElapsed {
            ticket: 1,
            query: "ba".into(),
        });
        assert!(stale.is_empty());

        let fired = search.update(Message::DebounceElapsed {
            ticket: 2,
            query: "bat".into(),
        });
        assert_eq!(fetch_seq(&fired), 1);
        assert_eq!(search.location().query().as_deref(), Some("bat"));
    }

    #[test]
    fn short_input_cancels_and_never_fetches() {
        let mut search = controller("http://localhost/search.html");
        search.update(Message::InputChanged("bat".into()));
        let commands = search.update(Message::InputChanged("b".into()));

        assert_eq!(commands[0], Command::CancelDebounce);
        assert!(!commands.iter().any(|c| matches!(c, Command::Fetch { .. })));
        assert_eq!(search.phase(), SearchPhase::TooShort);
        assert_eq!(
            search.view().feedback.as_ref().map(|f| f.tone),
            Some(FeedbackTone::Warning)
        );
        assert!(!search.view().suggestions.hidden);

        let late = search.update(Message::DebounceElapsed {
            ticket: 1,
            query: "bat".into(),
        });
        assert!(late.is_empty());
    }

    #[test]
    fn submit_bypasses_debounce() {
        let mut search = controller("http://localhost/search.html");
        search.update(Message::InputChanged("alien".into()));
        let commands = search.update(Message::Submit);

        assert_eq!(commands[0], Command::CancelDebounce);
        assert_eq!(fetch_seq(&commands), 1);
        assert!(search.state().loading);
        assert!(search.view().form_loading);
    }

    #[test]
    fn load_more_requires_results_phase() {
        let mut search = controller("http://localhost/search.html");
        assert!(search.update(Message::LoadMore).is_empty());
    }
}
