//! Search state and lifecycle phases

/// Where the controller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// No query; suggestions shown.
    #[default]
    Idle,
    /// Query shorter than the minimum; suggestions shown, nothing fetched.
    TooShort,
    /// Debounce timer running.
    Pending,
    /// A request is current.
    Loading,
    Results,
    /// Successful lookup with zero matches.
    Empty,
    Error,
}

/// Query and pagination of the current search.
///
/// `page <= total_pages` whenever `total_pages > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    /// 1-based page of the last applied response.
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    /// A request is in flight; no second lookup starts from this state.
    pub loading: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            total_pages: 0,
            total_results: 0,
            loading: false,
        }
    }
}

impl SearchState {
    /// Forget results; keeps nothing but the defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    /// Apply pagination totals from a response, clamping `page` so it never
    /// exceeds `total_pages`.
    pub fn apply_totals(&mut self, page: u32, total_pages: u32, total_results: u32) {
        self.total_pages = total_pages;
        self.total_results = total_results;
        self.page = if total_pages > 0 {
            page.clamp(1, total_pages)
        } else {
            page.max(1)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_is_clamped_to_total_pages() {
        let mut state = SearchState::default();
        state.apply_totals(7, 5, 93);
        assert_eq!(state.page, 5);
        assert!(!state.has_more());

        state.apply_totals(2, 5, 93);
        assert!(state.has_more());

        state.apply_totals(0, 0, 0);
        assert_eq!(state.page, 1);
    }
}
