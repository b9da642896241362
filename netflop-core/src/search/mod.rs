//! Incremental search: debounced lookups, pagination and suggestion fallback

pub mod controller;
pub mod messages;
pub mod runtime;
pub mod state;
pub mod view;

pub use controller::{SearchController, SearchSettings};
pub use messages::{Command, Message, SearchRequest};
pub use runtime::SearchRuntime;
pub use state::{SearchPhase, SearchState};
pub use view::{Feedback, FeedbackTone, LoadMoreControl, ResultsSection, SearchView};
