//! View-model rendering: cards and text output of each page.

pub mod card;
pub mod text;

pub use card::{Card, CardGrid, POSTER_PLACEHOLDER, details_href};
pub use text::{render_details, render_home, render_search};
