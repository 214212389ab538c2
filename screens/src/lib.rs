//! Screen state machines for the movie search flow.
//!
//! Two independent screens, each with its own [`ScreenState`]:
//! - [`SearchScreen`]: query text and the result set of the last search.
//! - [`DetailScreen`]: one title's record, keyed by the identifier it was opened with.
//!
//! Screens talk to the directory only through [`movie_directory::MovieDirectory`],
//! and move between each other only through [`Route`].

pub mod detail_screen;
pub mod route;
pub mod search_screen;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use detail_screen::{DetailScreen, DetailTicket, DetailView, NO_SELECTION_MESSAGE};
pub use route::Route;
pub use search_screen::{SearchScreen, SearchTicket, SearchView};
pub use state::{Failure, ScreenState};
