//! Search screen: query text plus the outcome of the latest search.
//!
//! A search is split into [`SearchScreen::begin_search`] and
//! [`SearchScreen::complete_search`] so a driver can keep the request in
//! flight elsewhere; [`SearchScreen::submit_search`] does both in one call.
//! Every request carries a [`SearchTicket`]; completions for anything but
//! the latest ticket are dropped.

use movie_directory::{FailureKind, MovieDirectory, Result, SearchResultItem};
use tracing::{debug, info, warn};

use crate::{
    route::Route,
    state::{Failure, ScreenState},
};

/// Handle for one in-flight search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// What the search page should show right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchView<'a> {
    /// Nothing found (or nothing searched yet): not loading, no error, no results.
    NoResults { query: &'a str },
    /// Request in flight; controls are disabled.
    Loading { query: &'a str },
    Failed { message: &'a str },
    /// Result cards in directory order.
    Results { items: &'a [SearchResultItem] },
}

/// One search screen.
///
/// The HTTP layer builds a fresh screen per request, so there the in-flight
/// guard and ticket checks never trigger; they matter to drivers that keep a
/// screen alive across overlapping requests.
#[derive(Debug, Default)]
pub struct SearchScreen {
    query: String,
    state: ScreenState<Vec<SearchResultItem>>,
    generation: u64,
}

impl SearchScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &ScreenState<Vec<SearchResultItem>> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Current results; empty unless the last search succeeded.
    pub fn results(&self) -> &[SearchResultItem] {
        self.state.loaded().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.failure().map(|f| f.message.as_str())
    }

    /// Moves to `Loading` and hands out the ticket for the new request.
    ///
    /// Returns `None` when a search is already in flight.
    pub fn begin_search(&mut self, query: &str) -> Option<SearchTicket> {
        if self.is_loading() {
            debug!(query, "search already in flight, submit ignored");
            return None;
        }

        self.query = query.to_string();
        self.generation += 1;
        self.state = ScreenState::Loading;

        Some(SearchTicket {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    /// Applies the directory's answer for `ticket`.
    ///
    /// Returns `false` when the ticket was superseded and the answer dropped.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<SearchResultItem>>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                query = %ticket.query,
                ticket = ticket.generation,
                current = self.generation,
                "stale search response discarded"
            );
            return false;
        }

        self.state = match outcome {
            Ok(items) => {
                info!(query = %ticket.query, hits = items.len(), "search completed");
                ScreenState::Loaded(items)
            }
            Err(err) => {
                if err.kind() == FailureKind::Directory {
                    info!(query = %ticket.query, error = %err, "directory reported no results");
                } else {
                    warn!(query = %ticket.query, error = %err, "search request failed");
                }
                ScreenState::Failed(Failure::from(&err))
            }
        };
        true
    }

    /// Runs a full search against `directory`.
    ///
    /// Returns `false` if the submit was ignored or its answer was stale.
    pub async fn submit_search<D: MovieDirectory>(&mut self, directory: &D, query: &str) -> bool {
        let Some(ticket) = self.begin_search(query) else {
            return false;
        };
        let outcome = directory.search(ticket.query()).await;
        self.complete_search(ticket, outcome)
    }

    /// Route to open when a result card is activated.
    pub fn activate_result(&self, identifier: &str) -> Route {
        Route::Detail(identifier.to_string())
    }

    pub fn view(&self) -> SearchView<'_> {
        match &self.state {
            ScreenState::Idle => SearchView::NoResults { query: &self.query },
            ScreenState::Loading => SearchView::Loading { query: &self.query },
            ScreenState::Failed(failure) => SearchView::Failed {
                message: failure.message.as_str(),
            },
            ScreenState::Loaded(items) if items.is_empty() => {
                SearchView::NoResults { query: &self.query }
            }
            ScreenState::Loaded(items) => SearchView::Results {
                items: items.as_slice(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use movie_directory::{DirectoryError, RETRYABLE_MESSAGE};

    use super::*;
    use crate::test_support::{Canned, FakeDirectory, item, matrix};

    fn batman_results() -> Vec<SearchResultItem> {
        vec![
            item("tt0372784", "Batman Begins", "2005"),
            item("tt0096895", "Batman", "1989"),
        ]
    }

    #[test]
    fn starts_idle_with_placeholder() {
        let screen = SearchScreen::new();
        assert_eq!(screen.state(), &ScreenState::Idle);
        assert_eq!(screen.view(), SearchView::NoResults { query: "" });
    }

    #[tokio::test]
    async fn results_are_kept_verbatim_and_in_order() {
        let dir = FakeDirectory::new(Canned::Ok(batman_results()), Canned::Ok(matrix()));
        let mut screen = SearchScreen::new();

        assert!(screen.submit_search(&dir, "batman").await);

        assert_eq!(screen.results(), batman_results().as_slice());
        assert_eq!(screen.error_message(), None);
        assert!(!screen.is_loading());
        assert_eq!(screen.query(), "batman");

        match screen.view() {
            SearchView::Results { items } => {
                assert_eq!(items[0].title, "Batman Begins");
                assert_eq!(items[1].title, "Batman");
            }
            other => panic!("unexpected view: {other:?}"),
        }

        let second = &screen.results()[1];
        let route = screen.activate_result(&second.identifier);
        assert_eq!(route.path(), "/movies/tt0096895");
    }

    #[tokio::test]
    async fn directory_error_clears_results_and_shows_message() {
        let ok = FakeDirectory::new(Canned::Ok(batman_results()), Canned::Ok(matrix()));
        let not_found = FakeDirectory::new(
            Canned::DirectoryError("Movie not found!".into()),
            Canned::Ok(matrix()),
        );
        let mut screen = SearchScreen::new();
        screen.submit_search(&ok, "batman").await;

        assert!(screen.submit_search(&not_found, "zzzzznotreal").await);

        assert!(screen.results().is_empty());
        assert_eq!(screen.error_message(), Some("Movie not found!"));
        assert_eq!(screen.view(), SearchView::Failed { message: "Movie not found!" });
        assert_eq!(screen.state().failure().unwrap().kind, FailureKind::Directory);
    }

    #[tokio::test]
    async fn transport_failure_surfaces_a_retryable_message() {
        let dir = FakeDirectory::new(Canned::Timeout, Canned::Ok(matrix()));
        let mut screen = SearchScreen::new();

        screen.submit_search(&dir, "batman").await;

        assert!(!screen.is_loading());
        let failure = screen.state().failure().expect("failed state");
        assert_eq!(failure.kind, FailureKind::Transport);
        assert_eq!(failure.message, RETRYABLE_MESSAGE);
    }

    #[tokio::test]
    async fn empty_result_set_shows_placeholder() {
        let dir = FakeDirectory::new(Canned::Ok(Vec::new()), Canned::Ok(matrix()));
        let mut screen = SearchScreen::new();

        screen.submit_search(&dir, "").await;

        assert_eq!(dir.searches(), 1);
        assert_eq!(screen.view(), SearchView::NoResults { query: "" });
    }

    #[test]
    fn submit_is_ignored_while_loading() {
        let mut screen = SearchScreen::new();
        let first = screen.begin_search("batman").expect("first ticket");

        assert!(screen.begin_search("superman").is_none());
        assert_eq!(screen.view(), SearchView::Loading { query: "batman" });
        assert_eq!(screen.query(), "batman");

        assert!(screen.complete_search(first, Ok(vec![item("tt1", "Batman", "1989")])));
        assert_eq!(screen.results().len(), 1);
    }

    #[test]
    fn superseded_ticket_is_discarded() {
        let mut screen = SearchScreen::new();
        let old = screen.begin_search("batman").unwrap();
        screen.complete_search(old.clone(), Err(DirectoryError::Directory("x".into())));
        let fresh = screen.begin_search("matrix").unwrap();

        assert!(!screen.complete_search(old, Ok(vec![item("tt1", "Batman", "1989")])));
        assert!(screen.is_loading());

        assert!(screen.complete_search(fresh, Ok(vec![item("tt0133093", "The Matrix", "1999")])));
        assert_eq!(screen.results()[0].identifier, "tt0133093");
    }
}
