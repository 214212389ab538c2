//! Detail screen: one title's record, keyed by the identifier from the route.
//!
//! Each request is tagged with the identifier it targets and a generation.
//! A response is applied only if both still match, so a slow answer for an
//! identifier the user already navigated away from cannot overwrite newer data.

use movie_directory::{FailureKind, MovieDetail, MovieDirectory, Result};
use tracing::{debug, info, warn};

use crate::state::{Failure, ScreenState};

/// Shown when the screen is opened without an identifier.
pub const NO_SELECTION_MESSAGE: &str = "No movie selected";

/// Handle for one in-flight lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    identifier: String,
    generation: u64,
}

impl DetailTicket {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailView<'a> {
    Loading,
    Failed { message: &'a str },
    Loaded { detail: &'a MovieDetail },
}

/// One detail screen. Like [`SearchScreen`](crate::SearchScreen), it is
/// rebuilt per HTTP request; identifier de-duplication and stale-ticket
/// checks apply to long-lived screens.
#[derive(Debug, Default)]
pub struct DetailScreen {
    target: Option<String>,
    state: ScreenState<MovieDetail>,
    generation: u64,
}

impl DetailScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn state(&self) -> &ScreenState<MovieDetail> {
        &self.state
    }

    pub fn detail(&self) -> Option<&MovieDetail> {
        self.state.loaded()
    }

    /// Reacts to the identifier taken from navigation.
    ///
    /// - absent or empty: fails with [`NO_SELECTION_MESSAGE`], no lookup
    /// - same identifier already loading or loaded: nothing to do
    /// - otherwise: starts a lookup and returns its ticket
    pub fn activate(&mut self, identifier: Option<&str>) -> Option<DetailTicket> {
        let Some(identifier) = identifier.filter(|id| !id.is_empty()) else {
            info!("detail opened without an identifier");
            self.target = None;
            // Invalidate anything still in flight.
            self.generation += 1;
            self.state = ScreenState::Failed(Failure::input(NO_SELECTION_MESSAGE));
            return None;
        };

        let unchanged = self.target.as_deref() == Some(identifier)
            && matches!(self.state, ScreenState::Loading | ScreenState::Loaded(_));
        if unchanged {
            debug!(identifier, "identifier unchanged, lookup skipped");
            return None;
        }

        Some(self.begin_load(identifier))
    }

    /// Starts a lookup for `identifier` regardless of the current state.
    pub fn begin_load(&mut self, identifier: &str) -> DetailTicket {
        self.target = Some(identifier.to_string());
        self.generation += 1;
        self.state = ScreenState::Loading;

        DetailTicket {
            identifier: identifier.to_string(),
            generation: self.generation,
        }
    }

    /// Applies the directory's answer for `ticket`.
    ///
    /// Returns `false` when the ticket no longer matches the current target.
    pub fn complete_detail(&mut self, ticket: DetailTicket, outcome: Result<MovieDetail>) -> bool {
        let current = self.target.as_deref() == Some(ticket.identifier.as_str())
            && ticket.generation == self.generation;
        if !current {
            debug!(
                identifier = %ticket.identifier,
                target = ?self.target,
                "stale detail response discarded"
            );
            return false;
        }

        self.state = match outcome {
            Ok(detail) => {
                info!(identifier = %ticket.identifier, title = %detail.title, "detail loaded");
                ScreenState::Loaded(detail)
            }
            Err(err) => {
                if err.kind() == FailureKind::Directory {
                    info!(identifier = %ticket.identifier, error = %err, "directory rejected lookup");
                } else {
                    warn!(identifier = %ticket.identifier, error = %err, "lookup request failed");
                }
                ScreenState::Failed(Failure::from(&err))
            }
        };
        true
    }

    /// Fetches `identifier` and applies the result. Always issues a request.
    pub async fn load_detail<D: MovieDirectory>(&mut self, directory: &D, identifier: &str) -> bool {
        let ticket = self.begin_load(identifier);
        let outcome = directory.lookup(ticket.identifier()).await;
        self.complete_detail(ticket, outcome)
    }

    /// Navigation entry point: [`activate`](Self::activate), then fetch if needed.
    pub async fn open<D: MovieDirectory>(&mut self, directory: &D, identifier: Option<&str>) {
        if let Some(ticket) = self.activate(identifier) {
            let outcome = directory.lookup(ticket.identifier()).await;
            self.complete_detail(ticket, outcome);
        }
    }

    pub fn view(&self) -> DetailView<'_> {
        match &self.state {
            ScreenState::Idle | ScreenState::Loading => DetailView::Loading,
            ScreenState::Failed(failure) => DetailView::Failed {
                message: failure.message.as_str(),
            },
            ScreenState::Loaded(detail) => DetailView::Loaded { detail },
        }
    }
}
