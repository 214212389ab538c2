//! Shared per-screen state machine.
//!
//! ```text
//! Idle ──request──▶ Loading ──ok──▶ Loaded(T)
//!                      │
//!                      └──err──▶ Failed(Failure)
//! ```
//!
//! `Loaded` and `Failed` persist until the next request moves the screen back
//! to `Loading`. Each variant excludes the others, so "loading with an error"
//! or "results and an error" cannot be represented.

use movie_directory::{DirectoryError, FailureKind};
use serde::Serialize;

/// Why a screen ended up in [`ScreenState::Failed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub kind: FailureKind,
    /// User-facing text; never empty.
    pub message: String,
}

impl Failure {
    pub fn input(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Input,
            message: message.into(),
        }
    }
}

impl From<&DirectoryError> for Failure {
    fn from(err: &DirectoryError) -> Self {
        Self {
            kind: err.kind(),
            message: err.user_message(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ScreenState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(Failure),
}

// Manual impl: the derive would require `T: Default`.
impl<T> Default for ScreenState<T> {
    fn default() -> Self {
        ScreenState::Idle
    }
}

impl<T> ScreenState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ScreenState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            ScreenState::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}
