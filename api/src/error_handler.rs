use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use movie_directory::{DirectoryError, FailureKind};
use screens::Failure;
use thiserror::Error;

use crate::core::http::response_envelope::ApiResponse;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config / directory ---
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("not found")]
    NotFound,

    /// Rich HTTP error mapped from screen failures with specific status & code.
    #[error("{message}")]
    Http {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
}

impl AppError {
    pub(crate) fn status_code(&self) -> StatusCode {
        match self {
            AppError::Directory(DirectoryError::Config(_)) => StatusCode::INTERNAL_SERVER_ERROR, // startup-only
            AppError::Directory(e) => status_for_kind(e.kind()).0,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Http { status, .. } => *status,
            AppError::Bind(_) | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Directory(DirectoryError::Config(_)) => "CONFIG_ERROR",
            AppError::Directory(e) => status_for_kind(e.kind()).1,
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::NotFound => "NOT_FOUND",
            AppError::Http { code, .. } => code,
        }
    }

    fn public_message(&self) -> String {
        match self {
            AppError::Directory(DirectoryError::Config(e)) => e.to_string(),
            AppError::Directory(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

/// Status and code reported for each failure class.
fn status_for_kind(kind: FailureKind) -> (StatusCode, &'static str) {
    match kind {
        FailureKind::Directory => (StatusCode::NOT_FOUND, "DIRECTORY_ERROR"),
        FailureKind::Transport => (StatusCode::BAD_GATEWAY, "DIRECTORY_UNAVAILABLE"),
        FailureKind::Input => (StatusCode::NOT_FOUND, "NO_SELECTION"),
    }
}

impl From<&Failure> for AppError {
    fn from(failure: &Failure) -> Self {
        let (status, code) = status_for_kind(failure.kind);
        AppError::Http {
            status,
            code,
            message: failure.message.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        ApiResponse::<()>::error(self.error_code(), self.public_message(), Vec::new())
            .into_response_with_status(status)
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use movie_directory::RETRYABLE_MESSAGE;

    use super::*;

    #[test]
    fn failures_map_to_status_and_code() {
        let err = AppError::from(&Failure::input("No movie selected"));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "NO_SELECTION");
        assert_eq!(err.to_string(), "No movie selected");
    }

    #[test]
    fn directory_errors_hide_transport_details() {
        let err = AppError::from(DirectoryError::Timeout(Duration::from_secs(10)));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.error_code(), "DIRECTORY_UNAVAILABLE");
        assert_eq!(err.public_message(), RETRYABLE_MESSAGE);

        let err = AppError::from(DirectoryError::Directory("Movie not found!".into()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "Movie not found!");
    }
}
