//! Unified error handling for `movie-directory`.
//!
//! This module exposes a single top-level error type [`DirectoryError`] for the
//! whole library and a nested [`ConfigError`] for startup problems. Every
//! failure a directory call can produce is one of these variants, so callers
//! always get a tagged result and never a silently dropped error.
//!
//! All messages include the suffix `[Movie Directory]` to simplify attribution in logs.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Generic text shown to users for any transport-class failure.
pub const RETRYABLE_MESSAGE: &str =
    "The movie directory could not be reached. Please try again.";

/* ------------------------------------------------------------------------- */
/* Failure classification                                                    */
/* ------------------------------------------------------------------------- */

/// Coarse failure class used by screens to pick what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The directory answered but reported a logical failure in the body.
    Directory,
    /// Network, timeout, non-2xx or undecodable responses.
    Transport,
    /// The request could not be issued because its input was missing.
    Input,
}

/* ------------------------------------------------------------------------- */
/* Top-level error                                                           */
/* ------------------------------------------------------------------------- */

/// Top-level error for the `movie-directory` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Configuration/validation errors (startup).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The directory replied with `{"Error": "..."}` inside a successful body.
    #[error("[Movie Directory] {0}")]
    Directory(String),

    /// Underlying HTTP transport error (DNS, connect, reset).
    #[error("[Movie Directory] transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream returned a non-successful HTTP status.
    #[error("[Movie Directory] HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL without credentials.
        url: String,
        /// Short snippet of the response body (trimmed).
        snippet: String,
    },

    /// Operation exceeded the configured timeout.
    #[error("[Movie Directory] request timed out after {0:?}")]
    Timeout(Duration),

    /// Response payload could not be decoded as expected.
    #[error("[Movie Directory] decode error: {0}")]
    Decode(String),
}

impl DirectoryError {
    /// Classifies the error for presentation.
    pub fn kind(&self) -> FailureKind {
        match self {
            DirectoryError::Directory(_) => FailureKind::Directory,
            _ => FailureKind::Transport,
        }
    }

    /// Text suitable for showing to an end user.
    ///
    /// Directory-reported failures carry the directory's own message verbatim;
    /// everything else collapses to [`RETRYABLE_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            DirectoryError::Directory(msg) => msg.clone(),
            _ => RETRYABLE_MESSAGE.to_string(),
        }
    }
}

/* ------------------------------------------------------------------------- */
/* Config errors                                                             */
/* ------------------------------------------------------------------------- */

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("[Movie Directory] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A number failed to parse (timeouts).
    #[error("[Movie Directory] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `OMDB_TIMEOUT_SECS`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected u64`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g., invalid URL).
    #[error("[Movie Directory] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g., `OMDB_URL`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },

    /// Unsupported value in `OMDB_MEDIA_TYPE`.
    #[error("[Movie Directory] unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

/* ------------------------------------------------------------------------- */
/* Env helpers (return unified `Result<T>`)                                  */
/* ------------------------------------------------------------------------- */

/// Fetches a required, non-empty environment variable.
///
/// # Errors
/// Returns [`DirectoryError::Config`] with [`ConfigError::MissingVar`] if the
/// variable is absent or empty.
pub fn must_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}

/// Reads an optional, non-empty environment variable.
pub fn opt_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parses an optional `u64` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`DirectoryError::Config`] with [`ConfigError::InvalidNumber`] if the
/// variable is set but not a valid `u64`.
pub fn env_opt_u64(name: &'static str) -> Result<Option<u64>> {
    match opt_env(name) {
        Some(v) => v.trim().parse::<u64>().map(Some).map_err(|_| {
            DirectoryError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u64",
            })
        }),
        None => Ok(None),
    }
}

/* ------------------------------------------------------------------------- */
/* Validation helpers                                                        */
/* ------------------------------------------------------------------------- */

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`DirectoryError::Config`] with [`ConfigError::InvalidFormat`] when
/// the string does not start with a valid HTTP scheme.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    let value = value.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

/// Builds a short, single-line snippet of a response body for error messages.
pub fn make_snippet(body: &str) -> String {
    const MAX: usize = 200;
    let flat: String = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= MAX {
        flat
    } else {
        let cut: String = flat.chars().take(MAX).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_errors_keep_payload_message() {
        let err = DirectoryError::Directory("Movie not found!".into());
        assert_eq!(err.kind(), FailureKind::Directory);
        assert_eq!(err.user_message(), "Movie not found!");
    }

    #[test]
    fn transport_class_errors_use_generic_message() {
        let err = DirectoryError::Timeout(Duration::from_secs(10));
        assert_eq!(err.kind(), FailureKind::Transport);
        assert_eq!(err.user_message(), RETRYABLE_MESSAGE);

        let err = DirectoryError::Decode("expected value".into());
        assert_eq!(err.kind(), FailureKind::Transport);
        assert!(!err.user_message().is_empty());
    }

    #[test]
    fn endpoint_validation() {
        assert!(validate_http_endpoint("OMDB_URL", "https://www.omdbapi.com").is_ok());
        assert!(validate_http_endpoint("OMDB_URL", "http://127.0.0.1:9000").is_ok());
        assert!(matches!(
            validate_http_endpoint("OMDB_URL", "www.omdbapi.com"),
            Err(DirectoryError::Config(ConfigError::InvalidFormat { var: "OMDB_URL", .. }))
        ));
    }

    #[test]
    fn snippet_is_flattened_and_capped() {
        assert_eq!(make_snippet("  bad\n  gateway "), "bad gateway");
        let long = "x".repeat(500);
        let s = make_snippet(&long);
        assert_eq!(s.chars().count(), 201);
        assert!(s.ends_with('…'));
    }
}
