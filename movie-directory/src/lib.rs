//! Typed client for the movie directory (OMDb).
//!
//! - [`MovieDirectory`] is the seam screens depend on: `search` and `lookup`,
//!   each returning the crate-wide tagged [`Result`].
//! - [`OmdbService`] is the HTTP implementation, built from [`DirectoryConfig`].
//! - [`telemetry`] exposes a library-scoped tracing layer for the binary.

use std::future::Future;

pub mod config;
pub mod error_handler;
pub mod health_service;
pub mod models;
pub mod services;
pub mod telemetry;

pub use config::{directory_config::DirectoryConfig, media_type::MediaType};
pub use error_handler::{ConfigError, DirectoryError, FailureKind, RETRYABLE_MESSAGE, Result};
pub use health_service::HealthStatus;
pub use models::{MovieDetail, Rating, SearchResultItem};
pub use services::omdb_service::OmdbService;

/// The two directory operations every caller relies on.
///
/// Both return a tagged result: success carries the data, failure carries a
/// [`DirectoryError`] that is either directory-reported or transport-class.
pub trait MovieDirectory: Send + Sync {
    /// Searches titles by free text. The query is forwarded as-is.
    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<SearchResultItem>>> + Send;

    /// Fetches the full record for one identifier.
    fn lookup(&self, identifier: &str) -> impl Future<Output = Result<MovieDetail>> + Send;
}
