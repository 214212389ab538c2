//! Health probe for the movie directory.
//!
//! The probe looks up a well-known identifier. Any answer from the directory,
//! including a directory-reported error, proves it is reachable and the key
//! is accepted; transport-class failures mark it unhealthy.
//! [`OmdbService::health`] is resilient and never fails.

use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use crate::{MovieDirectory, error_handler::DirectoryError, services::omdb_service::OmdbService};

/// Identifier used for the probe lookup.
pub const PROBE_IDENTIFIER: &str = "tt0133093";

/// A serializable health snapshot, suitable for a `/health` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Directory base URL.
    pub endpoint: String,
    /// Overall health flag.
    pub ok: bool,
    /// Measured latency of the probe in milliseconds.
    pub latency_ms: u64,
    /// Short human-readable message with details.
    pub message: String,
}

impl OmdbService {
    /// Probes the directory and reports a [`HealthStatus`].
    pub async fn health(&self) -> HealthStatus {
        let started = Instant::now();
        let outcome = self.lookup(PROBE_IDENTIFIER).await;
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let (ok, message) = match outcome {
            Ok(detail) => (true, format!("lookup ok ({})", detail.title)),
            Err(DirectoryError::Directory(msg)) => (true, format!("reachable, directory said: {msg}")),
            Err(err) => (false, err.to_string()),
        };

        if ok {
            info!(latency_ms, "directory health ok");
        } else {
            warn!(latency_ms, %message, "directory health failed");
        }

        HealthStatus {
            endpoint: self.endpoint().to_string(),
            ok,
            latency_ms,
            message,
        }
    }
}
