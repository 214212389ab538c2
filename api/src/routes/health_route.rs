//! GET /health: directory reachability.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use movie_directory::HealthStatus;

use crate::core::app_state::AppState;

/// Handler: GET /health
///
/// Responds 200 when the directory is reachable, 503 otherwise; the body is
/// the probe snapshot either way.
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthStatus>) {
    let status = state.directory.health().await;
    let code = if status.ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}
