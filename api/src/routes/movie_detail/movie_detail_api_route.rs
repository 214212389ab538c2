//! GET /api/movies/{id}: the detail screen as JSON.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use screens::{DetailScreen, ScreenState};
use tracing::debug;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    middleware_layer::json_extractor::request_id,
    routes::movie_detail::movie_detail_response::MovieDetailApiResponse,
};

/// Handler: GET /api/movies/{id}
///
/// # Example
/// ```bash
/// curl http://127.0.0.1:3000/api/movies/tt0133093
/// ```
pub async fn movie_detail_api(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let request_id = request_id(&headers);
    debug!(request_id = ?request_id, identifier = %id, "movie_detail_api: start");

    let mut screen = DetailScreen::new();
    screen.open(&state.directory, Some(id.as_str())).await;

    match screen.state() {
        ScreenState::Loaded(_) => Ok(ApiResponse::success(MovieDetailApiResponse {
            identifier: id,
            state: screen.state().clone(),
        })
        .with_request_id(request_id)
        .into_response_with_status(StatusCode::OK)),
        ScreenState::Failed(failure) => Err(AppError::from(failure)),
        // `open` always finishes in Loaded or Failed for a non-empty id.
        ScreenState::Idle | ScreenState::Loading => Ok(AppError::NotFound.into_response()),
    }
}
