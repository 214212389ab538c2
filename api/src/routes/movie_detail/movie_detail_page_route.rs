//! GET /movies/{id}: the detail screen.

use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::Html,
};
use screens::{DetailScreen, Route, ScreenState};
use tracing::instrument;

use crate::{
    core::app_state::AppState, error_handler::AppError,
    render::detail_page::render_detail_page,
};

/// Handler: GET /movies/{id}
#[instrument(name = "movie_detail_page", skip_all, fields(identifier = %id))]
pub async fn movie_detail_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> (StatusCode, Html<String>) {
    render(&state, Some(id.as_str())).await
}

/// Handler: GET /movies and /movies/ (no identifier in the URL).
pub async fn movie_detail_page_without_id(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
) -> (StatusCode, Html<String>) {
    let route = Route::parse(uri.path());
    render(&state, route.as_ref().and_then(Route::identifier)).await
}

async fn render(state: &AppState, identifier: Option<&str>) -> (StatusCode, Html<String>) {
    let mut screen = DetailScreen::new();
    screen.open(&state.directory, identifier).await;

    let status = match screen.state() {
        ScreenState::Failed(failure) => AppError::from(failure).status_code(),
        _ => StatusCode::OK,
    };

    (status, Html(render_detail_page(&screen)))
}
