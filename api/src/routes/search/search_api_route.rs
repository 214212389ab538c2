//! GET /api/search: the search screen as JSON.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use screens::{ScreenState, SearchScreen};
use tracing::debug;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::AppError,
    middleware_layer::json_extractor::request_id,
    routes::search::{search_request::SearchApiParams, search_response::SearchApiResponse},
};

/// Handler: GET /api/search?q=<title>
///
/// # Example
/// ```bash
/// curl 'http://127.0.0.1:3000/api/search?q=batman'
/// ```
pub async fn search_api(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<SearchApiParams>,
) -> Response {
    let request_id = request_id(&headers);
    debug!(request_id = ?request_id, query = %params.q, "search_api: start");

    let mut screen = SearchScreen::new();
    screen.submit_search(&state.directory, &params.q).await;

    match screen.state() {
        ScreenState::Failed(failure) => AppError::from(failure).into_response(),
        _ => {
            let links: Vec<String> = screen
                .results()
                .iter()
                .map(|item| screen.activate_result(&item.identifier).path())
                .collect();

            debug!(request_id = ?request_id, hits = links.len(), "search_api: success");

            ApiResponse::success(SearchApiResponse {
                query: params.q,
                state: screen.state().clone(),
                links,
            })
            .with_request_id(request_id)
            .into_response_with_status(StatusCode::OK)
        }
    }
}
