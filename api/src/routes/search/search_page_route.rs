//! GET /: the search screen.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};
use screens::SearchScreen;
use tracing::{debug, instrument};

use crate::{
    core::app_state::AppState, render::search_page::render_search_page,
    routes::search::search_request::SearchPageParams,
};

/// Handler: GET /?q=<title>
///
/// Without `q` the empty search screen is rendered. With `q` (even empty)
/// the search is submitted as typed and the completed screen is rendered.
#[instrument(name = "search_page", skip_all)]
pub async fn search_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchPageParams>,
) -> Html<String> {
    let mut screen = SearchScreen::new();

    if let Some(query) = params.q {
        debug!(query = %query, "search submitted");
        screen.submit_search(&state.directory, &query).await;
    }

    Html(render_search_page(&screen))
}
