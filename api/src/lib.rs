use std::sync::Arc;

pub mod core;
pub mod error_handler;
mod middleware_layer;
mod render;
mod routes;

use axum::{Router, middleware, routing::get};
use tokio::signal;
use tracing::{info, warn};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    middleware_layer::json_extractor::json_error_mapper,
    routes::{
        health_route::health,
        movie_detail::{
            movie_detail_api_route::movie_detail_api,
            movie_detail_page_route::{movie_detail_page, movie_detail_page_without_id},
        },
        search::{search_api_route::search_api, search_page_route::search_page},
    },
};

/// Loads state from the environment and serves until Ctrl+C.
pub async fn start() -> AppResult<()> {
    let state = Arc::new(AppState::from_env()?);
    let address = state.config.address.clone();

    let app = router(state);

    // Bind to address
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(AppError::Bind)?;

    info!(%address, "movie search listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Builds the full HTTP surface over `state`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(search_page))
        .route("/movies", get(movie_detail_page_without_id))
        .route("/movies/", get(movie_detail_page_without_id))
        .route("/movies/{id}", get(movie_detail_page))
        .route("/api/search", get(search_api))
        .route("/api/movies/{id}", get(movie_detail_api))
        .route("/health", get(health))
        .layer(middleware::from_fn(json_error_mapper))
        .with_state(state)
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        // Keep serving rather than shutting down immediately.
        std::future::pending::<()>().await;
    }
}
