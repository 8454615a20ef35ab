use axum::{
    http::StatusCode,
    middleware::from_fn,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::{make_span_with_request_id, request_id_middleware};

pub mod movies;
pub mod recommendations;
pub mod social;
pub mod stats;
pub mod watch;

/// Creates the application router with all routes
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(from_fn(request_id_middleware))
}

/// API routes under /api/v1
fn api_routes() -> Router {
    Router::new()
        .route("/movies", post(movies::create))
        .route("/watched", post(watch::add_watched))
        .route("/watchlist", post(watch::add_watchlist))
        .route("/watch", post(watch::watch))
        .route("/stats", post(stats::stats))
        .route("/social/unique", post(social::unique))
        .route("/social/friends-unique", post(social::friends_unique))
        .route("/social/friends-movies", post(social::friends_movies))
        .route("/recommendations", post(recommendations::recommend))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
