use axum::{extract::rejection::JsonRejection, Extension, Json};
use serde::Deserialize;

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{Movie, UserData},
    services::watch_state,
};

#[derive(Debug, Deserialize)]
pub struct AddWatchedRequest {
    pub user_data: UserData,
    pub movie: Option<Movie>,
}

#[derive(Debug, Deserialize)]
pub struct AddWatchlistRequest {
    pub user_data: UserData,
    pub movie: Movie,
}

#[derive(Debug, Deserialize)]
pub struct WatchRequest {
    pub user_data: UserData,
    pub title: String,
}

/// Handler for appending to watched; a missing or null movie leaves the snapshot unchanged
pub async fn add_watched(
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<AddWatchedRequest>, JsonRejection>,
) -> AppResult<Json<UserData>> {
    let Json(request) = payload?;

    tracing::info!(
        request_id = %request_id,
        has_movie = request.movie.is_some(),
        "Processing add watched request"
    );

    let mut user_data = request.user_data;
    watch_state::add_to_watched(&mut user_data, request.movie);
    Ok(Json(user_data))
}

/// Handler for appending to the watchlist
pub async fn add_watchlist(
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<AddWatchlistRequest>, JsonRejection>,
) -> AppResult<Json<UserData>> {
    let Json(request) = payload?;

    tracing::info!(
        request_id = %request_id,
        title = %request.movie.title,
        "Processing add watchlist request"
    );

    let mut user_data = request.user_data;
    watch_state::add_to_watchlist(&mut user_data, request.movie);
    Ok(Json(user_data))
}

/// Handler for moving matching watchlist entries to watched
pub async fn watch(
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<WatchRequest>, JsonRejection>,
) -> AppResult<Json<UserData>> {
    let Json(request) = payload?;

    tracing::info!(
        request_id = %request_id,
        title = %request.title,
        "Processing watch request"
    );

    let mut user_data = request.user_data;
    watch_state::watch_movie(&mut user_data, &request.title);
    Ok(Json(user_data))
}
