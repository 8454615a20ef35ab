use axum::{extract::rejection::JsonRejection, http::StatusCode, Extension, Json};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::Movie,
    services::watch_state,
};

#[derive(Debug, Deserialize)]
pub struct CreateMovieRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub rating: f64,
    pub host: Option<String>,
}

/// Handler for movie creation; the factory's `None` becomes a 400 here
pub async fn create(
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<CreateMovieRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let Json(request) = payload?;

    tracing::info!(
        request_id = %request_id,
        title = %request.title,
        "Processing movie creation request"
    );

    let movie = watch_state::create_movie(&request.title, &request.genre, request.rating)
        .ok_or_else(|| {
            AppError::InvalidInput(
                "title, genre and a non-zero rating are required".to_string(),
            )
        })?;

    let movie = match request.host {
        Some(host) => movie.with_host(host),
        None => movie,
    };

    Ok((StatusCode::CREATED, Json(movie)))
}
