use axum::{extract::rejection::JsonRejection, Extension, Json};
use serde::Serialize;

use crate::{error::AppResult, middleware::RequestId, models::UserData, services::statistics};

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub average_rating: f64,
    pub most_watched_genre: Option<String>,
}

/// Handler for watch statistics
pub async fn stats(
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<UserData>, JsonRejection>,
) -> AppResult<Json<StatsResponse>> {
    let Json(user_data) = payload?;

    tracing::info!(
        request_id = %request_id,
        watched = user_data.watched.len(),
        "Processing stats request"
    );

    Ok(Json(StatsResponse {
        average_rating: statistics::get_watched_avg_rating(&user_data),
        most_watched_genre: statistics::get_most_watched_genre(&user_data),
    }))
}
