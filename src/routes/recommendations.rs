use axum::{extract::rejection::JsonRejection, Extension, Json};

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::UserData,
    services::recommendations::{self, Recommendations},
};

/// Handler for recommendations endpoint
pub async fn recommend(
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<UserData>, JsonRejection>,
) -> AppResult<Json<Recommendations>> {
    let Json(user_data) = payload?;

    tracing::info!(
        request_id = %request_id,
        friends = user_data.friends.len(),
        watched = user_data.watched.len(),
        "Processing recommendation request"
    );

    let recs = recommendations::recommend(&user_data);

    tracing::info!(
        request_id = %request_id,
        available = recs.available.len(),
        by_genre = recs.by_genre.len(),
        from_favorites = recs.from_favorites.len(),
        "Recommendations computed"
    );

    Ok(Json(recs))
}
