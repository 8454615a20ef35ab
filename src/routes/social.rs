use axum::{extract::rejection::JsonRejection, Extension, Json};

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{Movie, UserData},
    services::social,
};

/// Handler for movies only the user has watched
pub async fn unique(
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<UserData>, JsonRejection>,
) -> AppResult<Json<Vec<Movie>>> {
    let Json(user_data) = payload?;
    tracing::info!(request_id = %request_id, "Processing unique watched request");
    Ok(Json(social::get_unique_watched(&user_data)))
}

/// Handler for movies only friends have watched
pub async fn friends_unique(
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<UserData>, JsonRejection>,
) -> AppResult<Json<Vec<Movie>>> {
    let Json(user_data) = payload?;
    tracing::info!(request_id = %request_id, "Processing friends unique watched request");
    Ok(Json(social::get_friends_unique_watched(&user_data)))
}

/// Handler for the union of friends' watched movies
pub async fn friends_movies(
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<UserData>, JsonRejection>,
) -> AppResult<Json<Vec<Movie>>> {
    let Json(user_data) = payload?;
    tracing::info!(
        request_id = %request_id,
        friends = user_data.friends.len(),
        "Processing friends movies request"
    );
    Ok(Json(social::get_friends_movies(&user_data)))
}
