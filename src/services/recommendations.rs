use serde::Serialize;

use crate::models::{Movie, UserData};

use super::social::{get_friends_movies, in_users_subscriptions, watched_titles};
use super::statistics::get_most_watched_genre;

/// All recommendation lists for one user
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Recommendations {
    /// Friends' movies available on the user's subscriptions
    pub available: Vec<Movie>,
    /// Friends' movies in the user's most watched genre
    pub by_genre: Vec<Movie>,
    /// Favorites no friend has watched yet
    pub from_favorites: Vec<Movie>,
}

/// Friends' movies the user hasn't watched that stream on one of their subscriptions
///
/// A movie without a host is never considered available.
pub fn get_available_recs(user_data: &UserData) -> Vec<Movie> {
    let friends_movies = get_friends_movies(user_data);
    if friends_movies.is_empty() {
        return Vec::new();
    }

    let user_titles = watched_titles(user_data);
    let recs: Vec<Movie> = friends_movies
        .into_iter()
        .filter(|movie| !user_titles.contains(movie.title.as_str()))
        .filter(|movie| {
            movie
                .host
                .as_deref()
                .is_some_and(|host| in_users_subscriptions(host, &user_data.subscriptions))
        })
        .collect();

    tracing::debug!(count = recs.len(), "Computed available recommendations");
    recs
}

/// Friends' movies the user hasn't watched in the user's most watched genre
pub fn get_new_rec_by_genre(user_data: &UserData) -> Vec<Movie> {
    let friends_movies = get_friends_movies(user_data);
    let Some(top_genre) = get_most_watched_genre(user_data) else {
        return Vec::new();
    };
    if friends_movies.is_empty() {
        return Vec::new();
    }

    let user_titles = watched_titles(user_data);
    let recs: Vec<Movie> = friends_movies
        .into_iter()
        .filter(|movie| !user_titles.contains(movie.title.as_str()))
        .filter(|movie| movie.genre == top_genre)
        .collect();

    tracing::debug!(genre = %top_genre, count = recs.len(), "Computed genre recommendations");
    recs
}

/// Favorites that none of the user's friends have watched
///
/// Returns nothing until the user has both watched and favorited something.
pub fn get_rec_from_favorites(user_data: &UserData) -> Vec<Movie> {
    if user_data.watched.is_empty() || user_data.favorites.is_empty() {
        return Vec::new();
    }

    let friends_movies = get_friends_movies(user_data);
    let recs: Vec<Movie> = user_data
        .favorites
        .iter()
        .filter(|movie| !friends_movies.contains(movie))
        .cloned()
        .collect();

    tracing::debug!(count = recs.len(), "Computed favorites recommendations");
    recs
}

/// Computes every recommendation list in one pass over the snapshot
pub fn recommend(user_data: &UserData) -> Recommendations {
    Recommendations {
        available: get_available_recs(user_data),
        by_genre: get_new_rec_by_genre(user_data),
        from_favorites: get_rec_from_favorites(user_data),
    }
}
