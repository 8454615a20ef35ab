use std::collections::HashSet;

use crate::models::{Movie, UserData};

/// Titles the user has watched
pub(crate) fn watched_titles(user_data: &UserData) -> HashSet<&str> {
    user_data
        .watched
        .iter()
        .map(|movie| movie.title.as_str())
        .collect()
}

/// Movies the user has watched that no friend has watched, compared by title
pub fn get_unique_watched(user_data: &UserData) -> Vec<Movie> {
    let friends_titles: HashSet<&str> = user_data
        .friends
        .iter()
        .flat_map(|friend| friend.watched.iter())
        .map(|movie| movie.title.as_str())
        .collect();

    user_data
        .watched
        .iter()
        .filter(|movie| !friends_titles.contains(movie.title.as_str()))
        .cloned()
        .collect()
}

/// Movies at least one friend has watched and the user has not
///
/// The user's history is compared by title, while duplicates across friends
/// are collapsed only when the whole record matches.
pub fn get_friends_unique_watched(user_data: &UserData) -> Vec<Movie> {
    let user_titles = watched_titles(user_data);
    let mut friends_unique: Vec<Movie> = Vec::new();

    for movie in user_data.friends.iter().flat_map(|friend| friend.watched.iter()) {
        if !user_titles.contains(movie.title.as_str()) && !friends_unique.contains(movie) {
            friends_unique.push(movie.clone());
        }
    }

    friends_unique
}

/// Every movie any friend has watched, one per title, in first-seen order
pub fn get_friends_movies(user_data: &UserData) -> Vec<Movie> {
    let mut titles: HashSet<&str> = HashSet::new();
    let mut movies = Vec::new();

    for movie in user_data.friends.iter().flat_map(|friend| friend.watched.iter()) {
        if titles.insert(movie.title.as_str()) {
            movies.push(movie.clone());
        }
    }

    movies
}

/// Whether `movie` is in the given watched list
pub fn user_has_watched(movie: &Movie, watched_movies: &[Movie]) -> bool {
    watched_movies.contains(movie)
}

/// Whether `movie` is among the movies watched by friends
pub fn in_friends_watchlist(movie: &Movie, watched_by_friends: &[Movie]) -> bool {
    watched_by_friends.contains(movie)
}

/// Whether `host` is one of the user's subscriptions
pub fn in_users_subscriptions(host: &str, subscriptions: &[String]) -> bool {
    subscriptions.iter().any(|subscription| subscription == host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FriendData;

    fn movie(title: &str, genre: &str, rating: f64) -> Movie {
        Movie::new(title, genre, rating).unwrap()
    }

    fn friend(watched: Vec<Movie>) -> FriendData {
        FriendData { watched }
    }

    fn sample_user() -> UserData {
        UserData {
            watched: vec![
                movie("A", "Fantasy", 4.8),
                movie("B", "Fantasy", 4.0),
                movie("C", "Action", 2.2),
            ],
            friends: vec![
                friend(vec![movie("A", "Fantasy", 4.8), movie("D", "Intrigue", 3.0)]),
                friend(vec![
                    movie("D", "Intrigue", 3.0),
                    movie("E", "Horror", 1.0),
                    movie("C", "Action", 2.2),
                ]),
            ],
            ..UserData::default()
        }
    }

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_unique_watched() {
        let user_data = sample_user();
        assert_eq!(titles(&get_unique_watched(&user_data)), vec!["B"]);
    }

    #[test]
    fn test_unique_watched_compares_by_title() {
        let mut user_data = sample_user();
        // Same title, different rating: still counts as shared
        user_data.friends[0].watched.push(movie("B", "Fantasy", 1.0));
        assert!(get_unique_watched(&user_data).is_empty());
    }

    #[test]
    fn test_friends_unique_watched_dedupes_identical_records() {
        let user_data = sample_user();
        assert_eq!(titles(&get_friends_unique_watched(&user_data)), vec!["D", "E"]);
    }

    #[test]
    fn test_friends_unique_watched_keeps_differing_records() {
        let mut user_data = sample_user();
        user_data.friends[1].watched.push(movie("D", "Intrigue", 5.0));
        assert_eq!(
            titles(&get_friends_unique_watched(&user_data)),
            vec!["D", "E", "D"]
        );
    }

    #[test]
    fn test_shared_titles_in_neither_unique_result() {
        let user_data = sample_user();
        let unique = get_unique_watched(&user_data);
        let friends_unique = get_friends_unique_watched(&user_data);

        for shared in ["A", "C"] {
            assert!(!unique.iter().any(|m| m.title == shared));
            assert!(!friends_unique.iter().any(|m| m.title == shared));
        }
    }

    #[test]
    fn test_no_friends() {
        let user_data = UserData {
            watched: vec![movie("A", "Fantasy", 4.8)],
            ..UserData::default()
        };
        assert_eq!(get_unique_watched(&user_data), user_data.watched);
        assert!(get_friends_unique_watched(&user_data).is_empty());
        assert!(get_friends_movies(&user_data).is_empty());
    }

    #[test]
    fn test_friends_movies_dedupes_by_title_in_order() {
        let mut user_data = sample_user();
        user_data.friends[1].watched.push(movie("A", "Fantasy", 1.0));

        let movies = get_friends_movies(&user_data);

        assert_eq!(titles(&movies), vec!["A", "D", "E", "C"]);
        assert_eq!(movies[0].rating, 4.8);
    }

    #[test]
    fn test_membership_predicates() {
        let user_data = sample_user();
        let friends_movies = get_friends_movies(&user_data);

        assert!(user_has_watched(&movie("A", "Fantasy", 4.8), &user_data.watched));
        assert!(!user_has_watched(&movie("A", "Fantasy", 1.0), &user_data.watched));
        assert!(in_friends_watchlist(&movie("E", "Horror", 1.0), &friends_movies));
        assert!(!in_friends_watchlist(&movie("B", "Fantasy", 4.0), &friends_movies));
    }

    #[test]
    fn test_in_users_subscriptions_exact_match() {
        let subscriptions = vec!["netflix".to_string(), "hulu".to_string()];
        assert!(in_users_subscriptions("hulu", &subscriptions));
        assert!(!in_users_subscriptions("Hulu", &subscriptions));
        assert!(!in_users_subscriptions("net", &subscriptions));
    }
}
