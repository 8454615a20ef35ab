use crate::models::{Movie, UserData};

/// Builds a movie record, or `None` if any required field is empty or zero
pub fn create_movie(title: &str, genre: &str, rating: f64) -> Option<Movie> {
    Movie::new(title, genre, rating)
}

/// Appends a movie to the watched list; `None` is ignored
pub fn add_to_watched(user_data: &mut UserData, movie: Option<Movie>) -> &mut UserData {
    if let Some(movie) = movie {
        tracing::debug!(title = %movie.title, "Adding movie to watched");
        user_data.watched.push(movie);
    }
    user_data
}

/// Appends a movie to the watchlist
///
/// Unlike [`add_to_watched`] there is no validation here: callers are
/// expected to pass a movie built through [`create_movie`].
pub fn add_to_watchlist(user_data: &mut UserData, movie: Movie) -> &mut UserData {
    tracing::debug!(title = %movie.title, "Adding movie to watchlist");
    user_data.watchlist.push(movie);
    user_data
}

/// Moves every watchlist entry whose title contains `title` into watched
///
/// Matching is by substring, so "Inception" also moves "Inception 2". Both
/// lists keep their relative order.
pub fn watch_movie<'a>(user_data: &'a mut UserData, title: &str) -> &'a mut UserData {
    let (matches, remaining): (Vec<Movie>, Vec<Movie>) =
        std::mem::take(&mut user_data.watchlist)
            .into_iter()
            .partition(|movie| movie.title.contains(title));

    tracing::debug!(
        title = %title,
        moved = matches.len(),
        remaining = remaining.len(),
        "Moving watchlist entries to watched"
    );

    user_data.watchlist = remaining;
    user_data.watched.extend(matches);
    user_data
}
