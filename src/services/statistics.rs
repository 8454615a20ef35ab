use std::collections::HashMap;

use crate::models::UserData;

/// Mean rating across watched movies, `0.0` when nothing has been watched
pub fn get_watched_avg_rating(user_data: &UserData) -> f64 {
    if user_data.watched.is_empty() {
        return 0.0;
    }

    let total: f64 = user_data.watched.iter().map(|movie| movie.rating).sum();
    total / user_data.watched.len() as f64
}

/// Genre occurring most often among watched movies
///
/// Ties go to the genre that was watched first. Returns `None` when nothing
/// has been watched.
pub fn get_most_watched_genre(user_data: &UserData) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for movie in &user_data.watched {
        let count = counts.entry(movie.genre.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(movie.genre.as_str());
        }
        *count += 1;
    }

    // Strictly greater keeps the earliest genre on ties
    let mut best: Option<(&str, usize)> = None;
    for genre in first_seen {
        let count = counts[genre];
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((genre, count)),
        }
    }

    best.map(|(genre, _)| genre.to_string())
}
