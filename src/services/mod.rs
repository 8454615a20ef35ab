pub mod recommendations;
pub mod social;
pub mod statistics;
pub mod watch_state;

pub use recommendations::{
    get_available_recs, get_new_rec_by_genre, get_rec_from_favorites, recommend, Recommendations,
};
pub use social::{
    get_friends_movies, get_friends_unique_watched, get_unique_watched, in_friends_watchlist,
    in_users_subscriptions, user_has_watched,
};
pub use statistics::{get_most_watched_genre, get_watched_avg_rating};
pub use watch_state::{add_to_watched, add_to_watchlist, create_movie, watch_movie};
