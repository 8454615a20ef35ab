use serde::{Deserialize, Serialize};

use crate::error::AppResult;

use super::Movie;

/// A friend's view of their own history, one level deep
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FriendData {
    /// Movies this friend has watched
    #[serde(default)]
    pub watched: Vec<Movie>,
}

/// Watch state of a single user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserData {
    /// Movies already watched, in viewing order
    #[serde(default)]
    pub watched: Vec<Movie>,
    /// Movies the user intends to watch
    #[serde(default)]
    pub watchlist: Vec<Movie>,
    /// Movies the user has marked as favorites
    #[serde(default)]
    pub favorites: Vec<Movie>,
    /// Friends whose histories feed the recommendations
    #[serde(default)]
    pub friends: Vec<FriendData>,
    /// Streaming services the user is subscribed to
    #[serde(default)]
    pub subscriptions: Vec<String>,
}

impl UserData {
    /// Creates an empty user record
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON snapshot; missing lists default to empty
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
