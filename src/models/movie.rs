use serde::{Deserialize, Serialize};

/// A movie as tracked in a user's lists
///
/// Two movies are interchangeable when every field matches. Most comparisons
/// across lists only look at `title`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Display title, also the de facto key when comparing lists
    pub title: String,
    /// Genre label (e.g., "Horror", "Comedy")
    pub genre: String,
    /// User rating, never zero for a movie built through [`Movie::new`]
    pub rating: f64,
    /// Streaming service the movie is available on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl Movie {
    /// Creates a movie when title and genre are non-empty and rating is non-zero
    pub fn new(title: impl Into<String>, genre: impl Into<String>, rating: f64) -> Option<Self> {
        let title = title.into();
        let genre = genre.into();

        if title.is_empty() || genre.is_empty() || rating == 0.0 {
            return None;
        }

        Some(Self {
            title,
            genre,
            rating,
            host: None,
        })
    }

    /// Attaches the streaming service hosting this movie
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }
}
