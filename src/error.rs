use thiserror::Error;

/// The only message a visitor ever sees when a search does not complete.
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

/// Why a search request failed. The variants exist for logging only; the UI
/// reports every one of them with [`SEARCH_FAILED_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Search endpoint returned HTTP {0}")]
    Status(u16),

    #[error("Malformed search response: {0}")]
    Decode(String),
}

impl SearchError {
    pub fn user_message(&self) -> &'static str {
        SEARCH_FAILED_MESSAGE
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => SearchError::Status(status.as_u16()),
            None => SearchError::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Decode(err.to_string())
    }
}
