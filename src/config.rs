/// Base URL used when `API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Path of the search endpoint, relative to the API base.
pub const SEARCH_PATH: &str = "/api/search";

/// Where the search backend lives.
///
/// The browser has no process environment, so `API_BASE` is captured when
/// the wasm bundle is built (e.g. `API_BASE=https://api.example.com trunk build`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    pub fn from_env() -> Self {
        Self::new(option_env!("API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of `POST /api/search`.
    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
