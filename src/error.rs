use thiserror::Error;

/// Main error type for the recommendation engine
#[derive(Error, Debug)]
pub enum RecEngineError {
    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Metadata provider errors
    #[error("Provider '{provider}' error: {message}")]
    Provider { provider: String, message: String },

    /// Corrupt or mismatched persisted artifacts
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// Model artifacts missing at load time
    #[error("Model artifacts are not available")]
    ModelUnavailable,

    /// Title not present in the movie table
    #[error("Title '{0}' not found in the catalog")]
    TitleNotFound(String),

    /// No watchlist title present in the movie table
    #[error("None of the watchlist titles were found in the catalog")]
    WatchlistNoMatch,

    /// Offline build fetched zero movies
    #[error("No movies fetched; aborting build without writing artifacts")]
    EmptyCatalog,

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for RecEngineError {
    fn from(s: String) -> Self {
        RecEngineError::Other(s)
    }
}

impl From<&str> for RecEngineError {
    fn from(s: &str) -> Self {
        RecEngineError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, RecEngineError>;
