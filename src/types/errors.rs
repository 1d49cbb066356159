use thiserror::Error;

// === LookupError ===

/// Everything that can end a profile lookup.
///
/// All variants except `EmptyInput` put the controller into `ViewState::Failed`
/// with the variant's display text as the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The submitted username was empty after trimming. No request was made.
    #[error("Please enter a GitHub username")]
    EmptyInput,
    /// The profile request came back with a non-success status.
    #[error("User not found")]
    NotFound,
    /// The request failed before a response was received.
    #[error("{0}")]
    Transport(String),
    /// A response body could not be decoded.
    #[error("{0}")]
    Parse(String),
    /// A repository or follower request came back with a non-success status.
    #[error("Failed to load {resource} (status {status})")]
    Upstream { resource: &'static str, status: u16 },
    /// The configured API URL cannot be used to build request URLs.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Transport(err.to_string())
    }
}

// === StoreError ===

/// Errors from the persistent preference store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Preference database error: {0}")]
    Database(#[from] rusqlite::Error),
}

// === TabError ===

/// Errors related to tab selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    /// No tab with the given id.
    #[error("Tab not found: {0}")]
    NotFound(String),
}

// === AppError ===

/// Startup failures.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
