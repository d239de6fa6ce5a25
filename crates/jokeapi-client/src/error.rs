/// Client-specific result type
pub type Result<T> = std::result::Result<T, JokeApiError>;

/// Errors from the JokeAPI client
#[derive(Debug, thiserror::Error)]
pub enum JokeApiError {
    /// HTTP transport error, including failure to decode a success body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server rejected the request with a non-success status
    #[error("{status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message from the server
        message: String,
        /// Per-cause detail lines, when the server provides them
        caused_by: Vec<String>,
    },

    /// Invalid base URL
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl JokeApiError {
    /// Status code of an API-level rejection, if this is one
    #[must_use]
    pub const fn api_status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(_) | Self::Config(_) => None,
        }
    }
}
