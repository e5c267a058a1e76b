//! Error types for Linear API operations

use thiserror::Error;

/// Errors that can occur when talking to the Linear GraphQL API
#[derive(Error, Debug)]
pub enum LinearError {
    /// No API key is configured
    #[error("Linear client not authenticated - set LINEAR_API_KEY")]
    NotAuthenticated,

    /// Transport-level failure (connect, timeout, TLS)
    #[error("Linear API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status
    #[error("Linear API returned HTTP {status}: {body}")]
    Status {
        status: u16,
        body: String,
    },

    /// The response carried a GraphQL `errors` array
    #[error("Linear API error: {0}")]
    GraphQL(String),

    #[error("Linear API response missing 'data' field")]
    MissingData,

    /// `data` did not match the expected shape
    #[error("failed to parse Linear response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for Linear operations
pub type LinearResult<T> = Result<T, LinearError>;
