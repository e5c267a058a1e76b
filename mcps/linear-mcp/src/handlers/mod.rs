//! Handler implementations for Linear MCP tools

mod issue;

pub use issue::*;

use mcp_common::{internal_error, invalid_params, IntoMcpError, McpError};
use thiserror::Error;

use crate::linear::LinearError;

/// Errors surfaced by tool handlers
#[derive(Error, Debug)]
pub enum HandlerError {
    /// A required argument is absent or blank
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// The API reported failure or echoed back no issue
    #[error("Failed to update issue status")]
    UpdateFailed,

    /// Collaborator failure, passed through untouched; also carries
    /// [`LinearError::NotAuthenticated`] from the auth check
    #[error(transparent)]
    Linear(#[from] LinearError),
}

pub type HandlerResult<T> = Result<T, HandlerError>;

impl IntoMcpError for HandlerError {
    fn into_mcp_error(self) -> McpError {
        match self {
            HandlerError::MissingParameter(_) => invalid_params(self.to_string()),
            _ => internal_error(self.to_string()),
        }
    }
}

/// Return the argument if it is present and not blank
pub(crate) fn required<'a>(value: Option<&'a str>, name: &'static str) -> HandlerResult<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(HandlerError::MissingParameter(name)),
    }
}
