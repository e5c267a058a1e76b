//! In-process tool invocation
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly with JSON
//! arguments, skipping the stdio transport.
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//!
//! let result = server
//!     .call_tool("linear_update_issue_status", json!({"id": "ENG-1", "stateId": "s-2"}))
//!     .await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Errors from embedded tool calls
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Arguments did not decode into the tool's parameter type
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),

    /// The tool ran and returned an MCP error
    #[error("{0}")]
    Mcp(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::Mcp(err.message.to_string())
    }
}

pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// A server whose tools can be called in-process
///
/// Implementations must be `Send + Sync`; hosts may call tools from
/// several tasks at once.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Name used in host configuration
    fn server_name(&self) -> &str;

    /// All tools with their input schemas
    fn list_tools(&self) -> Vec<Tool>;

    /// Run tool `name` with JSON `params`
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }
}
