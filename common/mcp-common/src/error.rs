//! Conversions into MCP protocol errors
//!
//! Tool methods return `Result<CallToolResult, McpError>`. Domain error
//! types implement [`IntoMcpError`] so handlers can use `?` via
//! [`ResultExt::to_mcp_err`].

use rmcp::ErrorData as McpError;

/// Result alias for MCP tool methods
pub type McpResult<T> = Result<T, McpError>;

/// Conversion of a domain error into an MCP error
///
/// Implementations pick the error code. Validation problems should map to
/// [`invalid_params`], everything else to [`internal_error`].
pub trait IntoMcpError {
    fn into_mcp_error(self) -> McpError;
}

/// `map_err` shorthand for results whose error implements [`IntoMcpError`]
pub trait ResultExt<T> {
    fn to_mcp_err(self) -> McpResult<T>;
}

impl<T, E: IntoMcpError> ResultExt<T> for Result<T, E> {
    fn to_mcp_err(self) -> McpResult<T> {
        self.map_err(IntoMcpError::into_mcp_error)
    }
}

/// Internal error carrying `message` verbatim
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// Invalid-params error carrying `message` verbatim
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}
