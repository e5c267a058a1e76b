//! MCP Common - shared plumbing for MCP servers
//!
//! - **Startup**: [`init_tracing`] and [`serve_stdio`]
//! - **Errors**: [`IntoMcpError`] / [`ResultExt`] for `?` in tool methods
//! - **Results**: [`text_success`] for single-text-block responses
//! - **Embedding**: [`EmbeddableMcp`] for in-process tool calls
//!
//! ```rust,ignore
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     mcp_common::init_tracing("linear_mcp")?;
//!     let server = LinearMcpServer::new(Config::load()?)?;
//!     mcp_common::serve_stdio(server).await
//! }
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params, IntoMcpError, McpResult, ResultExt};
pub use init::{init_tracing, serve_stdio, LogFormat};
pub use result::{first_text, text_success};

pub use rmcp::{
    model::{CallToolResult, Tool},
    ErrorData as McpError,
};

pub use async_trait::async_trait;
