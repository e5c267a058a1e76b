//! Linear MCP Library
//!
//! MCP-compatible tools for Linear issue tracking over the Linear GraphQL API.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use linear_mcp::{config::Config, LinearMcpServer};
//!
//! let server = LinearMcpServer::new(&Config::load()?)?;
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! # Tools
//! - `linear_update_issue_status`: move an issue to another workflow state
//!
//! # Requirements
//! - A Linear personal API key in `LINEAR_API_KEY` or `~/.binks/linear.toml`

pub mod config;
pub mod handlers;
pub mod linear;
pub mod params;
pub mod server;

// Re-export main server type
pub use server::LinearMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
