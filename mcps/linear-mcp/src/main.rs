//! Linear MCP Server
//!
//! Serves Linear issue tools over stdio.
//!
//! # Configuration
//! Set `LINEAR_API_KEY`, or configure `~/.binks/linear.toml`
//! (path overridable with `LINEAR_MCP_CONFIG_PATH`).

use linear_mcp::{config::Config, LinearMcpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mcp_common::init_tracing("linear_mcp")?;

    tracing::info!("Starting Linear MCP Server");

    let config = Config::load()?;
    let server = LinearMcpServer::new(&config)?;

    mcp_common::serve_stdio(server).await
}
