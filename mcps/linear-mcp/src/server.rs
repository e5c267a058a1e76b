//! MCP Server implementation
//!
//! Exposes Linear operations as MCP tools. Handler implementations are in
//! the handlers/ module; this file only wires tools to handlers.

use std::sync::Arc;

use mcp_common::{
    async_trait, EmbeddableError, EmbeddableMcp, EmbeddableResult, ResultExt, Tool,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde_json::Value;

use crate::config::Config;
use crate::handlers::IssueHandler;
use crate::linear::{LinearAuth, LinearAuthProvider, LinearGraphQLClient};
use crate::params::*;

const INSTRUCTIONS: &str = "Linear MCP Server - provides tools for updating Linear issues \
                            through the Linear GraphQL API. Requires LINEAR_API_KEY to be set.";

/// The main Linear MCP Server
#[derive(Clone)]
pub struct LinearMcpServer {
    handler: IssueHandler,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Issue Tools
// ============================================================================

#[tool_router]
impl LinearMcpServer {
    #[tool(
        description = "Update the workflow state of a Linear issue. Takes the issue ID or identifier and the target state ID"
    )]
    async fn linear_update_issue_status(
        &self,
        Parameters(params): Parameters<UpdateIssueStatusParams>,
    ) -> Result<CallToolResult, McpError> {
        self.handler.update_issue_status(params).await.to_mcp_err()
    }
}

// ============================================================================
// Server Initialization
// ============================================================================

impl LinearMcpServer {
    /// Build the server with API-key auth and the GraphQL client
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let auth: Arc<dyn LinearAuthProvider> = Arc::new(LinearAuth::from_config(&config.linear));
        if !auth.is_authenticated() {
            tracing::warn!("No Linear API key configured; tool calls will fail until LINEAR_API_KEY is set");
        }

        let client = LinearGraphQLClient::new(&config.linear, auth.clone())?;
        tracing::info!("Linear API endpoint: {}", client.endpoint());

        Ok(Self::with_handler(IssueHandler::new(auth, Arc::new(client))))
    }

    /// Build the server around an existing handler
    pub fn with_handler(handler: IssueHandler) -> Self {
        Self {
            handler,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for LinearMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for LinearMcpServer {
    fn server_name(&self) -> &str {
        "linear"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "linear_update_issue_status" => {
                let params: UpdateIssueStatusParams = serde_json::from_value(params)?;
                self.linear_update_issue_status(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
