//! MCP Server implementation and lifecycle management.
//!
//! The server exposes the Notion tools only. Tools are defined in
//! `domains/tools/definitions/` with one file per tool; the router is built
//! in `domains/tools/router.rs` and HTTP dispatch goes through
//! [`ToolRegistry`](crate::domains::tools::ToolRegistry).

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::error;

use super::config::Config;
use super::error::Result as CrateResult;
use crate::domains::tools::{NotionService, build_tool_router};

#[cfg(feature = "http")]
use crate::domains::tools::ToolRegistry;

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Notion client, renderer and formatter shared by all tools.
    service: Arc<NotionService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Instructions sent to clients during initialization.
    pub const INSTRUCTIONS: &'static str = "Notion workspace tools: pages, databases, blocks, \
        users, comments and search. Pass format=\"markdown\" to have page objects rendered as \
        markdown when the server runs with NOTION_MARKDOWN_CONVERSION=true.";

    /// Create a new MCP server with the given configuration.
    ///
    /// A client that cannot be built is logged and replaced by an
    /// unconfigured service, so the server still starts and every tool
    /// reports the initialization failure.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        match Self::try_new(config.clone()) {
            Ok(server) => server,
            Err(e) => {
                error!("{}", e);
                Self::with_service(Arc::new(NotionService::unconfigured(config)))
            }
        }
    }

    /// Create a server, failing when a configured client cannot be built.
    pub fn try_new(config: Arc<Config>) -> CrateResult<Self> {
        let service = NotionService::from_config(config)?;
        Ok(Self::with_service(Arc::new(service)))
    }

    /// Create a server around an existing service.
    pub fn with_service(service: Arc<NotionService>) -> Self {
        let config = Arc::new(service.config().clone());
        Self {
            tool_router: build_tool_router::<Self>(service.clone()),
            config,
            service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Whether a Notion client is available.
    pub fn is_configured(&self) -> bool {
        self.service.is_configured()
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        ToolRegistry::new(self.service.clone())
            .call_tool(name, arguments)
            .await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(Self::INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
