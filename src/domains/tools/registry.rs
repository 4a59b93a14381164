//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::definitions::*;
#[cfg(feature = "http")]
use super::error::ToolError;
#[cfg(feature = "http")]
use super::handlers::http_call;
use super::handlers::{NotionTool, tool_for};
use super::service::NotionService;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    service: Arc<NotionService>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(service: Arc<NotionService>) -> Self {
        Self { service }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            CreatePageTool::NAME,
            SaveContentTool::NAME,
            QueryDatabaseTool::NAME,
            GetPageTool::NAME,
            GetPageContentTool::NAME,
            UpdatePagePropertiesTool::NAME,
            CreateDatabaseTool::NAME,
            RetrieveDatabaseTool::NAME,
            UpdateDatabaseTool::NAME,
            CreateDatabaseItemTool::NAME,
            RetrieveBlockTool::NAME,
            RetrieveBlockChildrenTool::NAME,
            AppendBlockChildrenTool::NAME,
            DeleteBlockTool::NAME,
            SearchTool::NAME,
            ListUsersTool::NAME,
            RetrieveUserTool::NAME,
            RetrieveBotUserTool::NAME,
            CreateCommentTool::NAME,
            RetrieveCommentsTool::NAME,
            ExportMarkdownTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            tool_for::<CreatePageTool>(),
            tool_for::<SaveContentTool>(),
            tool_for::<QueryDatabaseTool>(),
            tool_for::<GetPageTool>(),
            tool_for::<GetPageContentTool>(),
            tool_for::<UpdatePagePropertiesTool>(),
            tool_for::<CreateDatabaseTool>(),
            tool_for::<RetrieveDatabaseTool>(),
            tool_for::<UpdateDatabaseTool>(),
            tool_for::<CreateDatabaseItemTool>(),
            tool_for::<RetrieveBlockTool>(),
            tool_for::<RetrieveBlockChildrenTool>(),
            tool_for::<AppendBlockChildrenTool>(),
            tool_for::<DeleteBlockTool>(),
            tool_for::<SearchTool>(),
            tool_for::<ListUsersTool>(),
            tool_for::<RetrieveUserTool>(),
            tool_for::<RetrieveBotUserTool>(),
            tool_for::<CreateCommentTool>(),
            tool_for::<RetrieveCommentsTool>(),
            tool_for::<ExportMarkdownTool>(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let service = self.service.as_ref();
        match name {
            CreatePageTool::NAME => http_call::<CreatePageTool>(arguments, service).await,
            SaveContentTool::NAME => http_call::<SaveContentTool>(arguments, service).await,
            QueryDatabaseTool::NAME => http_call::<QueryDatabaseTool>(arguments, service).await,
            GetPageTool::NAME => http_call::<GetPageTool>(arguments, service).await,
            GetPageContentTool::NAME => http_call::<GetPageContentTool>(arguments, service).await,
            UpdatePagePropertiesTool::NAME => {
                http_call::<UpdatePagePropertiesTool>(arguments, service).await
            }
            CreateDatabaseTool::NAME => http_call::<CreateDatabaseTool>(arguments, service).await,
            RetrieveDatabaseTool::NAME => {
                http_call::<RetrieveDatabaseTool>(arguments, service).await
            }
            UpdateDatabaseTool::NAME => http_call::<UpdateDatabaseTool>(arguments, service).await,
            CreateDatabaseItemTool::NAME => {
                http_call::<CreateDatabaseItemTool>(arguments, service).await
            }
            RetrieveBlockTool::NAME => http_call::<RetrieveBlockTool>(arguments, service).await,
            RetrieveBlockChildrenTool::NAME => {
                http_call::<RetrieveBlockChildrenTool>(arguments, service).await
            }
            AppendBlockChildrenTool::NAME => {
                http_call::<AppendBlockChildrenTool>(arguments, service).await
            }
            DeleteBlockTool::NAME => http_call::<DeleteBlockTool>(arguments, service).await,
            SearchTool::NAME => http_call::<SearchTool>(arguments, service).await,
            ListUsersTool::NAME => http_call::<ListUsersTool>(arguments, service).await,
            RetrieveUserTool::NAME => http_call::<RetrieveUserTool>(arguments, service).await,
            RetrieveBotUserTool::NAME => http_call::<RetrieveBotUserTool>(arguments, service).await,
            CreateCommentTool::NAME => http_call::<CreateCommentTool>(arguments, service).await,
            RetrieveCommentsTool::NAME => {
                http_call::<RetrieveCommentsTool>(arguments, service).await
            }
            ExportMarkdownTool::NAME => http_call::<ExportMarkdownTool>(arguments, service).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name).to_string())
            }
        }
    }
}
