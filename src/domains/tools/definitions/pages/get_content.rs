//! Get page content tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::format::ResponseFormat;
use crate::domains::tools::definitions::common::{pagination, require_id, try_tool};
use crate::domains::tools::{NotionService, NotionTool};
use crate::notion::NotionRequest;

/// Parameters for the get page content tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPageContentParams {
    /// ID of the page whose blocks to list.
    pub page_id: String,

    /// Cursor from a previous response's `next_cursor`.
    #[serde(default)]
    pub start_cursor: Option<String>,

    /// Number of blocks to return (1-100).
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Response format: "json" (default) or "markdown".
    #[serde(default)]
    pub format: ResponseFormat,
}

/// Get page content tool - lists the top-level blocks of a page.
pub struct GetPageContentTool;

#[async_trait]
impl NotionTool for GetPageContentTool {
    const NAME: &'static str = "notion_get_page_content";
    const DESCRIPTION: &'static str =
        "List the content blocks of a Notion page. Supports pagination via start_cursor and page_size.";
    type Params = GetPageContentParams;

    #[instrument(skip_all, fields(page_id = %params.page_id))]
    async fn execute(params: GetPageContentParams, service: &NotionService) -> CallToolResult {
        info!("Get page content tool called");
        let block_id = try_tool!(require_id("page_id", &params.page_id));
        let page = try_tool!(pagination(params.start_cursor, params.page_size));
        service
            .respond(NotionRequest::ListBlockChildren { block_id, page }, params.format)
            .await
    }
}
