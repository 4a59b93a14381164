//! Get page tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::format::ResponseFormat;
use crate::domains::tools::definitions::common::{require_id, try_tool};
use crate::domains::tools::{NotionService, NotionTool};
use crate::notion::NotionRequest;

/// Parameters for the get page tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPageParams {
    /// ID of the page to retrieve.
    pub page_id: String,

    /// Response format: "json" (default) or "markdown".
    #[serde(default)]
    pub format: ResponseFormat,
}

/// Get page tool - retrieves a page's properties.
pub struct GetPageTool;

#[async_trait]
impl NotionTool for GetPageTool {
    const NAME: &'static str = "notion_get_page";
    const DESCRIPTION: &'static str = "Retrieve a Notion page. With format=markdown (when enabled) \
        the page is returned as {id, title, content} with its content rendered to Markdown.";
    type Params = GetPageParams;

    #[instrument(skip_all, fields(page_id = %params.page_id))]
    async fn execute(params: GetPageParams, service: &NotionService) -> CallToolResult {
        info!("Get page tool called");
        let page_id = try_tool!(require_id("page_id", &params.page_id));
        service
            .respond(NotionRequest::RetrievePage { page_id }, params.format)
            .await
    }
}
