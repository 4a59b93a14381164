//! Retrieve comments tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::format::ResponseFormat;
use crate::domains::tools::definitions::common::{pagination, require_id, try_tool};
use crate::domains::tools::{NotionService, NotionTool};
use crate::notion::NotionRequest;

/// Note attached to comment retrieval failures.
pub const RETRIEVE_COMMENTS_NOTE: &str =
    "Reading comments requires the integration's read comment capability";

/// Parameters for the retrieve comments tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RetrieveCommentsParams {
    /// ID of the page or block whose comments to list.
    pub block_id: String,

    /// Cursor from a previous response's `next_cursor`.
    #[serde(default)]
    pub start_cursor: Option<String>,

    /// Number of comments to return (1-100).
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Response format: "json" (default) or "markdown".
    #[serde(default)]
    pub format: ResponseFormat,
}

/// Retrieve comments tool.
pub struct RetrieveCommentsTool;

#[async_trait]
impl NotionTool for RetrieveCommentsTool {
    const NAME: &'static str = "notion_retrieve_comments";
    const DESCRIPTION: &'static str = "List the unresolved comments on a Notion page or block. \
        Requires the integration's read comment capability.";
    type Params = RetrieveCommentsParams;

    #[instrument(skip_all, fields(block_id = %params.block_id))]
    async fn execute(params: RetrieveCommentsParams, service: &NotionService) -> CallToolResult {
        info!("Retrieve comments tool called");
        let block_id = try_tool!(require_id("block_id", &params.block_id));
        let page = try_tool!(pagination(params.start_cursor, params.page_size));
        service
            .respond_with_note(
                NotionRequest::ListComments { block_id, page },
                params.format,
                Some(RETRIEVE_COMMENTS_NOTE),
            )
            .await
    }
}
