//! Retrieve block children tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::format::ResponseFormat;
use crate::domains::tools::definitions::common::{pagination, require_id, try_tool};
use crate::domains::tools::{NotionService, NotionTool};
use crate::notion::NotionRequest;

/// Parameters for the retrieve block children tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RetrieveBlockChildrenParams {
    /// ID of the parent block (or page).
    pub block_id: String,

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

/// Retrieve block children tool.
pub struct RetrieveBlockChildrenTool;

#[async_trait]
impl NotionTool for RetrieveBlockChildrenTool {
    const NAME: &'static str = "notion_retrieve_block_children";
    const DESCRIPTION: &'static str = "List the child blocks of a Notion block or page.";
    type Params = RetrieveBlockChildrenParams;

    #[instrument(skip_all, fields(block_id = %params.block_id))]
    async fn execute(params: RetrieveBlockChildrenParams, service: &NotionService) -> CallToolResult {
        info!("Retrieve block children tool called");
        let block_id = try_tool!(require_id("block_id", &params.block_id));
        let page = try_tool!(pagination(params.start_cursor, params.page_size));
        service
            .respond(NotionRequest::ListBlockChildren { block_id, page }, params.format)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::testing::*;
    use crate::notion::Pagination;
    use crate::notion::testing::RecordingApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_children_request() {
        let api = RecordingApi::ok(json!({ "object": "list", "results": [] }));
        RetrieveBlockChildrenTool::execute(
            params::<RetrieveBlockChildrenTool>(json!({ "block_id": "b1", "start_cursor": "next" })),
            &service(api.clone()),
        )
        .await;
        assert_eq!(
            api.requests(),
            vec![NotionRequest::ListBlockChildren {
                block_id: "b1".to_string(),
                page: Pagination::new(Some("next".to_string()), None),
            }]
        );
    }

    #[tokio::test]
    async fn test_zero_page_size_rejected() {
        let api = RecordingApi::ok(json!({}));
        let result = RetrieveBlockChildrenTool::execute(
            params::<RetrieveBlockChildrenTool>(json!({ "block_id": "b1", "page_size": 0 })),
            &service(api.clone()),
        )
        .await;
        assert!(is_error(&result));
        assert_eq!(api.request_count(), 0);
    }
}
