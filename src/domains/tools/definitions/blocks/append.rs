//! Append block children tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::domains::format::ResponseFormat;
use crate::domains::tools::definitions::common::{require_id, try_tool};
use crate::domains::tools::definitions::pages::APPEND_CHUNK_SIZE;
use crate::domains::tools::{NotionService, NotionTool, ToolError};
use crate::notion::NotionRequest;

/// Parameters for the append block children tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AppendBlockChildrenParams {
    /// ID of the parent block (or page).
    pub block_id: String,

    /// Blocks to append (at most 100).
    pub children: Vec<Value>,

    /// Response format: "json" (default) or "markdown".
    #[serde(default)]
    pub format: ResponseFormat,
}

/// Append block children tool - a single append call.
pub struct AppendBlockChildrenTool;

#[async_trait]
impl NotionTool for AppendBlockChildrenTool {
    const NAME: &'static str = "notion_append_block_children";
    const DESCRIPTION: &'static str = "Append up to 100 child blocks to a Notion block or page. \
        Use notion_save_content_to_page for larger batches.";
    type Params = AppendBlockChildrenParams;

    #[instrument(skip_all, fields(block_id = %params.block_id, blocks = params.children.len()))]
    async fn execute(params: AppendBlockChildrenParams, service: &NotionService) -> CallToolResult {
        info!("Append block children tool called");
        let block_id = try_tool!(require_id("block_id", &params.block_id));
        if params.children.len() > APPEND_CHUNK_SIZE {
            return ToolError::validation(format!(
                "children must contain at most {} blocks; use notion_save_content_to_page for more",
                APPEND_CHUNK_SIZE
            ))
            .into_call_result();
        }
        service
            .respond(
                NotionRequest::AppendBlockChildren {
                    block_id,
                    children: params.children,
                },
                params.format,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::testing::*;
    use crate::notion::testing::RecordingApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_append_forwards_children() {
        let api = RecordingApi::ok(json!({ "object": "list", "results": [] }));
        let child = json!({ "type": "divider", "divider": {} });
        AppendBlockChildrenTool::execute(
            params::<AppendBlockChildrenTool>(json!({ "block_id": "b1", "children": [child.clone()] })),
            &service(api.clone()),
        )
        .await;
        assert_eq!(
            api.requests(),
            vec![NotionRequest::AppendBlockChildren {
                block_id: "b1".to_string(),
                children: vec![child],
            }]
        );
    }

    #[tokio::test]
    async fn test_too_many_children_rejected() {
        let api = RecordingApi::ok(json!({}));
        let params = AppendBlockChildrenParams {
            block_id: "b1".to_string(),
            children: vec![json!({}); 101],
            format: ResponseFormat::Json,
        };
        let result = AppendBlockChildrenTool::execute(params, &service(api.clone())).await;
        assert!(is_error(&result));
        assert_eq!(api.request_count(), 0);
    }
}
