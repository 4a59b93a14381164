//! Delete block tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::format::ResponseFormat;
use crate::domains::tools::definitions::common::{require_id, try_tool};
use crate::domains::tools::{NotionService, NotionTool};
use crate::notion::NotionRequest;

/// Parameters for the delete block tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteBlockParams {
    /// ID of the block to delete (archive).
    pub block_id: String,

    /// Response format: "json" (default) or "markdown".
    #[serde(default)]
    pub format: ResponseFormat,
}

/// Delete block tool - moves a block to the trash.
pub struct DeleteBlockTool;

#[async_trait]
impl NotionTool for DeleteBlockTool {
    const NAME: &'static str = "notion_delete_block";
    const DESCRIPTION: &'static str = "Delete (archive) a Notion block.";
    type Params = DeleteBlockParams;

    #[instrument(skip_all, fields(block_id = %params.block_id))]
    async fn execute(params: DeleteBlockParams, service: &NotionService) -> CallToolResult {
        info!("Delete block tool called");
        let block_id = try_tool!(require_id("block_id", &params.block_id));
        service
            .respond(NotionRequest::DeleteBlock { block_id }, params.format)
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
    async fn test_delete_block() {
        let api = RecordingApi::ok(json!({ "object": "block", "id": "b1", "archived": true }));
        let result = DeleteBlockTool::execute(
            params::<DeleteBlockTool>(json!({ "block_id": "b1" })),
            &service(api.clone()),
        )
        .await;
        assert_eq!(payload(&result)["archived"], true);
        assert_eq!(api.requests(), vec![NotionRequest::DeleteBlock { block_id: "b1".to_string() }]);
    }

    #[tokio::test]
    async fn test_missing_token() {
        let result = DeleteBlockTool::execute(
            params::<DeleteBlockTool>(json!({ "block_id": "b1" })),
            &unconfigured(),
        )
        .await;
        assert_not_initialized(&result);
    }
}
