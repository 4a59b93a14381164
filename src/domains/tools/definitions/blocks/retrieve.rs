//! Retrieve block tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::format::ResponseFormat;
use crate::domains::tools::definitions::common::{require_id, try_tool};
use crate::domains::tools::{NotionService, NotionTool};
use crate::notion::NotionRequest;

/// Parameters for the retrieve block tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RetrieveBlockParams {
    /// ID of the block to retrieve.
    pub block_id: String,

    /// Response format: "json" (default) or "markdown".
    #[serde(default)]
    pub format: ResponseFormat,
}

/// Retrieve block tool.
pub struct RetrieveBlockTool;

#[async_trait]
impl NotionTool for RetrieveBlockTool {
    const NAME: &'static str = "notion_retrieve_block";
    const DESCRIPTION: &'static str = "Retrieve a single Notion block by ID.";
    type Params = RetrieveBlockParams;

    #[instrument(skip_all, fields(block_id = %params.block_id))]
    async fn execute(params: RetrieveBlockParams, service: &NotionService) -> CallToolResult {
        info!("Retrieve block tool called");
        let block_id = try_tool!(require_id("block_id", &params.block_id));
        service
            .respond(NotionRequest::RetrieveBlock { block_id }, params.format)
            .await
    }
}
