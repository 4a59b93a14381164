//! Save content tool definition.
//!
//! Appends an arbitrary number of blocks to a page. Notion accepts at most
//! 100 children per append call, so the blocks are sent in consecutive
//! chunks, one call after the other.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::domains::format::ResponseFormat;
use crate::domains::tools::definitions::common::{require_id, success_json, try_tool};
use crate::domains::tools::{NotionService, NotionTool, ToolError};
use crate::notion::NotionRequest;

/// Largest number of children Notion accepts in one append call.
pub const APPEND_CHUNK_SIZE: usize = 100;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the save content tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SaveContentParams {
    /// ID of the page to append content to.
    pub page_id: String,

    /// Content blocks to append, in order.
    pub children: Vec<Value>,

    /// Response format: "json" (default) or "markdown".
    #[serde(default)]
    pub format: ResponseFormat,
}

// ============================================================================
// Output Structure
// ============================================================================

/// One response per appended chunk, in order.
#[derive(Debug, Serialize)]
struct SaveContentResult {
    success: bool,
    results: Vec<Value>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Save content tool - appends blocks to a page in chunks of 100.
pub struct SaveContentTool;

impl SaveContentTool {
    async fn append_chunks(
        page_id: &str,
        children: Vec<Value>,
        service: &NotionService,
    ) -> Result<Vec<Value>, ToolError> {
        let total = children.len().div_ceil(APPEND_CHUNK_SIZE);
        let mut results = Vec::with_capacity(total);

        for (index, chunk) in children.chunks(APPEND_CHUNK_SIZE).enumerate() {
            debug!("Appending chunk {}/{} ({} blocks)", index + 1, total, chunk.len());
            let response = service
                .call(NotionRequest::AppendBlockChildren {
                    block_id: page_id.to_string(),
                    children: chunk.to_vec(),
                })
                .await
                .inspect_err(|e| warn!("Chunk {}/{} failed: {}", index + 1, total, e))?;
            results.push(response);
        }

        Ok(results)
    }
}

#[async_trait]
impl NotionTool for SaveContentTool {
    const NAME: &'static str = "notion_save_content_to_page";
    const DESCRIPTION: &'static str = "Save content blocks to a Notion page. Any number of blocks \
        is accepted; they are appended in order in batches of 100.";
    type Params = SaveContentParams;

    #[instrument(skip_all, fields(page_id = %params.page_id, blocks = params.children.len()))]
    async fn execute(params: SaveContentParams, service: &NotionService) -> CallToolResult {
        info!("Save content tool called");
        let page_id = try_tool!(require_id("page_id", &params.page_id));

        let results = try_tool!(Self::append_chunks(&page_id, params.children, service).await);

        let mut formatted = Vec::with_capacity(results.len());
        for response in results {
            formatted.push(service.format(response, params.format).await);
        }

        success_json(&SaveContentResult {
            success: true,
            results: formatted,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
