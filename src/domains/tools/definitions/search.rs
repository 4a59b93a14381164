//! Search tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::domains::format::ResponseFormat;
use crate::domains::tools::definitions::common::{insert_if_present, pagination, try_tool};
use crate::domains::tools::{NotionService, NotionTool};
use crate::notion::NotionRequest;

/// Parameters for the search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Text to match against page and database titles. Omit to list everything shared with the integration.
    #[serde(default)]
    pub query: Option<String>,

    /// Restrict results, e.g. `{"property": "object", "value": "page"}`.
    #[serde(default)]
    pub filter: Option<Value>,

    /// Sort order, e.g. `{"direction": "descending", "timestamp": "last_edited_time"}`.
    #[serde(default)]
    pub sort: Option<Value>,

    /// Cursor from a previous response's `next_cursor`.
    #[serde(default)]
    pub start_cursor: Option<String>,

    /// Number of results to return (1-100).
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Response format: "json" (default) or "markdown".
    #[serde(default)]
    pub format: ResponseFormat,
}

/// Search tool - searches pages and databases by title.
pub struct SearchTool;

#[async_trait]
impl NotionTool for SearchTool {
    const NAME: &'static str = "notion_search";
    const DESCRIPTION: &'static str = "Search Notion pages and databases shared with the \
        integration by title. With format=markdown (when enabled) matching pages are rendered to Markdown.";
    type Params = SearchParams;

    #[instrument(skip_all, fields(query = params.query.as_deref().unwrap_or("")))]
    async fn execute(params: SearchParams, service: &NotionService) -> CallToolResult {
        info!("Search tool called");
        let page = try_tool!(pagination(params.start_cursor, params.page_size));

        let mut body = Map::new();
        insert_if_present(&mut body, "query", params.query.map(Value::String));
        insert_if_present(&mut body, "filter", params.filter);
        insert_if_present(&mut body, "sort", params.sort);

        service
            .respond(NotionRequest::Search { body, page }, params.format)
            .await
    }
}
