//! Query database tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::domains::format::ResponseFormat;
use crate::domains::tools::definitions::common::{
    insert_if_present, pagination, require_id, try_tool,
};
use crate::domains::tools::{NotionService, NotionTool};
use crate::notion::NotionRequest;

/// Parameters for the query database tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QueryDatabaseParams {
    /// ID of the database to query.
    pub database_id: String,

    /// Notion filter object.
    #[serde(default)]
    pub filter: Option<Value>,

    /// Array of sort objects.
    #[serde(default)]
    pub sorts: Option<Vec<Value>>,

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

/// Query database tool - filters and sorts database rows.
pub struct QueryDatabaseTool;

#[async_trait]
impl NotionTool for QueryDatabaseTool {
    const NAME: &'static str = "notion_query_database";
    const DESCRIPTION: &'static str = "Query a Notion database with optional filter and sorts. \
        With format=markdown (when enabled) each result page is rendered to Markdown.";
    type Params = QueryDatabaseParams;

    #[instrument(skip_all, fields(database_id = %params.database_id))]
    async fn execute(params: QueryDatabaseParams, service: &NotionService) -> CallToolResult {
        info!("Query database tool called");
        let database_id = try_tool!(require_id("database_id", &params.database_id));
        let page = try_tool!(pagination(params.start_cursor, params.page_size));

        let mut body = Map::new();
        insert_if_present(&mut body, "filter", params.filter);
        insert_if_present(&mut body, "sorts", params.sorts.map(Value::Array));

        service
            .respond(
                NotionRequest::QueryDatabase {
                    database_id,
                    body,
                    page,
                },
                params.format,
            )
            .await
    }
}
