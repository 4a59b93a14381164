//! Update database tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::domains::format::ResponseFormat;
use crate::domains::tools::definitions::common::{insert_if_present, require_id, try_tool};
use crate::domains::tools::{NotionService, NotionTool, ToolError};
use crate::notion::NotionRequest;

/// Parameters for the update database tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateDatabaseParams {
    /// ID of the database to update.
    pub database_id: String,

    /// New title as a rich-text array.
    #[serde(default)]
    pub title: Option<Vec<Value>>,

    /// New description as a rich-text array.
    #[serde(default)]
    pub description: Option<Vec<Value>>,

    /// Property schema changes. Set a property to null to remove it.
    #[serde(default)]
    pub properties: Option<Value>,

    /// Response format: "json" (default) or "markdown".
    #[serde(default)]
    pub format: ResponseFormat,
}

/// Update database tool - changes a database's title, description or schema.
pub struct UpdateDatabaseTool;

#[async_trait]
impl NotionTool for UpdateDatabaseTool {
    const NAME: &'static str = "notion_update_database";
    const DESCRIPTION: &'static str =
        "Update a Notion database's title, description or property schema.";
    type Params = UpdateDatabaseParams;

    #[instrument(skip_all, fields(database_id = %params.database_id))]
    async fn execute(params: UpdateDatabaseParams, service: &NotionService) -> CallToolResult {
        info!("Update database tool called");
        let database_id = try_tool!(require_id("database_id", &params.database_id));

        let mut body = Map::new();
        insert_if_present(&mut body, "title", params.title.map(Value::Array));
        insert_if_present(&mut body, "description", params.description.map(Value::Array));
        insert_if_present(&mut body, "properties", params.properties);
        if body.is_empty() {
            return ToolError::validation(
                "At least one of title, description or properties is required",
            )
            .into_call_result();
        }

        service
            .respond(NotionRequest::UpdateDatabase { database_id, body }, params.format)
            .await
    }
}
