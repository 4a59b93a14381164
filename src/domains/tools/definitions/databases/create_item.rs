//! Create database item tool definition.
//!
//! A convenience over page creation: the parent is always the given
//! database.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::{info, instrument};

use crate::domains::format::ResponseFormat;
use crate::domains::tools::definitions::common::{insert_if_present, require_id, try_tool};
use crate::domains::tools::{NotionService, NotionTool};
use crate::notion::NotionRequest;

/// Parameters for the create database item tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateDatabaseItemParams {
    /// ID of the database that receives the new row.
    pub database_id: String,

    /// Property values of the new row, matching the database schema.
    pub properties: Value,

    /// Content blocks of the new row's page.
    #[serde(default)]
    pub children: Option<Vec<Value>>,

    /// Row page icon.
    #[serde(default)]
    pub icon: Option<Value>,

    /// Row page cover.
    #[serde(default)]
    pub cover: Option<Value>,

    /// Response format: "json" (default) or "markdown".
    #[serde(default)]
    pub format: ResponseFormat,
}

/// Create database item tool - adds a row to a database.
pub struct CreateDatabaseItemTool;

#[async_trait]
impl NotionTool for CreateDatabaseItemTool {
    const NAME: &'static str = "notion_create_database_item";
    const DESCRIPTION: &'static str = "Add a new item (row) to a Notion database.";
    type Params = CreateDatabaseItemParams;

    #[instrument(skip_all, fields(database_id = %params.database_id))]
    async fn execute(params: CreateDatabaseItemParams, service: &NotionService) -> CallToolResult {
        info!("Create database item tool called");
        let database_id = try_tool!(require_id("database_id", &params.database_id));

        let mut body = Map::new();
        body.insert("parent".to_string(), json!({ "database_id": database_id }));
        body.insert("properties".to_string(), params.properties);
        insert_if_present(&mut body, "children", params.children.map(Value::Array));
        insert_if_present(&mut body, "icon", params.icon);
        insert_if_present(&mut body, "cover", params.cover);

        service
            .respond(NotionRequest::CreatePage { body }, params.format)
            .await
    }
}
