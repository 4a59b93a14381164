//! Create database tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::domains::format::ResponseFormat;
use crate::domains::tools::definitions::common::insert_if_present;
use crate::domains::tools::{NotionService, NotionTool};
use crate::notion::NotionRequest;

/// Parameters for the create database tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateDatabaseParams {
    /// Parent page: `{"type": "page_id", "page_id": ...}`.
    pub parent: Value,

    /// Database title as a rich-text array.
    pub title: Vec<Value>,

    /// Property schema, keyed by column name.
    pub properties: Value,

    /// Database icon.
    #[serde(default)]
    pub icon: Option<Value>,

    /// Database cover.
    #[serde(default)]
    pub cover: Option<Value>,

    /// Response format: "json" (default) or "markdown".
    #[serde(default)]
    pub format: ResponseFormat,
}

/// Create database tool - creates an inline database under a page.
pub struct CreateDatabaseTool;

#[async_trait]
impl NotionTool for CreateDatabaseTool {
    const NAME: &'static str = "notion_create_database";
    const DESCRIPTION: &'static str =
        "Create a Notion database under a parent page with the given title and property schema.";
    type Params = CreateDatabaseParams;

    #[instrument(skip_all)]
    async fn execute(params: CreateDatabaseParams, service: &NotionService) -> CallToolResult {
        info!("Create database tool called");
        let mut body = Map::new();
        body.insert("parent".to_string(), params.parent);
        body.insert("title".to_string(), Value::Array(params.title));
        body.insert("properties".to_string(), params.properties);
        insert_if_present(&mut body, "icon", params.icon);
        insert_if_present(&mut body, "cover", params.cover);

        service
            .respond(NotionRequest::CreateDatabase { body }, params.format)
            .await
    }
}
