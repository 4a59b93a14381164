//! Create page tool definition.

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

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the create page tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreatePageParams {
    /// Parent of the new page: `{"page_id": ...}` or `{"database_id": ...}`.
    pub parent: Value,

    /// Page properties (title and, under a database, its columns).
    pub properties: Value,

    /// Content blocks of the new page.
    #[serde(default)]
    pub children: Option<Vec<Value>>,

    /// Page icon (emoji or external file object).
    #[serde(default)]
    pub icon: Option<Value>,

    /// Page cover (external file object).
    #[serde(default)]
    pub cover: Option<Value>,

    /// Response format: "json" (default) or "markdown".
    #[serde(default)]
    pub format: ResponseFormat,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Create page tool - creates a page under a page or database.
pub struct CreatePageTool;

impl CreatePageTool {
    fn body(params: CreatePageParams) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert("parent".to_string(), params.parent);
        body.insert("properties".to_string(), params.properties);
        insert_if_present(&mut body, "children", params.children.map(Value::Array));
        insert_if_present(&mut body, "icon", params.icon);
        insert_if_present(&mut body, "cover", params.cover);
        body
    }
}

#[async_trait]
impl NotionTool for CreatePageTool {
    const NAME: &'static str = "notion_create_page";
    const DESCRIPTION: &'static str = "Create a new Notion page under a parent page or database.";
    type Params = CreatePageParams;

    #[instrument(skip_all)]
    async fn execute(params: CreatePageParams, service: &NotionService) -> CallToolResult {
        info!("Create page tool called");
        let format = params.format;
        let request = NotionRequest::CreatePage {
            body: Self::body(params),
        };
        service.respond(request, format).await
    }
}

// ============================================================================
// Tests
// ============================================================================
