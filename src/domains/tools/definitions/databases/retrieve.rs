//! Retrieve database tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::format::ResponseFormat;
use crate::domains::tools::definitions::common::{require_id, try_tool};
use crate::domains::tools::{NotionService, NotionTool};
use crate::notion::NotionRequest;

/// Parameters for the retrieve database tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RetrieveDatabaseParams {
    /// ID of the database to retrieve.
    pub database_id: String,

    /// Response format: "json" (default) or "markdown".
    #[serde(default)]
    pub format: ResponseFormat,
}

/// Retrieve database tool - returns a database's schema and metadata.
pub struct RetrieveDatabaseTool;

#[async_trait]
impl NotionTool for RetrieveDatabaseTool {
    const NAME: &'static str = "notion_retrieve_database";
    const DESCRIPTION: &'static str = "Retrieve a Notion database's title and property schema.";
    type Params = RetrieveDatabaseParams;

    #[instrument(skip_all, fields(database_id = %params.database_id))]
    async fn execute(params: RetrieveDatabaseParams, service: &NotionService) -> CallToolResult {
        info!("Retrieve database tool called");
        let database_id = try_tool!(require_id("database_id", &params.database_id));
        service
            .respond(NotionRequest::RetrieveDatabase { database_id }, params.format)
            .await
    }
}
