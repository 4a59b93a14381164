//! Retrieve bot user tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::format::ResponseFormat;
use crate::domains::tools::{NotionService, NotionTool};
use crate::notion::NotionRequest;

/// Parameters for the retrieve bot user tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct RetrieveBotUserParams {
    /// Response format: "json" (default) or "markdown".
    #[serde(default)]
    pub format: ResponseFormat,
}

/// Retrieve bot user tool - the integration's own bot user.
pub struct RetrieveBotUserTool;

#[async_trait]
impl NotionTool for RetrieveBotUserTool {
    const NAME: &'static str = "notion_retrieve_bot_user";
    const DESCRIPTION: &'static str =
        "Retrieve the bot user of the current integration, including its owner and workspace.";
    type Params = RetrieveBotUserParams;

    #[instrument(skip_all)]
    async fn execute(params: RetrieveBotUserParams, service: &NotionService) -> CallToolResult {
        info!("Retrieve bot user tool called");
        service
            .respond(NotionRequest::RetrieveBotUser, params.format)
            .await
    }
}
