//! Retrieve user tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::format::ResponseFormat;
use crate::domains::tools::definitions::common::{require_id, try_tool};
use crate::domains::tools::{NotionService, NotionTool};
use crate::notion::NotionRequest;

/// Parameters for the retrieve user tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RetrieveUserParams {
    /// ID of the user to retrieve.
    pub user_id: String,

    /// Response format: "json" (default) or "markdown".
    #[serde(default)]
    pub format: ResponseFormat,
}

/// Retrieve user tool.
pub struct RetrieveUserTool;

#[async_trait]
impl NotionTool for RetrieveUserTool {
    const NAME: &'static str = "notion_retrieve_user";
    const DESCRIPTION: &'static str = "Retrieve a Notion user by ID.";
    type Params = RetrieveUserParams;

    #[instrument(skip_all, fields(user_id = %params.user_id))]
    async fn execute(params: RetrieveUserParams, service: &NotionService) -> CallToolResult {
        info!("Retrieve user tool called");
        let user_id = try_tool!(require_id("user_id", &params.user_id));
        service
            .respond(NotionRequest::RetrieveUser { user_id }, params.format)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::testing::*;
    use crate::notion::testing::RecordingApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_retrieve_user() {
        let api = RecordingApi::ok(json!({ "object": "user", "id": "u1", "type": "person" }));
        let result = RetrieveUserTool::execute(
            params::<RetrieveUserTool>(json!({ "user_id": "u1" })),
            &service(api.clone()),
        )
        .await;
        assert_eq!(payload(&result)["type"], "person");
        assert_eq!(api.requests(), vec![NotionRequest::RetrieveUser { user_id: "u1".to_string() }]);
    }
}
