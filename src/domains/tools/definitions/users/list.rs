//! List users tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::format::ResponseFormat;
use crate::domains::tools::definitions::common::{pagination, try_tool};
use crate::domains::tools::{NotionService, NotionTool};
use crate::notion::NotionRequest;

/// Note attached to user listing failures.
pub const LIST_USERS_NOTE: &str =
    "Listing users requires the integration's user information capability";

/// Parameters for the list users tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListUsersParams {
    /// Cursor from a previous response's `next_cursor`.
    #[serde(default)]
    pub start_cursor: Option<String>,

    /// Number of users to return (1-100).
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Response format: "json" (default) or "markdown".
    #[serde(default)]
    pub format: ResponseFormat,
}

/// List users tool - lists the workspace's users and bots.
pub struct ListUsersTool;

#[async_trait]
impl NotionTool for ListUsersTool {
    const NAME: &'static str = "notion_list_all_users";
    const DESCRIPTION: &'static str = "List all users in the Notion workspace. \
        Requires the integration's user information capability.";
    type Params = ListUsersParams;

    #[instrument(skip_all)]
    async fn execute(params: ListUsersParams, service: &NotionService) -> CallToolResult {
        info!("List users tool called");
        let page = try_tool!(pagination(params.start_cursor, params.page_size));
        service
            .respond_with_note(
                NotionRequest::ListUsers { page },
                params.format,
                Some(LIST_USERS_NOTE),
            )
            .await
    }
}
