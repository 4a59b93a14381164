//! Create comment tool definition.
//!
//! A comment either starts a new thread on a page (`parent`) or replies to
//! an existing discussion (`discussion_id`). Exactly one must be given.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::domains::format::ResponseFormat;
use crate::domains::tools::definitions::common::{insert_if_present, try_tool};
use crate::domains::tools::{NotionService, NotionTool, ToolError};
use crate::notion::NotionRequest;

/// Note attached to comment creation failures.
pub const CREATE_COMMENT_NOTE: &str =
    "Creating comments requires the integration's insert comment capability";

/// Parameters for the create comment tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateCommentParams {
    /// Comment text as a rich-text array.
    pub rich_text: Vec<Value>,

    /// Page to comment on: `{"page_id": ...}`.
    #[serde(default)]
    pub parent: Option<Value>,

    /// Existing discussion thread to reply to.
    #[serde(default)]
    pub discussion_id: Option<String>,

    /// Response format: "json" (default) or "markdown".
    #[serde(default)]
    pub format: ResponseFormat,
}

impl CreateCommentParams {
    /// Build the request body, enforcing that exactly one target is set.
    fn into_body(self) -> Result<Map<String, Value>, ToolError> {
        let parent = self.parent.filter(|p| !p.is_null());
        let discussion_id = self.discussion_id.filter(|d| !d.trim().is_empty());

        match (&parent, &discussion_id) {
            (None, None) => {
                return Err(ToolError::validation(
                    "Either parent or discussion_id is required",
                ));
            }
            (Some(_), Some(_)) => {
                return Err(ToolError::validation(
                    "parent and discussion_id cannot be specified together",
                ));
            }
            _ => {}
        }

        let mut body = Map::new();
        insert_if_present(&mut body, "parent", parent);
        insert_if_present(&mut body, "discussion_id", discussion_id.map(Value::String));
        body.insert("rich_text".to_string(), Value::Array(self.rich_text));
        Ok(body)
    }
}

/// Create comment tool.
pub struct CreateCommentTool;

#[async_trait]
impl NotionTool for CreateCommentTool {
    const NAME: &'static str = "notion_create_comment";
    const DESCRIPTION: &'static str = "Add a comment to a Notion page (parent) or reply to a \
        discussion thread (discussion_id). Exactly one of the two must be given. Requires the \
        integration's insert comment capability.";
    type Params = CreateCommentParams;

    #[instrument(skip_all)]
    async fn execute(params: CreateCommentParams, service: &NotionService) -> CallToolResult {
        info!("Create comment tool called");
        let format = params.format;
        let body = try_tool!(params.into_body());
        service
            .respond_with_note(
                NotionRequest::CreateComment { body },
                format,
                Some(CREATE_COMMENT_NOTE),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::testing::*;
    use crate::notion::testing::RecordingApi;
    use serde_json::json;

    fn text() -> Value {
        json!([{ "type": "text", "text": { "content": "Looks good" } }])
    }

    #[tokio::test]
    async fn test_neither_target_is_rejected() {
        let api = RecordingApi::ok(json!({}));
        let result = CreateCommentTool::execute(
            params::<CreateCommentTool>(json!({ "rich_text": text() })),
            &service(api.clone()),
        )
        .await;

        assert!(is_error(&result));
        assert_eq!(
            payload(&result),
            json!({ "error": "Either parent or discussion_id is required" })
        );
        assert_eq!(api.request_count(), 0);
    }

    #[tokio::test]
    async fn test_both_targets_are_rejected() {
        let api = RecordingApi::ok(json!({}));
        let result = CreateCommentTool::execute(
            params::<CreateCommentTool>(json!({
                "rich_text": text(),
                "parent": { "page_id": "p1" },
                "discussion_id": "d1"
            })),
            &service(api.clone()),
        )
        .await;

        assert!(is_error(&result));
        assert_eq!(
            payload(&result),
            json!({ "error": "parent and discussion_id cannot be specified together" })
        );
        assert_eq!(api.request_count(), 0);
    }

    #[tokio::test]
    async fn test_parent_only_is_sent() {
        let api = RecordingApi::ok(json!({ "object": "comment", "id": "c1" }));
        let result = CreateCommentTool::execute(
            params::<CreateCommentTool>(json!({
                "rich_text": text(),
                "parent": { "page_id": "p1" },
                "discussion_id": null
            })),
            &service(api.clone()),
        )
        .await;

        assert!(!is_error(&result));
        assert_eq!(
            api.requests(),
            vec![NotionRequest::CreateComment {
                body: json!({ "parent": { "page_id": "p1" }, "rich_text": text() })
                    .as_object()
                    .unwrap()
                    .clone()
            }]
        );
    }

    #[tokio::test]
    async fn test_discussion_only_is_sent() {
        let api = RecordingApi::ok(json!({ "object": "comment", "id": "c2" }));
        CreateCommentTool::execute(
            params::<CreateCommentTool>(json!({ "rich_text": text(), "discussion_id": "d1" })),
            &service(api.clone()),
        )
        .await;

        match &api.requests()[0] {
            NotionRequest::CreateComment { body } => {
                assert_eq!(body["discussion_id"], "d1");
                assert!(!body.contains_key("parent"));
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_api_failure_has_note() {
        let api = RecordingApi::failing("Insufficient permissions for this endpoint.");
        let result = CreateCommentTool::execute(
            params::<CreateCommentTool>(json!({ "rich_text": text(), "discussion_id": "d1" })),
            &service(api),
        )
        .await;
        assert_eq!(payload(&result)["note"], CREATE_COMMENT_NOTE);
    }
}
