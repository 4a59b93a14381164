//! Update page properties tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::domains::format::ResponseFormat;
use crate::domains::tools::definitions::common::{insert_if_present, require_id, try_tool};
use crate::domains::tools::{NotionService, NotionTool};
use crate::notion::NotionRequest;

/// Parameters for the update page properties tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdatePagePropertiesParams {
    /// ID of the page to update.
    pub page_id: String,

    /// Property values to change, keyed by property name or id.
    pub properties: Value,

    /// New page icon.
    #[serde(default)]
    pub icon: Option<Value>,

    /// New page cover.
    #[serde(default)]
    pub cover: Option<Value>,

    /// Set to true to archive (trash) the page, false to restore it.
    #[serde(default)]
    pub archived: Option<bool>,

    /// Response format: "json" (default) or "markdown".
    #[serde(default)]
    pub format: ResponseFormat,
}

/// Update page properties tool.
pub struct UpdatePagePropertiesTool;

#[async_trait]
impl NotionTool for UpdatePagePropertiesTool {
    const NAME: &'static str = "notion_update_page_properties";
    const DESCRIPTION: &'static str =
        "Update the properties of a Notion page, optionally changing its icon, cover or archived state.";
    type Params = UpdatePagePropertiesParams;

    #[instrument(skip_all, fields(page_id = %params.page_id))]
    async fn execute(params: UpdatePagePropertiesParams, service: &NotionService) -> CallToolResult {
        info!("Update page properties tool called");
        let page_id = try_tool!(require_id("page_id", &params.page_id));

        let mut body = Map::new();
        body.insert("properties".to_string(), params.properties);
        insert_if_present(&mut body, "icon", params.icon);
        insert_if_present(&mut body, "cover", params.cover);
        insert_if_present(&mut body, "archived", params.archived.map(Value::Bool));

        service
            .respond(NotionRequest::UpdatePage { page_id, body }, params.format)
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
    async fn test_update_sends_only_given_fields() {
        let api = RecordingApi::ok(json!({ "object": "page", "id": "p1" }));
        let result = UpdatePagePropertiesTool::execute(
            params::<UpdatePagePropertiesTool>(json!({
                "page_id": "p1",
                "properties": { "Done": { "checkbox": true } },
                "archived": false
            })),
            &service(api.clone()),
        )
        .await;

        assert!(!is_error(&result));
        match &api.requests()[0] {
            NotionRequest::UpdatePage { page_id, body } => {
                assert_eq!(page_id, "p1");
                assert_eq!(
                    Value::Object(body.clone()),
                    json!({ "properties": { "Done": { "checkbox": true } }, "archived": false })
                );
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_api_error_is_reported() {
        let api = RecordingApi::failing("Could not find page with ID: p1");
        let result = UpdatePagePropertiesTool::execute(
            params::<UpdatePagePropertiesTool>(json!({ "page_id": "p1", "properties": {} })),
            &service(api),
        )
        .await;
        assert!(is_error(&result));
        assert_eq!(payload(&result), json!({ "error": "Could not find page with ID: p1" }));
    }
}
