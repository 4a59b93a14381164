//! Export to Markdown tool definition.
//!
//! Renders a page's block tree to Markdown and either returns it inline or
//! writes `<page_id>.md` into a validated directory.

use std::path::PathBuf;

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::core::security::validate_export_dir;
use crate::domains::format::render_page;
use crate::domains::tools::definitions::common::{require_id, success_json, try_tool};
use crate::domains::tools::{NotionService, NotionTool, ToolError};
use crate::notion::NotionRequest;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the export tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExportMarkdownParams {
    /// ID of the page to export.
    pub page_id: String,

    /// Existing directory to write `<page_id>.md` into. Omit to return the
    /// Markdown inline.
    #[serde(default)]
    pub output_path: Option<String>,
}

// ============================================================================
// Output Structure
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ExportResult {
    Inline {
        success: bool,
        title: String,
        content: String,
    },
    Written {
        success: bool,
        message: String,
        path: String,
    },
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Export tool - renders a page to Markdown.
pub struct ExportMarkdownTool;

impl ExportMarkdownTool {
    /// File name for an exported page.
    fn file_name(page_id: &str) -> String {
        let safe: String = page_id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        format!("{}.md", safe)
    }

    async fn write(
        dir: &str,
        page_id: &str,
        content: &str,
        service: &NotionService,
    ) -> Result<PathBuf, ToolError> {
        let dir = validate_export_dir(dir, &service.config().security).map_err(|e| {
            warn!("Export path rejected: {}", e);
            ToolError::export(format!("Path security validation failed: {}", e))
        })?;
        let path = dir.join(Self::file_name(page_id));
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| ToolError::export(format!("Failed to write '{}': {}", path.display(), e)))?;
        Ok(path)
    }
}

#[async_trait]
impl NotionTool for ExportMarkdownTool {
    const NAME: &'static str = "notion_export_to_markdown";
    const DESCRIPTION: &'static str = "Export a Notion page and its nested blocks as Markdown. \
        Returns the Markdown, or writes <page_id>.md into output_path when given.";
    type Params = ExportMarkdownParams;

    #[instrument(skip_all, fields(page_id = %params.page_id))]
    async fn execute(params: ExportMarkdownParams, service: &NotionService) -> CallToolResult {
        info!("Export to markdown tool called");
        let page_id = try_tool!(require_id("page_id", &params.page_id));
        let renderer = try_tool!(service.renderer());

        let page = try_tool!(
            service
                .call(NotionRequest::RetrievePage {
                    page_id: page_id.clone()
                })
                .await
        );
        let rendered = try_tool!(render_page(renderer, &page).await);

        let Some(dir) = params.output_path else {
            return success_json(&ExportResult::Inline {
                success: true,
                title: rendered.title,
                content: rendered.content,
            });
        };

        let document = format!("# {}\n\n{}\n", rendered.title, rendered.content);
        let path = try_tool!(Self::write(&dir, &page_id, &document, service).await);
        info!("Exported page {} to {}", page_id, path.display());

        success_json(&ExportResult::Written {
            success: true,
            message: format!("Page exported to {}", path.display()),
            path: path.display().to_string(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::format::{PageRenderer, RenderError};
    use crate::domains::tools::definitions::testing::*;
    use crate::notion::testing::RecordingApi;
    use serde_json::json;
    use std::sync::Arc;
    use tempfile::TempDir;

    struct StaticRenderer;

    #[async_trait]
    impl PageRenderer for StaticRenderer {
        async fn render(&self, _page_id: &str) -> Result<String, RenderError> {
            Ok("- item".to_string())
        }
    }

    fn api() -> Arc<RecordingApi> {
        RecordingApi::ok(json!({
            "object": "page",
            "id": "page-1",
            "properties": { "Name": { "type": "title", "title": [{ "plain_text": "Notes" }] } }
        }))
    }

    #[tokio::test]
    async fn test_inline_export_ignores_markdown_flag() {
        let svc = service(api()).with_renderer(Arc::new(StaticRenderer));
        let result = ExportMarkdownTool::execute(
            params::<ExportMarkdownTool>(json!({ "page_id": "page-1" })),
            &svc,
        )
        .await;

        assert!(!is_error(&result));
        assert_eq!(
            payload(&result),
            json!({ "success": true, "title": "Notes", "content": "- item" })
        );
    }

    #[tokio::test]
    async fn test_export_writes_file() {
        let dir = TempDir::new().unwrap();
        let svc = service(api()).with_renderer(Arc::new(StaticRenderer));
        let result = ExportMarkdownTool::execute(
            params::<ExportMarkdownTool>(json!({
                "page_id": "page-1",
                "output_path": dir.path().to_string_lossy()
            })),
            &svc,
        )
        .await;

        assert!(!is_error(&result));
        let written = dir.path().join("page-1.md");
        assert_eq!(std::fs::read_to_string(&written).unwrap(), "# Notes\n\n- item\n");
        let body = payload(&result);
        assert_eq!(body["success"], true);
        assert!(body["path"].as_str().unwrap().ends_with("page-1.md"));
    }

    #[tokio::test]
    async fn test_export_rejects_missing_directory() {
        let dir = TempDir::new().unwrap();
        let svc = service(api()).with_renderer(Arc::new(StaticRenderer));
        let result = ExportMarkdownTool::execute(
            params::<ExportMarkdownTool>(json!({
                "page_id": "page-1",
                "output_path": dir.path().join("nope").to_string_lossy()
            })),
            &svc,
        )
        .await;

        assert!(is_error(&result));
        assert!(payload(&result)["error"].as_str().unwrap().contains("does not exist"));
    }

    #[tokio::test]
    async fn test_render_failure_is_reported() {
        let svc = service(api());
        // The default renderer asks the fake for block children and gets a
        // page object back, which is not a block list.
        let result = ExportMarkdownTool::execute(
            params::<ExportMarkdownTool>(json!({ "page_id": "page-1" })),
            &svc,
        )
        .await;
        assert!(is_error(&result));
    }

    #[tokio::test]
    async fn test_missing_token() {
        let result = ExportMarkdownTool::execute(
            params::<ExportMarkdownTool>(json!({ "page_id": "page-1" })),
            &unconfigured(),
        )
        .await;
        assert_not_initialized(&result);
    }

    #[test]
    fn test_file_name_is_sanitized() {
        assert_eq!(ExportMarkdownTool::file_name("abc-123"), "abc-123.md");
        assert_eq!(ExportMarkdownTool::file_name("../etc/passwd"), "___etc_passwd.md");
    }
}
