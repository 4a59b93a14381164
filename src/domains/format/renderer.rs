//! Markdown rendering of Notion pages.
//!
//! A page's content is its tree of blocks. [`MarkdownRenderer`] walks that
//! tree through the [`NotionApi`] (following pagination cursors and nested
//! children) and renders each supported block type to Markdown.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

use super::title::segment_text;
use crate::notion::{NotionApi, NotionError, NotionRequest, Pagination};

/// Maximum page size accepted by the block children endpoint.
const CHILDREN_PAGE_SIZE: u32 = 100;

/// Nesting depth beyond which children are not fetched.
const DEFAULT_MAX_DEPTH: usize = 8;

const INDENT: &str = "  ";

/// Errors raised while rendering a page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Fetching a block's children failed.
    #[error("Failed to fetch children of block {block_id}: {source}")]
    Fetch {
        block_id: String,
        #[source]
        source: NotionError,
    },

    /// The API returned something other than a block list.
    #[error("Malformed block list for {0}")]
    Malformed(String),

    /// The page object has no `id`.
    #[error("Page object has no id")]
    MissingId,
}

/// Renders a page's content to a single text blob.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    async fn render(&self, page_id: &str) -> Result<String, RenderError>;
}

/// Block-tree to Markdown renderer backed by the Notion API.
pub struct MarkdownRenderer {
    api: Arc<dyn NotionApi>,
    max_depth: usize,
}

impl MarkdownRenderer {
    pub fn new(api: Arc<dyn NotionApi>) -> Self {
        Self {
            api,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limit how deep nested children are followed.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Fetch every child of a block, following `next_cursor`.
    async fn fetch_children(&self, block_id: &str) -> Result<Vec<Value>, RenderError> {
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let response = self
                .api
                .send(NotionRequest::ListBlockChildren {
                    block_id: block_id.to_string(),
                    page: Pagination::after(cursor.take(), CHILDREN_PAGE_SIZE),
                })
                .await
                .map_err(|source| RenderError::Fetch {
                    block_id: block_id.to_string(),
                    source,
                })?;

            let results = response
                .get("results")
                .and_then(Value::as_array)
                .ok_or_else(|| RenderError::Malformed(block_id.to_string()))?;
            blocks.extend(results.iter().cloned());

            let has_more = response
                .get("has_more")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            cursor = response
                .get("next_cursor")
                .and_then(Value::as_str)
                .map(str::to_string);

            if !has_more || cursor.is_none() {
                break;
            }
        }

        debug!("Fetched {} child block(s) of {}", blocks.len(), block_id);
        Ok(blocks)
    }

    /// Render all children of `block_id` as a Markdown document.
    fn render_children<'a>(
        &'a self,
        block_id: &'a str,
        depth: usize,
    ) -> BoxFuture<'a, Result<String, RenderError>> {
        Box::pin(async move {
            let blocks = self.fetch_children(block_id).await?;

            let mut out = String::new();
            let mut previous_was_list = false;
            let mut number = 0usize;

            for block in &blocks {
                let kind = block_kind(block);
                number = if kind == "numbered_list_item" { number + 1 } else { 0 };

                let Some(chunk) = self.render_block(block, depth, number).await? else {
                    continue;
                };

                let is_list = is_list_kind(kind);
                if !out.is_empty() {
                    out.push_str(if is_list && previous_was_list { "\n" } else { "\n\n" });
                }
                out.push_str(&chunk);
                previous_was_list = is_list;
            }

            Ok(out)
        })
    }

    /// Children of a block rendered one level deeper, or empty.
    async fn nested(&self, block: &Value, depth: usize) -> Result<String, RenderError> {
        let has_children = block
            .get("has_children")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if !has_children || depth + 1 > self.max_depth {
            return Ok(String::new());
        }
        match block.get("id").and_then(Value::as_str) {
            Some(id) => self.render_children(id, depth + 1).await,
            None => Ok(String::new()),
        }
    }

    async fn render_block(
        &self,
        block: &Value,
        depth: usize,
        number: usize,
    ) -> Result<Option<String>, RenderError> {
        let kind = block_kind(block);
        let data = block.get(kind).unwrap_or(&Value::Null);
        let text = rich_text_to_markdown(data.get("rich_text"));

        let rendered = match kind {
            "paragraph" => with_indented(text, self.nested(block, depth).await?),
            "heading_1" | "heading_2" | "heading_3" => {
                // Toggleable headings keep their body as children.
                let hashes = match kind {
                    "heading_1" => "#",
                    "heading_2" => "##",
                    _ => "###",
                };
                with_body(format!("{} {}", hashes, text), self.nested(block, depth).await?)
            }
            "bulleted_list_item" => {
                with_indented(format!("- {}", text), self.nested(block, depth).await?)
            }
            "numbered_list_item" => {
                with_indented(format!("{}. {}", number, text), self.nested(block, depth).await?)
            }
            "to_do" => {
                let checked = data.get("checked").and_then(Value::as_bool).unwrap_or(false);
                let mark = if checked { "x" } else { " " };
                with_indented(format!("- [{}] {}", mark, text), self.nested(block, depth).await?)
            }
            "toggle" => {
                let body = self.nested(block, depth).await?;
                format!("<details>\n<summary>{}</summary>\n\n{}\n</details>", text, body)
            }
            "quote" => quoted(&text, &self.nested(block, depth).await?),
            "callout" => {
                let icon = data
                    .get("icon")
                    .and_then(|i| i.get("emoji"))
                    .and_then(Value::as_str)
                    .map(|e| format!("{} ", e))
                    .unwrap_or_default();
                quoted(&format!("{}{}", icon, text), &self.nested(block, depth).await?)
            }
            "code" => {
                let language = data
                    .get("language")
                    .and_then(Value::as_str)
                    .filter(|l| *l != "plain text")
                    .unwrap_or("");
                let code = rich_text_plain(data.get("rich_text"));
                format!("```{}\n{}\n```", language, code)
            }
            "divider" => "---".to_string(),
            "equation" => {
                let expression = data.get("expression").and_then(Value::as_str).unwrap_or("");
                format!("$$\n{}\n$$", expression)
            }
            "image" => {
                let caption = rich_text_plain(data.get("caption"));
                format!("![{}]({})", caption, file_url(data))
            }
            "video" | "file" | "pdf" | "audio" => {
                let url = file_url(data);
                let caption = rich_text_plain(data.get("caption"));
                let label = if caption.is_empty() { kind.to_string() } else { caption };
                format!("[{}]({})", label, url)
            }
            "bookmark" | "embed" | "link_preview" => {
                let url = data.get("url").and_then(Value::as_str).unwrap_or("");
                let caption = rich_text_plain(data.get("caption"));
                let label = if caption.is_empty() { url.to_string() } else { caption };
                format!("[{}]({})", label, url)
            }
            "child_page" | "child_database" => {
                let title = data.get("title").and_then(Value::as_str).unwrap_or("Untitled");
                let id = block.get("id").and_then(Value::as_str).unwrap_or("");
                format!("[{}]({})", title, notion_url(id))
            }
            "table" => self.render_table(block, data).await?,
            "column_list" | "column" | "synced_block" => self.nested(block, depth).await?,
            _ => {
                debug!("Skipping unsupported block type '{}'", kind);
                return Ok(None);
            }
        };

        Ok(Some(rendered))
    }

    async fn render_table(&self, block: &Value, data: &Value) -> Result<String, RenderError> {
        let Some(id) = block.get("id").and_then(Value::as_str) else {
            return Ok(String::new());
        };
        let rows: Vec<Vec<String>> = self
            .fetch_children(id)
            .await?
            .iter()
            .filter(|row| block_kind(row) == "table_row")
            .map(|row| {
                row.get("table_row")
                    .and_then(|r| r.get("cells"))
                    .and_then(Value::as_array)
                    .map(|cells| {
                        cells
                            .iter()
                            .map(|cell| rich_text_to_markdown(Some(cell)).replace('|', "\\|"))
                            .collect()
                    })
                    .unwrap_or_default()
            })
            .collect();

        // The declared width is never trusted beyond the cells actually present.
        let longest = rows.iter().map(Vec::len).max().unwrap_or(0);
        let width = data
            .get("table_width")
            .and_then(Value::as_u64)
            .map_or(longest, |w| usize::try_from(w).map_or(longest, |w| w.min(longest)));
        if width == 0 || rows.is_empty() {
            return Ok(String::new());
        }

        let line = |cells: &[String]| {
            let mut padded: Vec<&str> = cells.iter().map(String::as_str).collect();
            padded.resize(width, "");
            format!("| {} |", padded.join(" | "))
        };

        let mut lines = vec![line(rows[0].as_slice()), format!("|{}", " --- |".repeat(width))];
        lines.extend(rows[1..].iter().map(|r| line(r.as_slice())));
        Ok(lines.join("\n"))
    }
}

#[async_trait]
impl PageRenderer for MarkdownRenderer {
    #[instrument(skip(self))]
    async fn render(&self, page_id: &str) -> Result<String, RenderError> {
        self.render_children(page_id, 0).await
    }
}

fn block_kind(block: &Value) -> &str {
    block.get("type").and_then(Value::as_str).unwrap_or("unsupported")
}

fn is_list_kind(kind: &str) -> bool {
    matches!(kind, "bulleted_list_item" | "numbered_list_item" | "to_do")
}

/// Append `body` below `head` as separate blocks.
fn with_body(head: String, body: String) -> String {
    if body.is_empty() {
        head
    } else {
        format!("{}\n\n{}", head, body)
    }
}

/// Append `children` below `head`, indented one level.
fn with_indented(head: String, children: String) -> String {
    if children.is_empty() {
        return head;
    }
    let indented: Vec<String> = children
        .lines()
        .map(|l| if l.is_empty() { String::new() } else { format!("{}{}", INDENT, l) })
        .collect();
    format!("{}\n{}", head, indented.join("\n"))
}

/// Prefix every line of `head` and `children` with `> `.
fn quoted(head: &str, children: &str) -> String {
    let body = if children.is_empty() {
        head.to_string()
    } else {
        format!("{}\n{}", head, children)
    };
    body.lines()
        .map(|l| if l.is_empty() { ">".to_string() } else { format!("> {}", l) })
        .collect::<Vec<_>>()
        .join("\n")
}

fn file_url(data: &Value) -> &str {
    let source = data.get("type").and_then(Value::as_str).unwrap_or("external");
    data.get(source)
        .and_then(|s| s.get("url"))
        .and_then(Value::as_str)
        .unwrap_or("")
}

fn notion_url(id: &str) -> String {
    format!("https://www.notion.so/{}", id.replace('-', ""))
}

/// Plain text of a rich-text array, without annotations.
fn rich_text_plain(segments: Option<&Value>) -> String {
    segments
        .and_then(Value::as_array)
        .map(|segs| segs.iter().map(segment_text).collect())
        .unwrap_or_default()
}

/// Render a rich-text array to Markdown, honouring annotations and links.
pub fn rich_text_to_markdown(segments: Option<&Value>) -> String {
    segments
        .and_then(Value::as_array)
        .map(|segs| segs.iter().map(segment_to_markdown).collect())
        .unwrap_or_default()
}

fn segment_to_markdown(segment: &Value) -> String {
    let text = segment_text(segment);
    if text.is_empty() {
        return String::new();
    }

    let annotations = segment.get("annotations");
    let flag = |name: &str| {
        annotations
            .and_then(|a| a.get(name))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    };

    let mut out = text.to_string();
    if flag("code") {
        out = format!("`{}`", out);
    }
    if flag("bold") {
        out = format!("**{}**", out);
    }
    if flag("italic") {
        out = format!("_{}_", out);
    }
    if flag("strikethrough") {
        out = format!("~~{}~~", out);
    }

    let href = segment.get("href").and_then(Value::as_str).or_else(|| {
        segment
            .get("text")
            .and_then(|t| t.get("link"))
            .and_then(|l| l.get("url"))
            .and_then(Value::as_str)
    });
    match href {
        Some(url) => format!("[{}]({})", out, url),
        None => out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notion::testing::RecordingApi;
    use serde_json::json;

    fn text(content: &str) -> Value {
        json!([{ "type": "text", "text": { "content": content }, "plain_text": content }])
    }

    fn block(id: &str, kind: &str, data: Value, has_children: bool) -> Value {
        json!({ "object": "block", "id": id, "type": kind, kind: data, "has_children": has_children })
    }

    fn list(results: Vec<Value>) -> Value {
        json!({ "object": "list", "results": results, "has_more": false, "next_cursor": null })
    }

    fn children_of(request: &NotionRequest) -> &str {
        match request {
            NotionRequest::ListBlockChildren { block_id, .. } => block_id,
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_renders_headings_lists_and_code() {
        let api = RecordingApi::new(|req| {
            assert_eq!(children_of(req), "page");
            Ok(list(vec![
                block("b1", "heading_1", json!({ "rich_text": text("Plan") }), false),
                block("b2", "paragraph", json!({ "rich_text": text("Intro") }), false),
                block("b3", "bulleted_list_item", json!({ "rich_text": text("one") }), false),
                block("b4", "bulleted_list_item", json!({ "rich_text": text("two") }), false),
                block("b5", "numbered_list_item", json!({ "rich_text": text("first") }), false),
                block("b6", "numbered_list_item", json!({ "rich_text": text("second") }), false),
                block("b7", "to_do", json!({ "rich_text": text("ship"), "checked": true }), false),
                block(
                    "b8",
                    "code",
                    json!({ "rich_text": text("fn main() {}"), "language": "rust" }),
                    false,
                ),
                block("b9", "divider", json!({}), false),
            ]))
        });

        let renderer = MarkdownRenderer::new(api.clone());
        let md = renderer.render("page").await.unwrap();

        assert_eq!(
            md,
            "# Plan\n\nIntro\n\n- one\n- two\n1. first\n2. second\n- [x] ship\n\n```rust\nfn main() {}\n```\n\n---"
        );
        assert_eq!(api.request_count(), 1);
    }

    #[tokio::test]
    async fn test_nested_children_are_indented() {
        let api = RecordingApi::new(|req| match children_of(req) {
            "page" => Ok(list(vec![block(
                "parent",
                "bulleted_list_item",
                json!({ "rich_text": text("outer") }),
                true,
            )])),
            "parent" => Ok(list(vec![block(
                "child",
                "bulleted_list_item",
                json!({ "rich_text": text("inner") }),
                false,
            )])),
            other => panic!("unexpected block {}", other),
        });

        let md = MarkdownRenderer::new(api).render("page").await.unwrap();
        assert_eq!(md, "- outer\n  - inner");
    }

    #[tokio::test]
    async fn test_depth_limit_stops_fetching() {
        let api = RecordingApi::new(|_| {
            Ok(list(vec![block(
                "again",
                "bulleted_list_item",
                json!({ "rich_text": text("loop") }),
                true,
            )]))
        });

        let renderer = MarkdownRenderer::new(api.clone()).with_max_depth(2);
        renderer.render("page").await.unwrap();
        assert_eq!(api.request_count(), 3);
    }

    #[tokio::test]
    async fn test_follows_pagination_cursor() {
        let api = RecordingApi::new(|req| match req {
            NotionRequest::ListBlockChildren { page, .. } if page.start_cursor.is_none() => Ok(json!({
                "object": "list",
                "results": [block("a", "paragraph", json!({ "rich_text": text("first") }), false)],
                "has_more": true,
                "next_cursor": "cursor-2"
            })),
            NotionRequest::ListBlockChildren { page, .. } => {
                assert_eq!(page.start_cursor.as_deref(), Some("cursor-2"));
                assert_eq!(page.page_size, Some(CHILDREN_PAGE_SIZE));
                Ok(list(vec![block("b", "paragraph", json!({ "rich_text": text("second") }), false)]))
            }
            other => panic!("unexpected request {:?}", other),
        });

        let md = MarkdownRenderer::new(api.clone()).render("page").await.unwrap();
        assert_eq!(md, "first\n\nsecond");
        assert_eq!(api.request_count(), 2);
    }

    #[tokio::test]
    async fn test_table_rendering() {
        let api = RecordingApi::new(|req| match children_of(req) {
            "page" => Ok(list(vec![block(
                "tbl",
                "table",
                json!({ "table_width": 2, "has_column_header": true }),
                true,
            )])),
            "tbl" => Ok(list(vec![
                block("r1", "table_row", json!({ "cells": [text("Name"), text("Qty")] }), false),
                block("r2", "table_row", json!({ "cells": [text("Apple"), text("3")] }), false),
            ])),
            other => panic!("unexpected block {}", other),
        });

        let md = MarkdownRenderer::new(api).render("page").await.unwrap();
        assert_eq!(md, "| Name | Qty |\n| --- | --- |\n| Apple | 3 |");
    }

    #[tokio::test]
    async fn test_table_width_capped_by_cells() {
        let api = RecordingApi::new(|req| match children_of(req) {
            "page" => Ok(list(vec![block(
                "tbl",
                "table",
                json!({ "table_width": 4_000_000_000u64 }),
                true,
            )])),
            "tbl" => Ok(list(vec![block(
                "r1",
                "table_row",
                json!({ "cells": [text("a"), text("b")] }),
                false,
            )])),
            other => panic!("unexpected block {}", other),
        });

        let md = MarkdownRenderer::new(api).render("page").await.unwrap();
        assert_eq!(md, "| a | b |\n| --- | --- |");
    }

    #[tokio::test]
    async fn test_toggleable_heading_keeps_body() {
        let api = RecordingApi::new(|req| match children_of(req) {
            "page" => Ok(list(vec![
                block(
                    "h",
                    "heading_2",
                    json!({ "rich_text": text("Section"), "is_toggleable": true }),
                    true,
                ),
                block("h3", "heading_3", json!({ "rich_text": text("Plain") }), false),
            ])),
            "h" => Ok(list(vec![block(
                "p",
                "paragraph",
                json!({ "rich_text": text("hidden body") }),
                false,
            )])),
            other => panic!("unexpected block {}", other),
        });

        let md = MarkdownRenderer::new(api.clone()).render("page").await.unwrap();
        assert_eq!(md, "## Section\n\nhidden body\n\n### Plain");
        assert_eq!(api.request_count(), 2);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_reported() {
        let api = RecordingApi::failing("Could not find block");
        let err = MarkdownRenderer::new(api).render("missing").await.unwrap_err();
        assert!(matches!(err, RenderError::Fetch { ref block_id, .. } if block_id == "missing"));
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let api = RecordingApi::ok(json!({ "object": "page" }));
        let err = MarkdownRenderer::new(api).render("p").await.unwrap_err();
        assert!(matches!(err, RenderError::Malformed(_)));
    }

    #[test]
    fn test_rich_text_annotations() {
        let segments = json!([
            { "plain_text": "bold", "annotations": { "bold": true } },
            { "plain_text": " and " },
            { "plain_text": "code", "annotations": { "code": true } },
            { "plain_text": " ", "annotations": {} },
            { "plain_text": "link", "href": "https://example.com" }
        ]);
        assert_eq!(
            rich_text_to_markdown(Some(&segments)),
            "**bold** and `code` [link](https://example.com)"
        );
    }

    #[test]
    fn test_quote_prefixes_every_line() {
        assert_eq!(quoted("said", "more\n\nlines"), "> said\n> more\n>\n> lines");
    }
}
