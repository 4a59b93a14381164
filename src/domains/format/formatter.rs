//! Optional Markdown post-processing of Notion responses.

use std::sync::Arc;

use futures::future::join_all;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::renderer::{PageRenderer, RenderError};
use super::title::extract_title;

/// Output mode requested by the caller through the `format` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Raw Notion JSON (default).
    #[default]
    Json,
    /// Page objects replaced by `{id, title, content}` with Markdown content.
    Markdown,
}

/// A page rendered to Markdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedPage {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl FormattedPage {
    pub fn into_value(self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Classification of a response for formatting purposes.
#[derive(Debug, PartialEq)]
pub enum ResponseShape {
    /// `null`
    Empty,
    /// Top-level JSON array.
    Array(Vec<Value>),
    /// A single object with `"object": "page"`.
    Page(Value),
    /// A paginated `"object": "list"` envelope. `container` keeps every
    /// field except `results`.
    List {
        container: Map<String, Value>,
        results: Vec<Value>,
    },
    /// Anything else; passed through.
    Other(Value),
}

impl ResponseShape {
    pub fn classify(data: Value) -> Self {
        match data {
            Value::Null => Self::Empty,
            Value::Array(items) => Self::Array(items),
            Value::Object(map) if object_kind(&map) == Some("page") => {
                Self::Page(Value::Object(map))
            }
            Value::Object(mut map)
                if object_kind(&map) == Some("list")
                    && map.get("results").is_some_and(Value::is_array) =>
            {
                let results = match map.remove("results") {
                    Some(Value::Array(results)) => results,
                    _ => Vec::new(),
                };
                Self::List {
                    container: map,
                    results,
                }
            }
            other => Self::Other(other),
        }
    }
}

fn object_kind(map: &Map<String, Value>) -> Option<&str> {
    map.get("object").and_then(Value::as_str)
}

fn is_page(value: &Value) -> bool {
    value.get("object").and_then(Value::as_str) == Some("page")
}

/// Applies the Markdown conversion to tool responses.
///
/// Formatting never fails: a page that cannot be rendered is returned as
/// its original JSON, in every response shape.
#[derive(Clone, Default)]
pub struct ResponseFormatter {
    renderer: Option<Arc<dyn PageRenderer>>,
}

impl ResponseFormatter {
    /// A formatter that always passes data through.
    pub fn disabled() -> Self {
        Self { renderer: None }
    }

    pub fn new(renderer: Arc<dyn PageRenderer>) -> Self {
        Self {
            renderer: Some(renderer),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.renderer.is_some()
    }

    pub async fn format(&self, data: Value, mode: ResponseFormat) -> Value {
        let Some(renderer) = self.renderer.as_deref() else {
            return data;
        };
        if mode == ResponseFormat::Json {
            return data;
        }

        match ResponseShape::classify(data) {
            ResponseShape::Empty => Value::Null,
            ResponseShape::Array(items) => Value::Array(render_all(renderer, items).await),
            ResponseShape::Page(page) => render_or_keep(renderer, page).await,
            ResponseShape::List {
                mut container,
                results,
            } => {
                let results = render_all(renderer, results).await;
                container.insert("results".to_string(), Value::Array(results));
                Value::Object(container)
            }
            ResponseShape::Other(other) => {
                debug!("Response is not a page or list, returning unchanged");
                other
            }
        }
    }
}

/// Render every page element concurrently, preserving order.
async fn render_all(renderer: &dyn PageRenderer, items: Vec<Value>) -> Vec<Value> {
    join_all(items.into_iter().map(|item| async move {
        if is_page(&item) {
            render_or_keep(renderer, item).await
        } else {
            item
        }
    }))
    .await
}

async fn render_or_keep(renderer: &dyn PageRenderer, page: Value) -> Value {
    match render_page(renderer, &page).await {
        Ok(formatted) => formatted.into_value(),
        Err(e) => {
            warn!("Markdown conversion failed, keeping original page: {}", e);
            page
        }
    }
}

/// Render a page object to a [`FormattedPage`].
pub async fn render_page(
    renderer: &dyn PageRenderer,
    page: &Value,
) -> Result<FormattedPage, RenderError> {
    let id = page
        .get("id")
        .and_then(Value::as_str)
        .ok_or(RenderError::MissingId)?;
    let content = renderer.render(id).await?;

    Ok(FormattedPage {
        id: id.to_string(),
        title: extract_title(page),
        content,
        url: page.get("url").and_then(Value::as_str).map(str::to_string),
    })
}
