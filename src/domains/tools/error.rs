//! Tool-specific error types.

use rmcp::model::{CallToolResult, Content};
use serde_json::{Value, json};
use thiserror::Error;

use crate::domains::format::RenderError;
use crate::notion::NotionError;

/// Errors that can occur during tool operations.
///
/// None of these escape a tool call: each is turned into an error
/// [`CallToolResult`] carrying `{"error": ..., "note"?: ...}`.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No Notion client is configured.
    #[error("Notion client initialization failed")]
    NotInitialized,

    /// A handler precondition failed before any API call.
    #[error("{0}")]
    Validation(String),

    /// The Notion API call failed.
    #[error("{source}")]
    Api {
        source: NotionError,
        note: Option<&'static str>,
    },

    /// Rendering a page to Markdown failed.
    #[error("{0}")]
    Render(#[from] RenderError),

    /// Writing an export file failed.
    #[error("{0}")]
    Export(String),

    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),
}

impl From<NotionError> for ToolError {
    fn from(source: NotionError) -> Self {
        Self::Api { source, note: None }
    }
}

impl ToolError {
    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new export error.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Attach a capability note to an API error. Other variants are unchanged.
    pub fn with_note(self, note: &'static str) -> Self {
        match self {
            Self::Api { source, .. } => Self::Api {
                source,
                note: Some(note),
            },
            other => other,
        }
    }

    pub fn note(&self) -> Option<&'static str> {
        match self {
            Self::Api { note, .. } => *note,
            _ => None,
        }
    }

    /// The `{error, note?}` object returned to clients.
    pub fn to_payload(&self) -> Value {
        let mut payload = json!({ "error": self.to_string() });
        if let Some(note) = self.note() {
            payload["note"] = Value::String(note.to_string());
        }
        payload
    }

    pub fn into_call_result(self) -> CallToolResult {
        let payload = self.to_payload();
        CallToolResult {
            content: vec![Content::text(payload.to_string())],
            structured_content: Some(payload),
            is_error: Some(true),
            meta: None,
        }
    }
}
