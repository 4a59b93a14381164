//! Notion client error types.

use thiserror::Error;

/// Errors returned by a [`NotionApi`](super::NotionApi) implementation.
#[derive(Debug, Error)]
pub enum NotionError {
    /// The API answered with a Notion error object.
    ///
    /// Displays only the API message, which is what tool callers see.
    #[error("{message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be decoded.
    #[error("Invalid response from Notion API: {0}")]
    InvalidResponse(String),

    /// The client could not be constructed.
    #[error("Failed to build Notion client: {0}")]
    Build(String),
}

impl NotionError {
    /// Create an API error.
    pub fn api(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create an invalid response error.
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// The Notion error code, when the API returned one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// The HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
