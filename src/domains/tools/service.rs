//! Shared state handed to every tool.

use std::sync::Arc;

use rmcp::model::CallToolResult;
use serde_json::Value;
use tracing::{info, warn};

use super::definitions::common::success_result;
use super::error::ToolError;
use crate::core::config::Config;
use crate::domains::format::{MarkdownRenderer, PageRenderer, ResponseFormat, ResponseFormatter};
use crate::notion::{HttpNotionClient, NotionApi, NotionError, NotionRequest};

/// The Notion client, page renderer and response formatter used by tools.
///
/// Built once at startup. When no token is configured the service is
/// "unconfigured" and every call fails with [`ToolError::NotInitialized`]
/// without touching the network.
pub struct NotionService {
    api: Option<Arc<dyn NotionApi>>,
    renderer: Option<Arc<dyn PageRenderer>>,
    formatter: ResponseFormatter,
    config: Arc<Config>,
}

impl NotionService {
    /// Build the service from configuration, constructing the HTTP client
    /// when a token is present.
    pub fn from_config(config: Arc<Config>) -> Result<Self, NotionError> {
        match HttpNotionClient::from_config(&config.notion)? {
            Some(client) => {
                info!("Notion client ready ({})", client.base_url());
                Ok(Self::with_api(Arc::new(client), config))
            }
            None => Ok(Self::unconfigured(config)),
        }
    }

    /// Build the service around an existing client.
    pub fn with_api(api: Arc<dyn NotionApi>, config: Arc<Config>) -> Self {
        let renderer: Arc<dyn PageRenderer> = Arc::new(MarkdownRenderer::new(api.clone()));
        let formatter = if config.notion.markdown_conversion {
            ResponseFormatter::new(renderer.clone())
        } else {
            ResponseFormatter::disabled()
        };
        Self {
            api: Some(api),
            renderer: Some(renderer),
            formatter,
            config,
        }
    }

    /// A service without a client.
    pub fn unconfigured(config: Arc<Config>) -> Self {
        warn!("Notion service has no client; tools will report an initialization failure");
        Self {
            api: None,
            renderer: None,
            formatter: ResponseFormatter::disabled(),
            config,
        }
    }

    /// Replace the page renderer, keeping the markdown conversion setting.
    pub fn with_renderer(mut self, renderer: Arc<dyn PageRenderer>) -> Self {
        if self.formatter.is_enabled() {
            self.formatter = ResponseFormatter::new(renderer.clone());
        }
        self.renderer = Some(renderer);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_configured(&self) -> bool {
        self.api.is_some()
    }

    /// The page renderer, available whenever a client is configured.
    pub fn renderer(&self) -> Result<&dyn PageRenderer, ToolError> {
        match (&self.api, &self.renderer) {
            (Some(_), Some(renderer)) => Ok(renderer.as_ref()),
            _ => Err(ToolError::NotInitialized),
        }
    }

    /// Send one request to Notion.
    pub async fn call(&self, request: NotionRequest) -> Result<Value, ToolError> {
        let api = self.api.as_ref().ok_or(ToolError::NotInitialized)?;
        Ok(api.send(request).await?)
    }

    /// Apply the `format` post-processing to a response.
    pub async fn format(&self, data: Value, mode: ResponseFormat) -> Value {
        self.formatter.format(data, mode).await
    }

    /// Send a request, format its response and wrap it as a tool result.
    pub async fn respond(&self, request: NotionRequest, mode: ResponseFormat) -> CallToolResult {
        self.respond_with_note(request, mode, None).await
    }

    /// Like [`respond`](Self::respond), attaching `note` to API failures.
    pub async fn respond_with_note(
        &self,
        request: NotionRequest,
        mode: ResponseFormat,
        note: Option<&'static str>,
    ) -> CallToolResult {
        let operation = request.operation();
        match self.call(request).await {
            Ok(data) => success_result(self.format(data, mode).await),
            Err(e) => {
                warn!("{} failed: {}", operation, e);
                match note {
                    Some(note) => e.with_note(note).into_call_result(),
                    None => e.into_call_result(),
                }
            }
        }
    }
}
