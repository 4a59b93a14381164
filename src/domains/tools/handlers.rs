//! Tool handler trait and the glue that turns a handler into an MCP tool.
//!
//! Every tool under `definitions/` implements [`NotionTool`]. The generic
//! helpers here derive its [`Tool`] metadata from the parameter type, build
//! its rmcp route for STDIO/TCP, and dispatch HTTP calls.

use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::ToolError;
use super::service::NotionService;

/// A Notion tool: typed parameters and an async handler.
#[async_trait]
pub trait NotionTool: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Parameters, deserialized from the call arguments.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Execute the tool. Failures are reported inside the result.
    async fn execute(params: Self::Params, service: &NotionService) -> CallToolResult;
}

/// Create a Tool model for `T` (metadata).
pub fn tool_for<T: NotionTool>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: schema_for_type::<T::Params>().into(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Deserialize call arguments into `T::Params`.
pub fn parse_params<T: NotionTool>(arguments: Map<String, Value>) -> Result<T::Params, McpError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| McpError::invalid_params(format!("{}: {}", T::NAME, e), None))
}

/// Run `T` against the service, failing fast when no client is configured.
pub async fn run<T: NotionTool>(params: T::Params, service: &NotionService) -> CallToolResult {
    if !service.is_configured() {
        return ToolError::NotInitialized.into_call_result();
    }
    T::execute(params, service).await
}

/// Create a ToolRoute for STDIO/TCP transport.
pub fn route_for<T, S>(service: Arc<NotionService>) -> ToolRoute<S>
where
    T: NotionTool,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(tool_for::<T>(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let service = service.clone();
        async move {
            let params = parse_params::<T>(args)?;
            Ok(run::<T>(params, &service).await)
        }
        .boxed()
    })
}

/// HTTP handler for `T` (for HTTP transport).
///
/// Returns the serialized `CallToolResult`, or a message when the
/// arguments do not match the tool's schema.
#[cfg(feature = "http")]
pub async fn http_call<T: NotionTool>(
    arguments: Value,
    service: &NotionService,
) -> Result<Value, String> {
    let args = match arguments {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => return Err(format!("Invalid arguments for {}: {}", T::NAME, other)),
    };
    let params = parse_params::<T>(args).map_err(|e| e.message.to_string())?;
    let result = run::<T>(params, service).await;
    serde_json::to_value(&result).map_err(|e| e.to_string())
}
