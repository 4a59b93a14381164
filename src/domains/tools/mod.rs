//! Tools domain module.
//!
//! Every MCP tool this server exposes forwards to the Notion API.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The [`NotionTool`] trait and route/metadata glue
//! - `service.rs` - [`NotionService`], the client and formatter shared by tools
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing [`NotionTool`]
//! 2. Export it in the group's `mod.rs`
//! 3. Add its route in `router.rs` using `route_for::<T, S>()`
//! 4. Register it in `registry.rs` (names, metadata and HTTP dispatch)

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;
mod service;

pub use error::ToolError;
pub use handlers::*;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
pub use service::NotionService;
