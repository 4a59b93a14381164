//! Page tools.
//!
//! - `create`: create a page under a page or database
//! - `get` / `get_content`: retrieve a page and list its blocks
//! - `update_properties`: change properties, icon, cover or archived state
//! - `save_content`: append any number of blocks in batches

pub mod create;
pub mod get;
pub mod get_content;
pub mod save_content;
pub mod update_properties;

pub use create::{CreatePageParams, CreatePageTool};
pub use get::{GetPageParams, GetPageTool};
pub use get_content::{GetPageContentParams, GetPageContentTool};
pub use save_content::{APPEND_CHUNK_SIZE, SaveContentParams, SaveContentTool};
pub use update_properties::{UpdatePagePropertiesParams, UpdatePagePropertiesTool};
