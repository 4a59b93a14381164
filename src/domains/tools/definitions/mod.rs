//! Tool definitions module.
//!
//! One file per tool, grouped by Notion object:
//! - `pages/`, `databases/`, `blocks/`, `users/`, `comments/`
//! - `search.rs`: title search across pages and databases
//! - `export.rs`: page export to Markdown
//! - `common.rs`: result wrapping and parameter helpers

pub mod blocks;
pub mod comments;
pub mod common;
pub mod databases;
pub mod export;
pub mod pages;
pub mod search;
pub mod users;

#[cfg(test)]
pub(crate) mod testing;

pub use blocks::{
    AppendBlockChildrenTool, DeleteBlockTool, RetrieveBlockChildrenTool, RetrieveBlockTool,
};
pub use comments::{CreateCommentTool, RetrieveCommentsTool};
pub use databases::{
    CreateDatabaseItemTool, CreateDatabaseTool, QueryDatabaseTool, RetrieveDatabaseTool,
    UpdateDatabaseTool,
};
pub use export::ExportMarkdownTool;
pub use pages::{
    CreatePageTool, GetPageContentTool, GetPageTool, SaveContentTool, UpdatePagePropertiesTool,
};
pub use search::SearchTool;
pub use users::{ListUsersTool, RetrieveBotUserTool, RetrieveUserTool};
