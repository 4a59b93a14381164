//! Database tools.

pub mod create;
pub mod create_item;
pub mod query;
pub mod retrieve;
pub mod update;

pub use create::{CreateDatabaseParams, CreateDatabaseTool};
pub use create_item::{CreateDatabaseItemParams, CreateDatabaseItemTool};
pub use query::{QueryDatabaseParams, QueryDatabaseTool};
pub use retrieve::{RetrieveDatabaseParams, RetrieveDatabaseTool};
pub use update::{UpdateDatabaseParams, UpdateDatabaseTool};
