//! User tools.

pub mod bot;
pub mod list;
pub mod retrieve;

pub use bot::{RetrieveBotUserParams, RetrieveBotUserTool};
pub use list::{LIST_USERS_NOTE, ListUsersParams, ListUsersTool};
pub use retrieve::{RetrieveUserParams, RetrieveUserTool};
