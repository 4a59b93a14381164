//! Notion API access.
//!
//! - `request.rs` - typed description of every forwarded endpoint
//! - `client.rs` - the [`NotionApi`] trait and its `reqwest` implementation
//! - `error.rs` - client error types

mod client;
mod error;
mod request;

pub use client::{HttpNotionClient, NotionApi};
pub use error::NotionError;
pub use request::{NotionRequest, Pagination};

#[cfg(test)]
pub(crate) mod testing;
