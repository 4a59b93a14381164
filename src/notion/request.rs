//! Typed descriptions of the Notion endpoints this server forwards to.
//!
//! Each [`NotionRequest`] variant maps to exactly one REST call. Bodies are
//! kept as JSON maps: the Notion object model is owned by the API, and the
//! tools only decide which keys are present.

use reqwest::Method;
use serde_json::{Map, Value};

/// Pagination parameters shared by list endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pagination {
    pub start_cursor: Option<String>,
    pub page_size: Option<u32>,
}

impl Pagination {
    pub fn new(start_cursor: Option<String>, page_size: Option<u32>) -> Self {
        Self {
            start_cursor,
            page_size,
        }
    }

    /// Continue from the given cursor with an explicit page size.
    pub fn after(cursor: Option<String>, page_size: u32) -> Self {
        Self {
            start_cursor: cursor,
            page_size: Some(page_size),
        }
    }

    /// Append pagination to a query string parameter list.
    fn push_query(&self, query: &mut Vec<(&'static str, String)>) {
        if let Some(cursor) = &self.start_cursor {
            query.push(("start_cursor", cursor.clone()));
        }
        if let Some(size) = self.page_size {
            query.push(("page_size", size.to_string()));
        }
    }

    /// Merge pagination into a JSON body (POST list endpoints).
    fn merge_into(&self, body: &mut Map<String, Value>) {
        if let Some(cursor) = &self.start_cursor {
            body.insert("start_cursor".into(), Value::String(cursor.clone()));
        }
        if let Some(size) = self.page_size {
            body.insert("page_size".into(), Value::from(size));
        }
    }
}

/// A single forwarded Notion API call.
#[derive(Debug, Clone, PartialEq)]
pub enum NotionRequest {
    CreatePage {
        body: Map<String, Value>,
    },
    RetrievePage {
        page_id: String,
    },
    UpdatePage {
        page_id: String,
        body: Map<String, Value>,
    },
    QueryDatabase {
        database_id: String,
        body: Map<String, Value>,
        page: Pagination,
    },
    CreateDatabase {
        body: Map<String, Value>,
    },
    RetrieveDatabase {
        database_id: String,
    },
    UpdateDatabase {
        database_id: String,
        body: Map<String, Value>,
    },
    RetrieveBlock {
        block_id: String,
    },
    ListBlockChildren {
        block_id: String,
        page: Pagination,
    },
    AppendBlockChildren {
        block_id: String,
        children: Vec<Value>,
    },
    DeleteBlock {
        block_id: String,
    },
    Search {
        body: Map<String, Value>,
        page: Pagination,
    },
    ListUsers {
        page: Pagination,
    },
    RetrieveUser {
        user_id: String,
    },
    RetrieveBotUser,
    CreateComment {
        body: Map<String, Value>,
    },
    ListComments {
        block_id: String,
        page: Pagination,
    },
}

impl NotionRequest {
    /// Short operation name used in logs.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::CreatePage { .. } => "pages.create",
            Self::RetrievePage { .. } => "pages.retrieve",
            Self::UpdatePage { .. } => "pages.update",
            Self::QueryDatabase { .. } => "databases.query",
            Self::CreateDatabase { .. } => "databases.create",
            Self::RetrieveDatabase { .. } => "databases.retrieve",
            Self::UpdateDatabase { .. } => "databases.update",
            Self::RetrieveBlock { .. } => "blocks.retrieve",
            Self::ListBlockChildren { .. } => "blocks.children.list",
            Self::AppendBlockChildren { .. } => "blocks.children.append",
            Self::DeleteBlock { .. } => "blocks.delete",
            Self::Search { .. } => "search",
            Self::ListUsers { .. } => "users.list",
            Self::RetrieveUser { .. } => "users.retrieve",
            Self::RetrieveBotUser => "users.me",
            Self::CreateComment { .. } => "comments.create",
            Self::ListComments { .. } => "comments.list",
        }
    }

    /// HTTP method for this call.
    pub fn method(&self) -> Method {
        match self {
            Self::CreatePage { .. }
            | Self::QueryDatabase { .. }
            | Self::CreateDatabase { .. }
            | Self::Search { .. }
            | Self::CreateComment { .. } => Method::POST,
            Self::UpdatePage { .. }
            | Self::UpdateDatabase { .. }
            | Self::AppendBlockChildren { .. } => Method::PATCH,
            Self::DeleteBlock { .. } => Method::DELETE,
            Self::RetrievePage { .. }
            | Self::RetrieveDatabase { .. }
            | Self::RetrieveBlock { .. }
            | Self::ListBlockChildren { .. }
            | Self::ListUsers { .. }
            | Self::RetrieveUser { .. }
            | Self::RetrieveBotUser
            | Self::ListComments { .. } => Method::GET,
        }
    }

    /// Path segments below the API base URL, starting with `v1`.
    ///
    /// Identifiers stay one segment each; the client percent-encodes them.
    pub fn path_segments(&self) -> Vec<&str> {
        match self {
            Self::CreatePage { .. } => vec!["v1", "pages"],
            Self::RetrievePage { page_id } | Self::UpdatePage { page_id, .. } => {
                vec!["v1", "pages", page_id.as_str()]
            }
            Self::QueryDatabase { database_id, .. } => {
                vec!["v1", "databases", database_id.as_str(), "query"]
            }
            Self::CreateDatabase { .. } => vec!["v1", "databases"],
            Self::RetrieveDatabase { database_id } | Self::UpdateDatabase { database_id, .. } => {
                vec!["v1", "databases", database_id.as_str()]
            }
            Self::RetrieveBlock { block_id } | Self::DeleteBlock { block_id } => {
                vec!["v1", "blocks", block_id.as_str()]
            }
            Self::ListBlockChildren { block_id, .. } | Self::AppendBlockChildren { block_id, .. } => {
                vec!["v1", "blocks", block_id.as_str(), "children"]
            }
            Self::Search { .. } => vec!["v1", "search"],
            Self::ListUsers { .. } => vec!["v1", "users"],
            Self::RetrieveUser { user_id } => vec!["v1", "users", user_id.as_str()],
            Self::RetrieveBotUser => vec!["v1", "users", "me"],
            Self::CreateComment { .. } | Self::ListComments { .. } => vec!["v1", "comments"],
        }
    }

    /// Unencoded path for logs and tests, e.g. `/v1/pages/abc`.
    pub fn path(&self) -> String {
        format!("/{}", self.path_segments().join("/"))
    }

    /// Query string parameters.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        match self {
            Self::ListBlockChildren { page, .. } | Self::ListUsers { page } => {
                page.push_query(&mut query);
            }
            Self::ListComments { block_id, page } => {
                query.push(("block_id", block_id.clone()));
                page.push_query(&mut query);
            }
            _ => {}
        }
        query
    }

    /// JSON body, for methods that carry one.
    pub fn body(&self) -> Option<Value> {
        match self {
            Self::CreatePage { body }
            | Self::UpdatePage { body, .. }
            | Self::CreateDatabase { body }
            | Self::UpdateDatabase { body, .. }
            | Self::CreateComment { body } => Some(Value::Object(body.clone())),
            Self::QueryDatabase { body, page, .. } | Self::Search { body, page } => {
                let mut body = body.clone();
                page.merge_into(&mut body);
                Some(Value::Object(body))
            }
            Self::AppendBlockChildren { children, .. } => {
                Some(serde_json::json!({ "children": children }))
            }
            _ => None,
        }
    }
}
