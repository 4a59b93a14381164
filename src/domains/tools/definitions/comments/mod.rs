//! Comment tools.

pub mod create;
pub mod retrieve;

pub use create::{CREATE_COMMENT_NOTE, CreateCommentParams, CreateCommentTool};
pub use retrieve::{RETRIEVE_COMMENTS_NOTE, RetrieveCommentsParams, RetrieveCommentsTool};
