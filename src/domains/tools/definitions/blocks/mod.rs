//! Block tools.

pub mod append;
pub mod children;
pub mod delete;
pub mod retrieve;

pub use append::{AppendBlockChildrenParams, AppendBlockChildrenTool};
pub use children::{RetrieveBlockChildrenParams, RetrieveBlockChildrenTool};
pub use delete::{DeleteBlockParams, DeleteBlockTool};
pub use retrieve::{RetrieveBlockParams, RetrieveBlockTool};
