//! Markdown formatting of Notion responses.
//!
//! - `formatter.rs` - response classification and the `format` post-processing step
//! - `renderer.rs` - block tree to Markdown rendering
//! - `title.rs` - page title extraction

mod formatter;
mod renderer;
mod title;

pub use formatter::{FormattedPage, ResponseFormat, ResponseFormatter, ResponseShape, render_page};
pub use renderer::{MarkdownRenderer, PageRenderer, RenderError, rich_text_to_markdown};
pub use title::{UNTITLED, extract_title, plain_text};
