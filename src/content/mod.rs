//! Content module - loads documents and renders their markdown

mod frontmatter;
mod item;
pub mod loader;
mod markdown;

pub use frontmatter::FrontMatter;
pub use item::ContentItem;
pub use markdown::MarkdownRenderer;
