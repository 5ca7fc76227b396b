pub mod contact;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use contact::{ContactError, ContactPayload, ContactRequest, MessageRelay, Motive, submit};
pub use io::*;
pub use models::{Article, ArticleMeta, SeoMeta, format_date_fr};
pub use parsing::{Block, HeadingLevel, ListBlock, ListKind, segment};
pub use render::{ListItem, Node, Segment, render, render_blocks, render_body, to_html};
pub use store::{ArticleStore, StoreError};
