//! # Inline Parsing
//!
//! Cursor-based inline parsing of the text carried by headings, paragraphs
//! and list items.
//!
//! ## Architecture
//!
//! The only construct is strong emphasis, `**text**`. The parser scans left to
//! right; at each `**` it looks for the nearest following `**` on the same
//! line and, if found, emits a [`InlineNode::Strong`]. Everything else is
//! emitted as [`InlineNode::Text`].
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Strong)
//! - **`kinds`**: Inline-specific types with owned delimiters (Strong)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `parse_inline()` main entry point
//!
//! ## Coverage
//!
//! The nodes returned for a string cover it completely, in order, without
//! overlap. An unpaired `**` stays inside a `Text` node.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
