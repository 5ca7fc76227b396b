//! # Block Rendering
//!
//! Maps segmented [`Block`]s to presentational [`Node`]s and resolves inline
//! emphasis into owned [`Segment`]s.
//!
//! The match over `Block` is exhaustive, so a block kind without a rendering
//! is a compile error rather than a runtime state.

pub mod html;

pub use html::to_html;

use crate::parsing::{
    Block, HeadingLevel, ListKind,
    inline::{InlineNode, parse_inline},
    segment,
};

/// A run of inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Strong(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Strong(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// 1-based position, set for numbered lists only.
    pub position: Option<usize>,
    pub content: Vec<Segment>,
}

/// Presentational form of a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Heading {
        level: HeadingLevel,
        content: Vec<Segment>,
    },
    Text(Vec<Segment>),
    List {
        kind: ListKind,
        items: Vec<ListItem>,
    },
    Separator,
}

/// Splits `text` into plain and strong segments.
///
/// Concatenating the segments, with strong ones wrapped back in `**`,
/// reproduces `text`.
pub fn format_inline(text: &str) -> Vec<Segment> {
    parse_inline(text)
        .into_iter()
        .map(|node| match node {
            InlineNode::Text(span) => Segment::Plain(span.slice(text).to_string()),
            InlineNode::Strong { inner, .. } => Segment::Strong(inner.slice(text).to_string()),
        })
        .collect()
}

pub fn render(block: &Block) -> Node {
    match block {
        Block::Heading { level, text } => Node::Heading {
            level: *level,
            content: format_inline(text),
        },
        Block::Paragraph(text) => Node::Text(format_inline(text)),
        Block::List(list) => {
            let numbered = list.kind() == ListKind::Numbered;
            let items = list
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| ListItem {
                    position: numbered.then_some(index + 1),
                    content: format_inline(item),
                })
                .collect();
            Node::List {
                kind: list.kind(),
                items,
            }
        }
        Block::Divider => Node::Separator,
    }
}

pub fn render_blocks(blocks: &[Block]) -> Vec<Node> {
    blocks.iter().map(render).collect()
}

/// Segments and renders an article body in one go.
pub fn render_body(text: &str) -> Vec<Node> {
    render_blocks(&segment(text))
}
