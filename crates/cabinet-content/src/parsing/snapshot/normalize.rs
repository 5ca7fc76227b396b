use serde::Serialize;

use crate::parsing::{
    blocks::{Block, HeadingLevel, ListKind},
    inline::{InlineNode, parse_inline},
};

/// Snapshot of a segmented body for testing with `insta`.
#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single block.
#[derive(Debug, Serialize)]
pub struct BlockSnap {
    /// Block kind as a string (e.g. "Heading2", "BulletList").
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
    /// Text of the strong runs found in the block, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub strong: Vec<String>,
}

/// Converts blocks into a serializable snapshot for testing.
pub fn normalize(blocks: &[Block]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| match b {
            Block::Heading { level, text } => BlockSnap {
                kind: match level {
                    HeadingLevel::H2 => "Heading2".to_string(),
                    HeadingLevel::H3 => "Heading3".to_string(),
                },
                text: Some(text.clone()),
                items: vec![],
                strong: strong_runs(text),
            },
            Block::Paragraph(text) => BlockSnap {
                kind: "Paragraph".to_string(),
                text: Some(text.clone()),
                items: vec![],
                strong: strong_runs(text),
            },
            Block::List(list) => BlockSnap {
                kind: match list.kind() {
                    ListKind::Bullet => "BulletList".to_string(),
                    ListKind::Numbered => "NumberedList".to_string(),
                },
                text: None,
                items: list.items().to_vec(),
                strong: list.items().iter().flat_map(|i| strong_runs(i)).collect(),
            },
            Block::Divider => BlockSnap {
                kind: "Divider".to_string(),
                text: None,
                items: vec![],
                strong: vec![],
            },
        })
        .collect();

    Snap { blocks }
}

fn strong_runs(text: &str) -> Vec<String> {
    parse_inline(text)
        .into_iter()
        .filter_map(|n| match n {
            InlineNode::Strong { inner, .. } => Some(inner.slice(text).to_string()),
            InlineNode::Text(_) => None,
        })
        .collect()
}
