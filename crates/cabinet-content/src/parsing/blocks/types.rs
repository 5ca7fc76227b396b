/// Heading depth supported in article bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H2,
    H3,
}

impl HeadingLevel {
    /// Numeric level, as in `<h2>`.
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// Whether a list is bulleted (`- `) or numbered (`1. `).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Bullet,
    Numbered,
}

/// A run of consecutive list items of one kind. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBlock {
    kind: ListKind,
    items: Vec<String>,
}

impl ListBlock {
    /// Returns `None` when `items` is empty.
    pub fn new(kind: ListKind, items: Vec<String>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self { kind, items })
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Item text with the list marker stripped.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn into_items(self) -> Vec<String> {
        self.items
    }
}

/// A typed segment of an article body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `## text` or `### text`.
    Heading { level: HeadingLevel, text: String },
    /// Any line that is not a marker line.
    Paragraph(String),
    List(ListBlock),
    /// A line that is exactly `---`.
    Divider,
}
