use crate::parsing::trim_text;

use super::{
    kinds::{Divider, Heading, ListMarker},
    types::{HeadingLevel, ListKind},
};

/// Classification of a single trimmed line.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Text slices borrow from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty or whitespace only.
    Blank,
    Heading { level: HeadingLevel, text: &'a str },
    Divider,
    /// A list item with its marker stripped.
    ListItem { kind: ListKind, text: &'a str },
    /// Fallback: the whole trimmed line.
    Text(&'a str),
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`]; the first matching rule wins.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = trim_text(line);

        if trimmed.is_empty() {
            return LineClass::Blank;
        }
        if let Some((level, text)) = Heading::strip(trimmed) {
            return LineClass::Heading { level, text };
        }
        if Divider::matches(trimmed) {
            return LineClass::Divider;
        }
        if let Some(text) = ListMarker::strip_bullet(trimmed) {
            return LineClass::ListItem {
                kind: ListKind::Bullet,
                text,
            };
        }
        if let Some(text) = ListMarker::strip_number(trimmed) {
            return LineClass::ListItem {
                kind: ListKind::Numbered,
                text,
            };
        }
        LineClass::Text(trimmed)
    }
}
