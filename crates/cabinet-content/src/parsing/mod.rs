//! # Parsing
//!
//! Line-oriented segmentation of article bodies into typed [`Block`]s, plus
//! inline emphasis parsing for the text those blocks carry.
//!
//! Only a deliberately small markdown subset is recognised: `## ` and `### `
//! headings, `---` dividers, `- ` bullet items, `1. ` numbered items and
//! paragraphs. Anything else is a paragraph, so segmentation never fails.

pub mod blocks;
pub mod inline;
pub mod snapshot;
pub mod span;

#[cfg(test)]
mod tests;

pub use blocks::{Block, HeadingLevel, ListBlock, ListKind};
pub use span::Span;

use blocks::{BlockBuilder, MarkdownLineClassifier};

/// U+FEFF, which some editors leave at the start of a file.
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// [`str::trim`] that also strips byte order marks.
pub fn trim_text(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// Segments an article body into blocks, in source order.
///
/// The body is trimmed as a whole, then every line is trimmed and classified
/// on its own. Blank lines only close an open list.
pub fn segment(text: &str) -> Vec<Block> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in trim_text(text).split('\n') {
        let lc = classifier.classify(line);
        builder.push(lc);
    }

    builder.finish()
}
