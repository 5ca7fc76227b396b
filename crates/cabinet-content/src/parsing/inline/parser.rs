use crate::parsing::span::Span;

use super::{cursor::Cursor, kinds::Strong, types::InlineNode};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// Spans are byte offsets into `s`. The returned nodes cover `s` entirely;
/// text between emphasis runs is emitted as `InlineNode::Text`.
///
/// Pairing is non-greedy: an opening `**` closes at the nearest following
/// `**`, so `**a** and **b**` yields two strong runs.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if let Some(node) = try_parse_strong(&mut cur) {
            flush_text(&mut out, text_start, node.span().start);
            text_start = node.span().end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse strong emphasis starting at the current position.
///
/// Returns `None` if not at `**` or if no closing `**` follows on the same
/// line. On failure, cursor position is restored.
fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Strong::DELIM) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(Strong::DELIM.len());
    let inner_start = cur.pos();

    while let Some(b) = cur.peek() {
        if cur.starts_with(Strong::DELIM) || Strong::is_line_break(b) {
            break;
        }
        cur.bump();
    }
    let inner_end = cur.pos();

    if !cur.starts_with(Strong::DELIM) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump_n(Strong::DELIM.len());
    let end = cur.pos();

    Some(InlineNode::Strong {
        full: Span { start, end },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}
