use crate::parsing::{blocks::Block, inline::parse_inline};

pub fn check(blocks: &[Block]) {
    for b in blocks {
        match b {
            Block::Heading { text, .. } => check_inline_tiling(text),
            Block::Paragraph(text) => {
                assert!(!text.trim().is_empty(), "blank paragraph emitted: {text:?}");
                assert_eq!(text.trim(), text, "paragraph not trimmed: {text:?}");
                check_inline_tiling(text);
            }
            Block::List(list) => {
                assert!(!list.items().is_empty(), "empty list emitted");
                for item in list.items() {
                    check_inline_tiling(item);
                }
            }
            Block::Divider => {}
        }
    }
}

/// Inline nodes must cover the text exactly: contiguous, in order, no overlap.
fn check_inline_tiling(text: &str) {
    let mut expected_start = 0;
    for node in parse_inline(text) {
        let span = node.span();
        assert_eq!(
            span.start, expected_start,
            "inline gap or overlap at {span:?} in {text:?}"
        );
        assert!(span.end <= text.len(), "inline span out of bounds: {span:?}");
        expected_start = span.end;
    }
    assert_eq!(expected_start, text.len(), "inline nodes do not reach end of {text:?}");
}
