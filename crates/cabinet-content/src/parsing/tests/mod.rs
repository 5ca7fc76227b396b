//! Integration tests for the parsing module.
//!
//! Uses snapshot testing with YAML format for readability.
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    Block, HeadingLevel, ListBlock, ListKind,
    inline::{InlineNode, parse_inline},
    segment,
    snapshot::{invariants, normalize},
};

// Fixture-based snapshot tests

#[rstest]
#[case("headings_and_lists")]
#[case("list_type_switch")]
#[case("emphasis")]
#[case("whitespace_noise")]
#[case("unclosed_emphasis")]
fn fixture(#[case] name: &str) {
    assert_fixture(name);
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let blocks = segment(&md);
    invariants(&blocks);

    let snap = normalize(&blocks);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_yaml_snapshot!(name, snap);
    });
}

fn heading2(text: &str) -> Block {
    Block::Heading {
        level: HeadingLevel::H2,
        text: text.to_string(),
    }
}

fn paragraph(text: &str) -> Block {
    Block::Paragraph(text.to_string())
}

fn list(kind: ListKind, items: &[&str]) -> Block {
    Block::List(ListBlock::new(kind, items.iter().map(|s| s.to_string()).collect()).unwrap())
}

// Concrete scenarios

#[test]
fn heading_paragraph_and_bullets() {
    assert_eq!(
        segment("## Title\n\nSome text.\n\n- a\n- b\n"),
        vec![
            heading2("Title"),
            paragraph("Some text."),
            list(ListKind::Bullet, &["a", "b"]),
        ]
    );
}

#[test]
fn numbered_items_form_one_list() {
    assert_eq!(
        segment("1. First\n2. Second\n"),
        vec![list(ListKind::Numbered, &["First", "Second"])]
    );
}

#[test]
fn numbers_need_not_be_sequential() {
    assert_eq!(
        segment("3. c\n1. a\n10. j"),
        vec![list(ListKind::Numbered, &["c", "a", "j"])]
    );
}

#[test]
fn numbered_item_after_bullets_starts_new_list() {
    assert_eq!(
        segment("- a\n1. b"),
        vec![
            list(ListKind::Bullet, &["a"]),
            list(ListKind::Numbered, &["b"]),
        ]
    );
}

#[test]
fn paragraph_lines_are_separate_blocks() {
    assert_eq!(
        segment("Line one\nLine two"),
        vec![paragraph("Line one"), paragraph("Line two")]
    );
}

// Boundaries

#[rstest]
#[case("")]
#[case("\n")]
#[case("   \n\t\n  ")]
fn blank_input_yields_no_blocks(#[case] input: &str) {
    assert!(segment(input).is_empty());
}

#[test]
fn lone_divider() {
    assert_eq!(segment("---"), vec![Block::Divider]);
}

#[test]
fn crlf_bodies_segment_like_lf() {
    assert_eq!(
        segment("## Title\r\n\r\n- a\r\n- b\r\n"),
        segment("## Title\n\n- a\n- b\n")
    );
}

#[test]
fn byte_order_mark_is_trimmed_like_whitespace() {
    assert_eq!(segment("\u{feff}## Title"), vec![heading2("Title")]);
    assert_eq!(
        segment("- a\n\u{feff}\n- b"),
        vec![list(ListKind::Bullet, &["a"]), list(ListKind::Bullet, &["b"])]
    );
}

// Properties

#[test]
fn segmentation_is_idempotent() {
    let body = "## A\n\nText with **bold**.\n\n- x\n- y\n1. z\n---\n### B";
    assert_eq!(segment(body), segment(body));
}

#[rstest]
#[case(&["one"])]
#[case(&["Brosser trop fort", "Utiliser une brosse usée", "Négliger la langue"])]
#[case(&["**Poils souples** : préservent l'émail", "- nested marker", "1. looks numbered"])]
fn bullet_items_round_trip(#[case] items: &[&str]) {
    let body = items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n");

    match segment(&body).as_slice() {
        [Block::List(list)] => {
            assert_eq!(list.kind(), ListKind::Bullet);
            assert_eq!(list.items(), items);
        }
        other => panic!("expected a single bullet list, got {other:?}"),
    }
}

#[test]
fn every_line_lands_somewhere() {
    // Every non-blank line contributes exactly one block or list item
    let body = "## H\nText\n- a\n- b\n1. c\n---\n### I\nMore";
    let blocks = segment(body);
    let units: usize = blocks
        .iter()
        .map(|b| match b {
            Block::List(list) => list.items().len(),
            _ => 1,
        })
        .sum();
    assert_eq!(units, body.lines().count());
    invariants(&blocks);
}

/// Inline nodes of every block text tile the text.
#[test]
fn inline_nodes_cover_input() {
    let text = "Some **bold** word and **unpaired";
    let nodes = parse_inline(text);
    let rebuilt: String = nodes.iter().map(|n| n.span().slice(text)).collect();
    assert_eq!(rebuilt, text);
    assert!(matches!(nodes[1], InlineNode::Strong { .. }));
}
