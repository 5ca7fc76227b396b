use std::fmt::Write;

use html_escape::encode_text_to_string;

use super::{ListItem, Node, Segment};
use crate::parsing::ListKind;

/// Serializes rendered nodes as an HTML fragment, one element per line.
///
/// Text is escaped; emphasis becomes `<strong>`. Numbered items carry their
/// position in `value`.
pub fn to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Heading { level, content } => {
            let tag = format!("h{}", level.depth());
            write_element(out, &tag, content);
        }
        Node::Text(content) => write_element(out, "p", content),
        Node::List { kind, items } => {
            let tag = match kind {
                ListKind::Bullet => "ul",
                ListKind::Numbered => "ol",
            };
            let _ = writeln!(out, "<{tag}>");
            for item in items {
                write_item(out, item);
            }
            let _ = writeln!(out, "</{tag}>");
        }
        Node::Separator => out.push_str("<hr>\n"),
    }
}

fn write_element(out: &mut String, tag: &str, content: &[Segment]) {
    let _ = write!(out, "<{tag}>");
    write_segments(out, content);
    let _ = writeln!(out, "</{tag}>");
}

fn write_item(out: &mut String, item: &ListItem) {
    match item.position {
        Some(position) => {
            let _ = write!(out, "<li value=\"{position}\">");
        }
        None => out.push_str("<li>"),
    }
    write_segments(out, &item.content);
    out.push_str("</li>\n");
}

fn write_segments(out: &mut String, segments: &[Segment]) {
    for segment in segments {
        match segment {
            Segment::Plain(text) => {
                encode_text_to_string(text, out);
            }
            Segment::Strong(text) => {
                out.push_str("<strong>");
                encode_text_to_string(text, out);
                out.push_str("</strong>");
            }
        }
    }
}
