//! Conversion of rendered article nodes into terminal lines.

use cabinet_content::{Article, HeadingLevel, ListKind, Node, Segment, format_date_fr};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const SEPARATOR_WIDTH: usize = 40;
const BULLET: &str = "• ";

fn strong() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn segment_spans(segments: &[Segment], base: Style) -> Vec<Span<'static>> {
    segments
        .iter()
        .map(|segment| {
            let style = match segment {
                Segment::Plain(_) => base,
                Segment::Strong(_) => base.patch(strong()),
            };
            Span::styled(segment.text().to_string(), style)
        })
        .collect()
}

/// Lines for one node, followed by a blank spacer line.
pub fn node_lines(node: &Node) -> Vec<Line<'static>> {
    let mut lines = match node {
        Node::Heading { level, content } => {
            let style = match level {
                HeadingLevel::H2 => strong().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
                HeadingLevel::H3 => strong().fg(Color::Cyan),
            };
            vec![Line::from(segment_spans(content, style))]
        }
        Node::Text(content) => vec![Line::from(segment_spans(content, Style::default()))],
        Node::List { kind, items } => items
            .iter()
            .map(|item| {
                let marker = match (kind, item.position) {
                    (ListKind::Numbered, Some(position)) => format!("{position}. "),
                    _ => BULLET.to_string(),
                };
                let mut spans = vec![Span::raw(marker)];
                spans.extend(segment_spans(&item.content, Style::default()));
                Line::from(spans)
            })
            .collect(),
        Node::Separator => vec![Line::styled(
            "─".repeat(SEPARATOR_WIDTH),
            Style::default().fg(Color::DarkGray),
        )],
    };
    lines.push(Line::default());
    lines
}

/// Full reading view: header, rendered body and suggestions.
pub fn article_lines(article: &Article, nodes: &[Node], related: &[&Article]) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(article.title.clone(), strong()),
        Line::styled(
            format!(
                "{} · {} · {} · {}",
                article.author,
                format_date_fr(article.date),
                article.read_time,
                article.category
            ),
            Style::default().fg(Color::DarkGray),
        ),
        Line::default(),
    ];

    for node in nodes {
        lines.extend(node_lines(node));
    }

    if !related.is_empty() {
        lines.push(Line::styled("Articles liés", strong().fg(Color::Yellow)));
        lines.extend(
            related
                .iter()
                .map(|other| Line::raw(format!("{BULLET}{}", other.title))),
        );
    }

    lines
}
