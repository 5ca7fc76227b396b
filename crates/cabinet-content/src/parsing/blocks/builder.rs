use super::{
    classify::LineClass,
    types::{Block, ListBlock, ListKind},
};

/// Items collected for the list currently being built.
#[derive(Debug)]
struct OpenList {
    kind: ListKind,
    items: Vec<String>,
}

pub struct BlockBuilder {
    list: Option<OpenList>,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            list: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass<'_>) {
        match c {
            LineClass::Blank => self.flush_list(),
            LineClass::Heading { level, text } => {
                self.flush_list();
                self.out.push(Block::Heading {
                    level,
                    text: text.to_string(),
                });
            }
            LineClass::Divider => {
                self.flush_list();
                self.out.push(Block::Divider);
            }
            LineClass::ListItem { kind, text } => self.extend_list(kind, text),
            LineClass::Text(text) => {
                self.flush_list();
                self.out.push(Block::Paragraph(text.to_string()));
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_list();
        self.out
    }

    fn extend_list(&mut self, kind: ListKind, text: &str) {
        // A different list kind always starts a new block
        if self.list.as_ref().is_some_and(|open| open.kind != kind) {
            self.flush_list();
        }

        self.list
            .get_or_insert_with(|| OpenList {
                kind,
                items: vec![],
            })
            .items
            .push(text.to_string());
    }

    fn flush_list(&mut self) {
        if let Some(open) = self.list.take()
            && let Some(list) = ListBlock::new(open.kind, open.items)
        {
            self.out.push(Block::List(list));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
