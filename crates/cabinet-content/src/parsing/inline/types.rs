use crate::parsing::span::Span;

/// A parsed inline node with byte spans into the parsed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// Strong emphasis `**text**`.
    Strong {
        /// Full span including both `**` delimiters.
        full: Span,
        /// Span of the emphasized text.
        inner: Span,
    },
}

impl InlineNode {
    /// The span this node covers in the source string.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::Strong { full, .. } => *full,
        }
    }
}
