/// A byte range `[start, end)` into the text being parsed.
///
/// Inline nodes store spans rather than copied text, so slicing the source
/// with every node's span in order reproduces the input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `s` with this span.
    ///
    /// # Panics
    /// If the span is out of bounds or not on char boundaries of `s`.
    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}
