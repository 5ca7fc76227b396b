/// A cursor for byte-by-byte inline parsing with position tracking.
///
/// Positions are byte offsets into `s`. All delimiters are ASCII, so every
/// position where a delimiter is found is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes, stopping at the end of input.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.s.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("**bold**");
        assert!(cur.starts_with(b"**"));
        assert!(!cur.starts_with(b"__"));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let mut cur = Cursor::new("a*");
        assert!(!cur.starts_with(b"a**"));
        cur.bump();
        assert!(!cur.starts_with(b"**"));
        assert!(cur.starts_with(b"*"));
    }

    #[test]
    fn bump_n_clamps_to_end() {
        let mut cur = Cursor::new("hi");
        cur.bump_n(10);
        assert!(cur.eof());
        assert_eq!(cur.pos(), 2);
        assert!(cur.starts_with(b""));
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn multibyte_text_is_walked_bytewise() {
        let mut cur = Cursor::new("é*");
        cur.bump_n(2);
        assert_eq!(cur.peek(), Some(b'*'));
    }
}
