/// A byte cursor for inline scanning with absolute position tracking.
///
/// Operates over a string slice while reporting positions relative to the
/// whole topic content (via the `base` offset). All inline delimiters are
/// ASCII, so any position where a construct starts is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The text being scanned.
    pub s: &'a str,
    /// Offset of `s` inside the topic content.
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
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

    /// Whether the current byte is ASCII whitespace.
    pub fn at_whitespace(&self) -> bool {
        self.peek().is_some_and(|b| b.is_ascii_whitespace())
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("**bold**", 10);
        assert_eq!(cur.pos(), 10);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'*'));
        assert_eq!(cur.bump(), Some(b'*'));
        assert_eq!(cur.pos(), 11);
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("](https://x)", 0);
        assert!(cur.starts_with(b"]("));
        assert!(!cur.starts_with(b"**"));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("", 0);
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert!(!cur.at_whitespace());
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let mut cur = Cursor::new("*", 0);
        assert!(!cur.starts_with(b"**"));
        cur.bump();
        assert!(cur.starts_with(b""));
        assert!(!cur.starts_with(b"*"));
    }

    #[test]
    fn bump_n_past_end_is_eof() {
        let mut cur = Cursor::new("hi", 0);
        cur.bump_n(10);
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert!(!cur.starts_with(b"h"));
    }

    #[test]
    fn whitespace_detection() {
        let mut cur = Cursor::new("a b", 0);
        assert!(!cur.at_whitespace());
        cur.bump();
        assert!(cur.at_whitespace());
    }
}
