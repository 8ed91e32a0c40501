/// A byte range `[start, end)` into the raw topic content.
///
/// Sections and inline nodes record spans alongside their owned text so that
/// slicing the original content with a span reproduces the exact source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, serde::Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

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

    /// Slices `s` with this span, returning `""` when the span is out of bounds
    /// or does not fall on char boundaries.
    #[must_use]
    pub fn slice(self, s: &str) -> &str {
        s.get(self.start..self.end).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(2, 7).len(), 5);
        assert!(Span::new(4, 4).is_empty());
        assert!(Span::new(5, 3).is_empty());
    }

    #[test]
    fn slice_in_bounds() {
        assert_eq!(Span::new(6, 11).slice("hello world"), "world");
    }

    #[test]
    fn slice_out_of_bounds_is_empty() {
        assert_eq!(Span::new(3, 40).slice("short"), "");
    }

    #[test]
    fn slice_inside_multibyte_char_is_empty() {
        // '•' is three bytes; offset 1 is not a char boundary
        assert_eq!(Span::new(1, 3).slice("• item"), "");
    }
}
