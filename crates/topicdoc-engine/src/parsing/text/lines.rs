use super::span::Span;

/// A reference to a single line of the content with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of this line (includes the newline if present).
    pub span: Span,
    /// The line text, including its line terminator.
    pub text: &'a str,
}

impl<'a> LineRef<'a> {
    /// The line text without its `\n` / `\r\n` terminator.
    pub fn content(&self) -> &'a str {
        self.text.trim_end_matches(['\r', '\n'])
    }

    /// Span of [`LineRef::content`].
    pub fn content_span(&self) -> Span {
        Span::new(self.span.start, self.span.start + self.content().len())
    }
}

/// Returns an iterator over lines with their byte spans, starting at `base`.
///
/// Uses `split_inclusive` to preserve newline characters, which keeps span
/// tracking exact when lines are stitched back together.
pub fn lines_with_spans(s: &str, base: usize) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = base;
    s.split_inclusive('\n').map(move |text| {
        let start = offset;
        offset += text.len();
        LineRef {
            span: Span::new(start, offset),
            text,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_cover_input() {
        let lines: Vec<_> = lines_with_spans("ab\ncd\n\nef", 0).collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].span, Span::new(0, 3));
        assert_eq!(lines[2].text, "\n");
        assert_eq!(lines[3].span, Span::new(7, 9));
    }

    #[test]
    fn content_strips_crlf() {
        let line = lines_with_spans("hello\r\nworld", 5).next().unwrap();
        assert_eq!(line.content(), "hello");
        assert_eq!(line.content_span(), Span::new(5, 10));
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert_eq!(lines_with_spans("", 0).count(), 0);
    }
}
