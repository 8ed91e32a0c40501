use super::lines::lines_with_spans;
use super::span::Span;

/// Splits `s` into paragraphs separated by one or more blank lines.
///
/// Each paragraph is returned as a trimmed slice of `s`, so single line
/// breaks inside a paragraph are preserved.
pub fn paragraphs(s: &str) -> Vec<&str> {
    let mut out = vec![];
    let mut current: Option<Span> = None;

    for line in lines_with_spans(s, 0) {
        if line.content().trim().is_empty() {
            if let Some(sp) = current.take() {
                out.push(sp.slice(s).trim());
            }
            continue;
        }
        let content = line.content_span();
        current = Some(match current {
            Some(sp) => Span::new(sp.start, content.end),
            None => content,
        });
    }
    if let Some(sp) = current {
        out.push(sp.slice(s).trim());
    }
    out
}
