use crate::parsing::text::Span;

use super::{
    cursor::Cursor,
    kinds::{Bold, CodeSpan, Link},
    types::{InlineNode, InlineSegment},
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the topic content where `s` begins
/// - `s`: The text to scan (a paragraph, list item or callout paragraph)
///
/// # Precedence
/// At each position bold is tried first, then code spans, then links. The
/// first construct that closes wins and its content is not scanned further,
/// so `` `**x**` `` is never bold and `**[a](#b)**` is bold text, not a link.
///
/// # Returns
/// Nodes covering the entire input in order. Text between constructs,
/// including unmatched delimiters, is emitted as `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        let parsed = try_parse_bold(&mut cur)
            .or_else(|| try_parse_code_span(&mut cur))
            .or_else(|| try_parse_link(&mut cur));

        if let Some(node) = parsed {
            flush_text(&mut out, text_start, node.span().start);
            text_start = node.span().end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Tokenizes `s` into owned [`InlineSegment`]s.
pub fn tokenize(s: &str) -> Vec<InlineSegment> {
    parse_inline(0, s)
        .into_iter()
        .map(|node| match node {
            InlineNode::Text(sp) => InlineSegment::Text(sp.slice(s).to_string()),
            InlineNode::Bold { inner, .. } => InlineSegment::Bold(inner.slice(s).to_string()),
            InlineNode::CodeSpan { inner, .. } => InlineSegment::Code(inner.slice(s).to_string()),
            InlineNode::Link { label, href, .. } => InlineSegment::Link {
                value: label.slice(s).to_string(),
                href: href.slice(s).to_string(),
            },
        })
        .collect()
}

/// Attempts to parse `**bold**` at the current position.
///
/// Requires a non-empty body. On failure, cursor position is restored.
fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Bold::DELIM) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(Bold::DELIM.len());
    let inner_start = cur.pos();

    while !cur.eof() && !cur.starts_with(Bold::DELIM) {
        cur.bump();
    }
    let inner_end = cur.pos();

    if !cur.starts_with(Bold::DELIM) || inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump_n(Bold::DELIM.len());

    Some(InlineNode::Bold {
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
    })
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span isn't closed, or if it
/// is empty. On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();

    while !cur.eof() && cur.peek() != Some(CodeSpan::TICK) {
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.peek() != Some(CodeSpan::TICK) || inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(InlineNode::CodeSpan {
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
    })
}

/// Attempts to parse `[label](href)` starting at the current position.
///
/// The label must be non-empty and may not contain `[`; the target must be
/// accepted by [`Link::accepts`]. On failure, cursor position is restored.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // [
    let label_start = cur.pos();

    while !cur.eof() && !cur.starts_with(Link::LABEL_CLOSE) {
        if cur.peek() == Some(Link::OPEN) || cur.peek() == Some(b'\n') {
            *cur = saved;
            return None;
        }
        cur.bump();
    }
    let label_end = cur.pos();

    if !cur.starts_with(Link::LABEL_CLOSE) || label_end == label_start {
        *cur = saved;
        return None;
    }
    cur.bump_n(Link::LABEL_CLOSE.len());
    let href_start = cur.pos();

    while !cur.eof() && cur.peek() != Some(Link::CLOSE) {
        if cur.at_whitespace() {
            *cur = saved;
            return None;
        }
        cur.bump();
    }
    let href_end = cur.pos();

    let href = Span::new(href_start - cur.base, href_end - cur.base).slice(cur.s);
    if cur.peek() != Some(Link::CLOSE) || !Link::accepts(href) {
        *cur = saved;
        return None;
    }
    cur.bump(); // )

    Some(InlineNode::Link {
        full: Span::new(start, cur.pos()),
        label: Span::new(label_start, label_end),
        href: Span::new(href_start, href_end),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn text(v: &str) -> InlineSegment {
        InlineSegment::Text(v.to_string())
    }

    #[test]
    fn parse_simple_text() {
        let nodes = parse_inline(0, "hello world");
        assert_eq!(nodes, vec![InlineNode::Text(Span::new(0, 11))]);
    }

    #[test]
    fn spans_are_offset_by_base() {
        let nodes = parse_inline(100, "a `b`");
        assert_eq!(
            nodes,
            vec![
                InlineNode::Text(Span::new(100, 102)),
                InlineNode::CodeSpan {
                    full: Span::new(102, 105),
                    inner: Span::new(103, 104),
                },
            ]
        );
    }

    #[test]
    fn code_and_link_in_sentence() {
        let segments = tokenize("Use `foo()` and see [docs](https://example.com).");
        assert_eq!(
            segments,
            vec![
                text("Use "),
                InlineSegment::Code("foo()".into()),
                text(" and see "),
                InlineSegment::Link {
                    value: "docs".into(),
                    href: "https://example.com".into(),
                },
                text("."),
            ]
        );
    }

    #[test]
    fn bold_segment() {
        assert_eq!(
            tokenize("a **big** deal"),
            vec![text("a "), InlineSegment::Bold("big".into()), text(" deal")]
        );
    }

    #[test]
    fn fragment_link() {
        assert_eq!(
            tokenize("[see below](#section-3)"),
            vec![InlineSegment::Link {
                value: "see below".into(),
                href: "#section-3".into(),
            }]
        );
    }

    #[rstest]
    #[case::unclosed_bold("**not bold")]
    #[case::empty_bold("****")]
    #[case::unclosed_code("`not code")]
    #[case::empty_code("``")]
    #[case::relative_link("[guide](docs/guide.md)")]
    #[case::bare_domain_link("[site](example.com)")]
    #[case::space_in_url("[x](https://a b)")]
    #[case::empty_label("[](https://example.com)")]
    #[case::unclosed_label("[label")]
    #[case::lone_star("2 * 3")]
    fn unmatched_markup_stays_literal(#[case] input: &str) {
        assert_eq!(tokenize(input), vec![text(input)]);
    }

    #[test]
    fn code_span_suppresses_bold() {
        assert_eq!(
            tokenize("`**x**`"),
            vec![InlineSegment::Code("**x**".into())]
        );
    }

    #[test]
    fn bold_wins_over_link_inside_it() {
        assert_eq!(
            tokenize("**[a](#b)**"),
            vec![InlineSegment::Bold("[a](#b)".into())]
        );
    }

    #[test]
    fn bracket_inside_label_defers_to_inner_link() {
        assert_eq!(
            tokenize("[a [b](#c)"),
            vec![
                text("[a "),
                InlineSegment::Link {
                    value: "b".into(),
                    href: "#c".into(),
                },
            ]
        );
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(
            tokenize("café **naïve** ✓"),
            vec![
                text("café "),
                InlineSegment::Bold("naïve".into()),
                text(" ✓"),
            ]
        );
    }

    #[test]
    fn empty_input_has_no_nodes() {
        assert!(parse_inline(0, "").is_empty());
    }

    #[test]
    fn nodes_cover_input_without_overlap() {
        let s = "x **b** `c` [d](#e) *";
        let nodes = parse_inline(0, s);
        let mut expected_start = 0;
        for node in &nodes {
            assert_eq!(node.span().start, expected_start);
            expected_start = node.span().end;
        }
        assert_eq!(expected_start, s.len());
    }
}
