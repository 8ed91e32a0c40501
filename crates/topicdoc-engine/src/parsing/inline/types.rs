use serde::Serialize;

use crate::parsing::text::Span;

/// A parsed inline node with byte spans into the scanned text.
///
/// This is the parser's raw output; [`InlineSegment`] is the owned form
/// stored in the document model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// `**bold**`.
    Bold {
        /// Full span including both `**` delimiters.
        full: Span,
        /// Content between the delimiters.
        inner: Span,
    },
    /// A code span (backtick-delimited). This is a "raw zone".
    CodeSpan { full: Span, inner: Span },
    /// `[label](href)`.
    Link { full: Span, label: Span, href: Span },
}

impl InlineNode {
    /// The full span of the node, including any delimiters.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::Bold { full, .. }
            | InlineNode::CodeSpan { full, .. }
            | InlineNode::Link { full, .. } => *full,
        }
    }
}

/// A typed fragment of prose with its markup removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineSegment {
    Text(String),
    Bold(String),
    Code(String),
    Link { value: String, href: String },
}

impl InlineSegment {
    /// The visible text of the segment.
    pub fn value(&self) -> &str {
        match self {
            InlineSegment::Text(v) | InlineSegment::Bold(v) | InlineSegment::Code(v) => v,
            InlineSegment::Link { value, .. } => value,
        }
    }
}

/// A prose leaf: the source text together with its inline segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichText {
    pub source: String,
    pub segments: Vec<InlineSegment>,
}

impl RichText {
    /// Tokenizes `source` into inline segments.
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let segments = super::tokenize(&source);
        Self { source, segments }
    }

    /// The text with all recognized markup removed.
    pub fn plain(&self) -> String {
        self.segments.iter().map(InlineSegment::value).collect()
    }
}
