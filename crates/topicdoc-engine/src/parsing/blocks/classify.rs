use crate::parsing::text::{LineRef, Span};

use super::kinds::{Bullet, CodeFence, FenceSig, Numbered};

/// Columns a tab contributes to a line's indentation.
pub const TAB_WIDTH: usize = 4;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// Full byte span of this line (including its terminator).
    pub line: Span,
    /// The line text without its terminator.
    pub text: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Leading whitespace width in columns.
    pub indent: usize,
    /// Item text if the line is a bullet item.
    pub bullet: Option<&'a str>,
    /// Item text if the line is a numbered item.
    pub numbered: Option<&'a str>,
    /// If the line looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
}

/// Classifies individual lines of a section body.
pub struct TopicLineClassifier;

impl TopicLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let text = lr.content();
        let body = text.trim_start();

        LineClass {
            line: lr.span,
            text,
            is_blank: body.is_empty(),
            indent: indent_width(text),
            bullet: Bullet::strip(body),
            numbered: Numbered::strip(body),
            fence_sig: CodeFence::sig(body),
        }
    }
}

/// Width of the leading whitespace of `s` in columns.
pub fn indent_width(s: &str) -> usize {
    s.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}
