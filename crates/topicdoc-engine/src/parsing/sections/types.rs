use serde::Serialize;

use crate::parsing::text::Span;

/// One of the eight ordinal-numbered divisions of a learning topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Canonical section number, 1..=8.
    pub ordinal: u8,
    /// Display label from the label table.
    pub label: String,
    /// Title as written by the author. Informational only.
    pub title: String,
    /// Body text between this boundary and the next, trimmed.
    pub body: String,
    /// Span of `body` in the topic content.
    pub span: Span,
}

impl Section {
    /// Whether the author wrote the boundary but no content under it.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
