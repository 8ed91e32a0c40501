use serde::Serialize;

use crate::parsing::{
    blocks::{Block, CodeBlock},
    sections::Section,
};

/// Anchor of the external code example entry.
pub const CODE_EXAMPLE_ANCHOR: &str = "code-example";
/// Anchor of the prose entry of unstructured content.
pub const OVERVIEW_ANCHOR: &str = "overview";

/// Anchor of the entry for section `ordinal`.
pub fn section_anchor(ordinal: u8) -> String {
    format!("section-{ordinal}")
}

/// Whether the content carried numbered sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Structure {
    Structured,
    /// No section-1 boundary; the content is shown as plain paragraphs.
    Unstructured,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EntryBody {
    Blocks(Vec<Block>),
    /// A section that exists but has no content.
    Placeholder(String),
    Code(CodeBlock),
}

/// One assembled, displayable unit of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Section ordinal, or `None` for the code example and overview entries.
    pub ordinal: Option<u8>,
    pub anchor: String,
    pub label: String,
    pub body: EntryBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub anchor: String,
    pub label: String,
}

/// The parsed form of a topic, ready for a renderer to walk.
///
/// Built fresh on every parse; callers that re-render often should memoize
/// it against the content and code example they parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub structure: Structure,
    /// Extracted sections in ordinal order. Empty for unstructured content.
    pub sections: Vec<Section>,
    pub code_example: Option<CodeBlock>,
    /// Entries in display order.
    pub entries: Vec<Entry>,
    /// Present only when there are more entries than the TOC threshold.
    pub toc: Option<Vec<TocEntry>>,
}

impl Document {
    pub fn entry(&self, anchor: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.anchor == anchor)
    }
}
