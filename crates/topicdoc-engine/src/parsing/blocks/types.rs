use serde::Serialize;

use crate::parsing::inline::RichText;

/// The flavor of a highlighted aside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CalloutKind {
    Tip,
    Note,
    Important,
}

impl CalloutKind {
    /// Display label for the callout heading.
    pub fn label(self) -> &'static str {
        match self {
            CalloutKind::Tip => "Tip",
            CalloutKind::Note => "Note",
            CalloutKind::Important => "Important",
        }
    }
}

/// A bullet list item with at most one level of children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub text: RichText,
    pub children: Vec<RichText>,
}

/// A block of source code, either fenced inside a section or supplied
/// alongside the topic as its code example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub code: String,
    pub language: Option<String>,
}

impl CodeBlock {
    /// Creates a code block, discarding a blank language.
    pub fn new(code: impl Into<String>, language: Option<String>) -> Self {
        Self {
            code: code.into(),
            language: language
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty()),
        }
    }
}

/// A structurally classified chunk of a section body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    Paragraph(RichText),
    BulletList(Vec<ListItem>),
    /// Items in source order. Source numbering is discarded; renderers number
    /// items from their index.
    NumberedList(Vec<RichText>),
    Callout {
        kind: CalloutKind,
        paragraphs: Vec<RichText>,
    },
    /// Section 7 only: a worked example split into its two halves.
    ExampleSplit {
        problem: Vec<Block>,
        solution: Vec<Block>,
    },
    Code(CodeBlock),
}
