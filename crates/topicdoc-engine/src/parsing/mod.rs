//! # Topic Parsing
//!
//! Converts learning-topic content into a [`Document`].
//!
//! ## Pipeline
//!
//! 1. **`sections`**: split content at `**N. Title:**` boundaries
//! 2. **`blocks`**: classify each section body into blocks (lists are
//!    normalized, section 7 is split into problem and solution)
//! 3. **`inline`**: tokenize every prose leaf into bold, code and link
//!    segments
//! 4. **`assemble`**: order sections around the code example and build the
//!    table of contents
//!
//! Parsing never fails. Content without a section-1 boundary falls back to
//! plain paragraphs, and anything unrecognized degrades to a paragraph.

pub mod assemble;
pub mod blocks;
pub mod inline;
pub mod sections;
pub mod snapshot;
pub mod text;

use crate::{models::Document, options::ParseOptions};

use assemble::{assemble, assemble_unstructured};
use blocks::CodeBlock;
use sections::extract_sections;

/// Parses topic content with default options.
pub fn parse_topic(content: &str, code_example: Option<CodeBlock>) -> Document {
    parse_topic_with(content, code_example, &ParseOptions::default())
}

/// Parses topic content. A blank code example is treated as absent.
pub fn parse_topic_with(
    content: &str,
    code_example: Option<CodeBlock>,
    options: &ParseOptions,
) -> Document {
    let code_example = code_example.filter(|c| !c.code.trim().is_empty());

    match extract_sections(content, &options.section_labels) {
        Some(sections) => {
            log::debug!("parsed {} sections", sections.len());
            assemble(sections, code_example, options)
        }
        None => assemble_unstructured(content, code_example, options),
    }
}
