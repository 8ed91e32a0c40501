//! # Block Parsing
//!
//! Two-phase block parsing of a section body.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` containing local facts (indentation, blank status, bullet /
//!    numbered markers, fence detection)
//!
//! 2. **Chunk Construction** (`builder`): a `ChunkBuilder` state machine groups
//!    lines into blank-line-delimited chunks, treating fenced code as a raw
//!    zone
//!
//! Each chunk is then classified into a [`Block`] by `chunk::classify_chunk`,
//! with list chunks passed through the `lists` normalizer. The `example`
//! module holds the section-7-only Problem/Solution splitter.
//!
//! ## Key Invariants
//!
//! - Lists nest exactly one level
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Classification never fails; unrecognized chunks are paragraphs

pub mod builder;
pub mod chunk;
pub mod classify;
pub mod example;
pub mod kinds;
pub mod lists;
pub mod open;
pub mod types;

pub use builder::ChunkBuilder;
pub use chunk::{Chunk, ChunkKind, classify_chunk};
pub use classify::{LineClass, TopicLineClassifier};
pub use example::{ExampleParts, parse_example_section, split_example};
pub use types::{Block, CalloutKind, CodeBlock, ListItem};

use crate::parsing::text::lines_with_spans;

/// Parses a section body (or any prose text) into blocks.
pub fn parse_blocks(body: &str) -> Vec<Block> {
    let classifier = TopicLineClassifier;
    let mut builder = ChunkBuilder::new();

    for lr in lines_with_spans(body, 0) {
        builder.push(classifier.classify(&lr));
    }

    builder
        .finish()
        .iter()
        .filter_map(classify_chunk)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::{InlineSegment, RichText};
    use pretty_assertions::assert_eq;

    fn para(s: &str) -> Block {
        Block::Paragraph(RichText::parse(s))
    }

    #[test]
    fn tip_callout() {
        assert_eq!(
            parse_blocks("**Tip:**\nRemember to test edge cases."),
            vec![Block::Callout {
                kind: CalloutKind::Tip,
                paragraphs: vec![RichText::parse("Remember to test edge cases.")],
            }]
        );
    }

    #[test]
    fn callout_body_on_opener_line() {
        assert_eq!(
            parse_blocks("**important:** back up first"),
            vec![Block::Callout {
                kind: CalloutKind::Important,
                paragraphs: vec![RichText::parse("back up first")],
            }]
        );
    }

    #[test]
    fn empty_callout_has_no_paragraphs() {
        assert_eq!(
            parse_blocks("**Note:**"),
            vec![Block::Callout {
                kind: CalloutKind::Note,
                paragraphs: vec![],
            }]
        );
    }

    #[test]
    fn callout_wins_over_list_shape() {
        let blocks = parse_blocks("**Note:**\n- looks like a list");
        assert!(matches!(
            blocks.as_slice(),
            [Block::Callout { kind: CalloutKind::Note, paragraphs }] if paragraphs.len() == 1
        ));
    }

    #[test]
    fn nested_bullet_list() {
        let blocks = parse_blocks("- a\n  - a1\n- b");
        assert_eq!(
            blocks,
            vec![Block::BulletList(vec![
                ListItem {
                    text: RichText::parse("a"),
                    children: vec![RichText::parse("a1")],
                },
                ListItem {
                    text: RichText::parse("b"),
                    children: vec![],
                },
            ])]
        );
    }

    #[test]
    fn numbered_list_discards_source_numbers() {
        assert_eq!(
            parse_blocks("3. first\n(7) second\n1. third"),
            vec![Block::NumberedList(vec![
                RichText::parse("first"),
                RichText::parse("second"),
                RichText::parse("third"),
            ])]
        );
    }

    #[test]
    fn mixed_list_lines_are_a_paragraph() {
        assert_eq!(
            parse_blocks("- bullet\n1. numbered"),
            vec![para("- bullet\n1. numbered")]
        );
    }

    #[test]
    fn list_with_prose_line_is_a_paragraph() {
        assert_eq!(
            parse_blocks("Steps:\n- one\n- two"),
            vec![para("Steps:\n- one\n- two")]
        );
    }

    #[test]
    fn chunks_classify_independently() {
        let blocks = parse_blocks("Intro text.\n\n- a\n- b\n\n1. x\n\n**Tip:** y");
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[0], para("Intro text."));
        assert!(matches!(blocks[1], Block::BulletList(_)));
        assert!(matches!(blocks[2], Block::NumberedList(_)));
        assert!(matches!(blocks[3], Block::Callout { .. }));
    }

    #[test]
    fn fenced_code_block() {
        assert_eq!(
            parse_blocks("```python\nprint('hi')\n\nprint('bye')\n```"),
            vec![Block::Code(CodeBlock::new(
                "print('hi')\n\nprint('bye')",
                Some("python".into())
            ))]
        );
    }

    #[test]
    fn paragraph_leaves_are_tokenized() {
        let blocks = parse_blocks("See **this**.");
        let [Block::Paragraph(text)] = blocks.as_slice() else {
            panic!("expected paragraph, got {blocks:?}");
        };
        assert_eq!(
            text.segments,
            vec![
                InlineSegment::Text("See ".into()),
                InlineSegment::Bold("this".into()),
                InlineSegment::Text(".".into()),
            ]
        );
    }

    #[test]
    fn orphan_only_list_leaves_no_block() {
        assert_eq!(
            parse_blocks("Intro\n\n  - orphan\n  - orphan2"),
            vec![para("Intro")]
        );
    }

    #[test]
    fn crlf_paragraph_lines_are_joined_with_lf() {
        assert_eq!(
            parse_blocks("line a\r\nline b\r\n\r\n- x\r\n  - y\r\n"),
            vec![
                para("line a\nline b"),
                Block::BulletList(vec![ListItem {
                    text: RichText::parse("x"),
                    children: vec![RichText::parse("y")],
                }]),
            ]
        );
    }

    #[test]
    fn crlf_callout_body() {
        assert_eq!(
            parse_blocks("**Note:**\r\nfirst\r\nsecond"),
            vec![Block::Callout {
                kind: CalloutKind::Note,
                paragraphs: vec![RichText::parse("first\nsecond")],
            }]
        );
    }

    #[test]
    fn blank_body_has_no_blocks() {
        assert!(parse_blocks("  \n\n").is_empty());
    }
}
