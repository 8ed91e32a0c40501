use crate::parsing::{
    inline::RichText,
    text::{Span, paragraphs},
};

use super::{
    classify::LineClass,
    kinds::{Callout, FenceKind},
    lists,
    types::{Block, CodeBlock},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkKind {
    /// Blank-line-delimited prose awaiting classification.
    Prose,
    /// Fenced code; `lines` holds the lines between the fences.
    Fence {
        kind: FenceKind,
        language: Option<String>,
    },
}

/// A run of lines produced by the [`ChunkBuilder`](super::ChunkBuilder).
#[derive(Debug, Clone)]
pub struct Chunk<'a> {
    pub kind: ChunkKind,
    /// Span of the chunk in the parsed text, excluding the final line break.
    pub span: Span,
    pub lines: Vec<LineClass<'a>>,
}

/// Decides which [`Block`] a chunk is.
///
/// Decision order, first match wins:
/// 1. fenced code
/// 2. callout opener (`**Tip:**`, `**Note:**`, `**Important:**`)
/// 3. every line is a bullet item
/// 4. every line is a numbered item
/// 5. paragraph
///
/// Returns `None` for a bullet chunk whose items were all dropped as orphans.
pub fn classify_chunk(chunk: &Chunk<'_>) -> Option<Block> {
    let text = chunk
        .lines
        .iter()
        .map(|l| l.text)
        .collect::<Vec<_>>()
        .join("\n");

    if let ChunkKind::Fence { language, .. } = &chunk.kind {
        return Some(Block::Code(CodeBlock::new(text, language.clone())));
    }

    if let Some((kind, rest)) = Callout::strip_opener(&text) {
        return Some(Block::Callout {
            kind,
            paragraphs: paragraphs(rest).into_iter().map(RichText::parse).collect(),
        });
    }

    if !chunk.lines.is_empty() {
        if chunk.lines.iter().all(|l| l.bullet.is_some()) {
            let items = lists::normalize(&chunk.lines);
            return (!items.is_empty()).then_some(Block::BulletList(items));
        }
        if chunk.lines.iter().all(|l| l.numbered.is_some()) {
            return Some(Block::NumberedList(
                chunk
                    .lines
                    .iter()
                    .filter_map(|l| l.numbered)
                    .map(RichText::parse)
                    .collect(),
            ));
        }
    }

    Some(Block::Paragraph(RichText::parse(text.trim())))
}
