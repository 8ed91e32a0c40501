use crate::parsing::text::Span;

use super::{
    chunk::{Chunk, ChunkKind},
    classify::LineClass,
    kinds::{CodeFence, FenceKind},
    open::{BlockOpen, try_open_leaf},
};

#[derive(Debug)]
enum LeafState<'a> {
    None,
    Prose {
        lines: Vec<LineClass<'a>>,
    },
    Fence {
        kind: FenceKind,
        language: Option<String>,
        start: Span,
        lines: Vec<LineClass<'a>>,
    },
}

/// Phase 2 of block parsing: groups classified lines into chunks.
///
/// Prose chunks end at blank lines; fenced code is a raw zone that only
/// ends at a matching closing fence (or end of input).
pub struct ChunkBuilder<'a> {
    leaf: LeafState<'a>,
    out: Vec<Chunk<'a>>,
}

impl<'a> ChunkBuilder<'a> {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass<'a>) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            self.flush_prose();
            return;
        }

        if let Some(open) = try_open_leaf(&c) {
            self.flush_prose();
            self.open_leaf(open, c.line);
            return;
        }

        self.extend_prose(c);
    }

    pub fn finish(mut self) -> Vec<Chunk<'a>> {
        // EOF flush
        self.flush_prose();
        self.flush_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn open_leaf(&mut self, open: BlockOpen, line: Span) {
        match open {
            BlockOpen::FencedCode { kind, language } => {
                self.leaf = LeafState::Fence {
                    kind,
                    language,
                    start: line,
                    lines: vec![],
                }
            }
        }
    }

    fn consume_fence_line(&mut self, c: LineClass<'a>) {
        let LeafState::Fence { kind, lines, .. } = &mut self.leaf else {
            return;
        };

        if CodeFence::closes(*kind, c.fence_sig) {
            let end = c.line.start + c.text.len();
            self.emit_fence(end);
        } else {
            lines.push(c);
        }
    }

    fn extend_prose(&mut self, c: LineClass<'a>) {
        match &mut self.leaf {
            LeafState::Prose { lines } => lines.push(c),
            _ => self.leaf = LeafState::Prose { lines: vec![c] },
        }
    }

    fn flush_prose(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Prose { lines } = prev {
            let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
                return;
            };
            let span = Span::new(first.line.start, last.line.start + last.text.len());
            self.out.push(Chunk {
                kind: ChunkKind::Prose,
                span,
                lines,
            });
        } else {
            self.leaf = prev; // put back non-prose leaf (e.g. fence)
        }
    }

    fn flush_fence(&mut self) {
        let end = match &self.leaf {
            LeafState::Fence { start, lines, .. } => lines
                .last()
                .map_or(start.start + start.len(), |l| l.line.start + l.text.len()),
            _ => return,
        };
        // Unterminated fence: emit as fenced code anyway
        self.emit_fence(end);
    }

    fn emit_fence(&mut self, end: usize) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence {
            kind,
            language,
            start,
            lines,
        } = prev
        {
            self.out.push(Chunk {
                kind: ChunkKind::Fence { kind, language },
                span: Span::new(start.start, end),
                lines,
            });
        }
    }
}

impl Default for ChunkBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
