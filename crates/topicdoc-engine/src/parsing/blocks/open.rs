use super::{
    classify::LineClass,
    kinds::{CodeFence, FenceKind},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode {
        kind: FenceKind,
        language: Option<String>,
    },
}

/// Detects lines that open a raw-zone block regardless of the chunk they
/// appear in.
pub fn try_open_leaf(c: &LineClass<'_>) -> Option<BlockOpen> {
    let sig = c.fence_sig?;
    Some(BlockOpen::FencedCode {
        kind: CodeFence::kind(sig),
        language: CodeFence::info(c.text),
    })
}
