//! # Inline Parsing
//!
//! Cursor-based inline tokenizer with explicit precedence.
//!
//! ## Architecture
//!
//! Inline parsing runs over every prose leaf produced by block parsing:
//! paragraphs, list items, numbered items and callout paragraphs.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` (span-based parser output), `InlineSegment`
//!   (owned model type) and `RichText` (source + segments)
//! - **`kinds`**: Inline types with owned delimiters (Bold, CodeSpan, Link)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `parse_inline()` / `tokenize()` with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! Bold, then code spans, then links. Nothing nests: `` `[a](#b)` `` is a
//! single code segment and `**`x`**` is a single bold segment.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{parse_inline, tokenize};
pub use types::{InlineNode, InlineSegment, RichText};
