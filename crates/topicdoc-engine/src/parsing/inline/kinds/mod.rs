//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Bold`**: `DELIM = b"**"`
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Link`**: `OPEN = b'['`, `LABEL_CLOSE = b"]("`, `CLOSE = b')'` plus the
//!   accepted URL schemes
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `**` or `` ` ``.

pub mod bold;
pub mod code_span;
pub mod link;

pub use bold::Bold;
pub use code_span::CodeSpan;
pub use link::Link;
