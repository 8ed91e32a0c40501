pub mod lines;
pub mod paragraphs;
pub mod span;

pub use lines::{LineRef, lines_with_spans};
pub use paragraphs::paragraphs;
pub use span::Span;
