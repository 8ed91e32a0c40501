//! Parser for the learning-topic markdown dialect.
//!
//! [`parse_topic`] turns topic content and an optional code example into a
//! [`Document`] that renderers walk.

pub mod io;
pub mod models;
pub mod options;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use options::ParseOptions;
pub use parsing::{blocks::CodeBlock, parse_topic, parse_topic_with};
pub use render::RenderOptions;
