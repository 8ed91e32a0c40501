//! # Section Extraction
//!
//! Splits topic content at its `**N. Title:**` boundaries.
//!
//! - **`marker`**: boundary line recognition (`parse_marker`)
//! - **`labels`**: the fixed ordinal → label table (`SectionLabels`)
//! - **`extract`**: `extract_sections`, slicing bodies and ordering by ordinal
//! - **`types`**: `Section`

pub mod extract;
pub mod labels;
pub mod marker;
pub mod types;

pub use extract::extract_sections;
pub use labels::SectionLabels;
pub use marker::{MarkerLine, SectionMarker, parse_marker};
pub use types::Section;
