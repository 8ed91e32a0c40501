//! Consumers of the parsed [`Document`](crate::models::Document).
//!
//! Renderers only walk the document model; they never look at the source
//! content.

pub mod html;

use serde::{Deserialize, Serialize};

pub use html::render_document;

/// Fixed strings used by renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub toc_heading: String,
    pub problem_label: String,
    pub solution_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            toc_heading: "Contents".to_string(),
            problem_label: "Problem".to_string(),
            solution_label: "Solution".to_string(),
        }
    }
}
