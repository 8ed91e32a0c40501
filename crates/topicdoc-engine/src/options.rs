use serde::{Deserialize, Serialize};

use crate::parsing::sections::SectionLabels;

/// Knobs for document assembly. Every field has a default, so a partial
/// TOML table deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// A table of contents is built only when the document has more entries
    /// than this.
    pub toc_threshold: usize,
    pub section_labels: SectionLabels,
    pub code_example_label: String,
    /// Label of the single prose entry of unstructured content.
    pub overview_label: String,
    /// Shown for sections that were authored with an empty body.
    pub empty_section_placeholder: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            toc_threshold: 2,
            section_labels: SectionLabels::default(),
            code_example_label: "Code example".to_string(),
            overview_label: "Overview".to_string(),
            empty_section_placeholder: "No content for this section.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let options: ParseOptions = toml::from_str("toc_threshold = 4").unwrap();
        assert_eq!(options.toc_threshold, 4);
        assert_eq!(options.code_example_label, "Code example");
        assert_eq!(options.section_labels, SectionLabels::default());
    }

    #[test]
    fn labels_deserialize_from_array() {
        let options: ParseOptions = toml::from_str(
            r#"section_labels = ["a", "b", "c", "d", "e", "f", "g", "h"]"#,
        )
        .unwrap();
        assert_eq!(options.section_labels.get(8), "h");
    }

    #[test]
    fn wrong_label_count_is_rejected() {
        assert!(toml::from_str::<ParseOptions>(r#"section_labels = ["a"]"#).is_err());
    }
}
