use serde::{Deserialize, Serialize};

use crate::{
    models::Document,
    options::ParseOptions,
    parsing::{blocks::CodeBlock, parse_topic_with},
};

/// A learning topic as supplied by the profile data layer.
///
/// Accepts both `code_example` and `codeExample` style keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub content: String,
    #[serde(default, alias = "codeExample")]
    pub code_example: Option<String>,
    #[serde(default, alias = "codeLanguage")]
    pub code_language: Option<String>,
}

impl TopicRecord {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// The code example as a block, or `None` when absent or blank.
    pub fn code_block(&self) -> Option<CodeBlock> {
        self.code_example
            .as_deref()
            .filter(|code| !code.trim().is_empty())
            .map(|code| CodeBlock::new(code, self.code_language.clone()))
    }

    pub fn parse(&self, options: &ParseOptions) -> Document {
        parse_topic_with(&self.content, self.code_block(), options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_keys() {
        let record: TopicRecord = serde_json::from_str(
            r#"{"content":"x","codeExample":"print(1)","codeLanguage":"python"}"#,
        )
        .unwrap();
        assert_eq!(
            record.code_block(),
            Some(CodeBlock::new("print(1)", Some("python".into())))
        );
    }

    #[test]
    fn snake_case_keys_and_missing_code() {
        let record: TopicRecord = toml::from_str("content = \"x\"").unwrap();
        assert_eq!(record.code_block(), None);
    }

    #[test]
    fn blank_code_example_is_absent() {
        let record = TopicRecord {
            code_example: Some("  \n".into()),
            ..TopicRecord::new("x")
        };
        assert_eq!(record.code_block(), None);
    }
}
