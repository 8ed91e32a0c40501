use serde::{Deserialize, Serialize};

/// Display labels for the eight fixed sections, indexed by ordinal.
///
/// Labels come from this table rather than from the author's title so that
/// every topic renders the same headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionLabels(pub [String; 8]);

impl SectionLabels {
    /// The label for `ordinal` (1..=8), or an empty string when out of range.
    pub fn get(&self, ordinal: u8) -> &str {
        usize::from(ordinal)
            .checked_sub(1)
            .and_then(|i| self.0.get(i))
            .map_or("", String::as_str)
    }
}

impl Default for SectionLabels {
    fn default() -> Self {
        Self(
            [
                "Learning flow",
                "Learning material",
                "Key concepts",
                "Common pitfalls",
                "Best practices",
                "Practice exercises",
                "Worked example",
                "Further reading",
            ]
            .map(String::from),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_ordinal() {
        let labels = SectionLabels::default();
        assert_eq!(labels.get(1), "Learning flow");
        assert_eq!(labels.get(7), "Worked example");
    }

    #[test]
    fn out_of_range_is_empty() {
        let labels = SectionLabels::default();
        assert_eq!(labels.get(0), "");
        assert_eq!(labels.get(9), "");
    }
}
