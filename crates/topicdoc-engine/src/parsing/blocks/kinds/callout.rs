use crate::parsing::blocks::types::CalloutKind;

/// Callout opener recognition: `**Tip:**`, `**Note:**`, `**Important:**`.
pub struct Callout;

impl Callout {
    pub const OPENERS: [(&'static str, CalloutKind); 3] = [
        ("**Tip:**", CalloutKind::Tip),
        ("**Note:**", CalloutKind::Note),
        ("**Important:**", CalloutKind::Important),
    ];

    /// Matches an opener at the start of `chunk` (ASCII case-insensitive),
    /// returning the kind and the remaining body.
    pub fn strip_opener(chunk: &str) -> Option<(CalloutKind, &str)> {
        let chunk = chunk.trim_start();
        Self::OPENERS.iter().find_map(|(opener, kind)| {
            let head = chunk.get(..opener.len())?;
            head.eq_ignore_ascii_case(opener)
                .then(|| (*kind, &chunk[opener.len()..]))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_each_opener() {
        assert_eq!(
            Callout::strip_opener("**Tip:** body"),
            Some((CalloutKind::Tip, " body"))
        );
        assert_eq!(
            Callout::strip_opener("**Note:**\nx"),
            Some((CalloutKind::Note, "\nx"))
        );
        assert_eq!(
            Callout::strip_opener("**Important:**"),
            Some((CalloutKind::Important, ""))
        );
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(
            Callout::strip_opener("**TIP:** shout"),
            Some((CalloutKind::Tip, " shout"))
        );
    }

    #[test]
    fn opener_must_lead_the_chunk() {
        assert_eq!(Callout::strip_opener("A **Tip:** later"), None);
        assert_eq!(Callout::strip_opener("**Tips:**"), None);
        assert_eq!(Callout::strip_opener("**Ti"), None);
    }
}
