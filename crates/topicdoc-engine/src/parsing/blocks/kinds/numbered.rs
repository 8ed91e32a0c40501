/// Numbered list item marker: `(N) item` or `N. item`.
///
/// The number itself is discarded; items are renumbered from their position.
pub struct Numbered;

impl Numbered {
    /// Strips the marker from an (already de-indented) line, returning the
    /// item text.
    pub fn strip(line: &str) -> Option<&str> {
        let rest = match line.strip_prefix('(') {
            Some(inner) => {
                let rest = strip_digits(inner)?;
                rest.strip_prefix(')')?
            }
            None => strip_digits(line)?.strip_prefix('.')?,
        };
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some(rest.trim())
    }
}

/// Strips one or more leading ASCII digits.
fn strip_digits(s: &str) -> Option<&str> {
    let rest = s.trim_start_matches(|c: char| c.is_ascii_digit());
    (rest.len() < s.len()).then_some(rest)
}
