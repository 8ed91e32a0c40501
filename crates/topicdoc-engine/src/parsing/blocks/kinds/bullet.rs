/// Bullet list item marker.
///
/// `- item`, `* item` or `• item`, with the marker followed by at least one
/// whitespace character.
pub struct Bullet;

impl Bullet {
    pub const MARKERS: [char; 3] = ['-', '*', '•'];

    /// Strips the marker from an (already de-indented) line, returning the
    /// item text.
    pub fn strip(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::MARKERS)?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some(rest.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_each_marker() {
        assert_eq!(Bullet::strip("- a"), Some("a"));
        assert_eq!(Bullet::strip("* b"), Some("b"));
        assert_eq!(Bullet::strip("•\tc"), Some("c"));
    }

    #[test]
    fn marker_needs_whitespace() {
        assert_eq!(Bullet::strip("-a"), None);
        assert_eq!(Bullet::strip("**Tip:**"), None);
        assert_eq!(Bullet::strip("-"), None);
    }
}
