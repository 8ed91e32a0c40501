/// Link inline type with owned delimiters and accepted URL schemes.
///
/// `[label](url)` is only a link when `url` starts with one of
/// [`Link::SCHEMES`]. Relative or bare targets stay literal text.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const LABEL_CLOSE: &'static [u8; 2] = b"](";
    pub const CLOSE: u8 = b')';
    pub const SCHEMES: [&'static str; 3] = ["http://", "https://", "#"];

    /// Whether `href` is an acceptable link target.
    pub fn accepts(href: &str) -> bool {
        Self::SCHEMES.iter().any(|scheme| href.starts_with(scheme))
            && !href.chars().any(char::is_whitespace)
    }
}
