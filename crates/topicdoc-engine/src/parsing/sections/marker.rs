/// Section boundary syntax: `**<N>. <title>**` with an optional trailing `:`
/// (or a `:` at the end of the title), alone on its line.
pub struct SectionMarker;

impl SectionMarker {
    pub const DELIM: &'static str = "**";
    pub const NUMBER_END: char = '.';
    pub const TITLE_END: char = ':';
    pub const ORDINALS: std::ops::RangeInclusive<u8> = 1..=8;
}

/// What a boundary-shaped line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerLine<'a> {
    /// A valid boundary for ordinal 1..=8.
    Boundary { ordinal: u8, title: &'a str },
    /// Boundary-shaped, but the number is outside 1..=8 or does not parse.
    OutOfRange { number: &'a str },
}

/// Recognizes a section boundary line, returning `None` for ordinary lines.
pub fn parse_marker(line: &str) -> Option<MarkerLine<'_>> {
    let rest = line.trim().strip_prefix(SectionMarker::DELIM)?;

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let (number, rest) = rest.split_at(digits_len);
    let rest = rest.strip_prefix(SectionMarker::NUMBER_END)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let title_end = rest.find('*')?;
    let (title, rest) = rest.split_at(title_end);
    let tail = rest.strip_prefix(SectionMarker::DELIM)?;
    let tail = tail.strip_prefix(SectionMarker::TITLE_END).unwrap_or(tail);
    if !tail.is_empty() {
        return None;
    }

    let title = title.trim();
    let title = title.strip_suffix(SectionMarker::TITLE_END).unwrap_or(title).trim_end();
    if title.is_empty() {
        return None;
    }

    match number.parse::<u8>() {
        Ok(ordinal) if SectionMarker::ORDINALS.contains(&ordinal) => {
            Some(MarkerLine::Boundary { ordinal, title })
        }
        _ => Some(MarkerLine::OutOfRange { number }),
    }
}
