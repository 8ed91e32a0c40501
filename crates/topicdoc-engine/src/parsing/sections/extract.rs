use std::collections::BTreeMap;

use crate::parsing::{
    blocks::kinds::{CodeFence, FenceKind},
    text::{Span, lines_with_spans},
};

use super::{
    labels::SectionLabels,
    marker::{MarkerLine, parse_marker},
    types::Section,
};

/// A boundary that has been seen but whose body has not been closed yet.
struct OpenSection<'a> {
    ordinal: u8,
    title: &'a str,
    body_start: usize,
}

/// Splits topic content into its numbered sections.
///
/// Returns `None` when the content has no valid section-1 boundary, which
/// marks it as unstructured. Otherwise returns the sections in ordinal order;
/// gaps are allowed and a repeated ordinal keeps its last occurrence. Text
/// before the first boundary is dropped, and out-of-range boundary lines stay
/// part of the surrounding body. Lines inside a fenced code block are never
/// boundaries.
pub fn extract_sections(content: &str, labels: &SectionLabels) -> Option<Vec<Section>> {
    let mut sections: BTreeMap<u8, Section> = BTreeMap::new();
    let mut open: Option<OpenSection<'_>> = None;
    let mut saw_first = false;
    let mut fence: Option<FenceKind> = None;

    for line in lines_with_spans(content, 0) {
        let sig = CodeFence::sig(line.content());
        if let Some(kind) = fence {
            if CodeFence::closes(kind, sig) {
                fence = None;
            }
            continue;
        }
        if let Some(sig) = sig {
            fence = Some(CodeFence::kind(sig));
            continue;
        }

        let heading = match parse_marker(line.content()) {
            Some(MarkerLine::Boundary { ordinal, title }) => (ordinal, title),
            Some(MarkerLine::OutOfRange { number }) => {
                log::debug!(
                    "ignoring section marker {number} at byte {}: outside 1..=8",
                    line.span.start
                );
                continue;
            }
            None => continue,
        };

        if let Some(prev) = open.take() {
            close_section(content, labels, prev, line.span.start, &mut sections);
        }
        let (ordinal, title) = heading;
        saw_first |= ordinal == 1;
        open = Some(OpenSection {
            ordinal,
            title,
            body_start: line.span.end,
        });
    }

    if let Some(prev) = open.take() {
        close_section(content, labels, prev, content.len(), &mut sections);
    }

    if !saw_first {
        log::debug!("no section 1 boundary found; treating content as unstructured");
        return None;
    }
    Some(sections.into_values().collect())
}

fn close_section(
    content: &str,
    labels: &SectionLabels,
    open: OpenSection<'_>,
    body_end: usize,
    sections: &mut BTreeMap<u8, Section>,
) {
    let span = trimmed_span(content, Span::new(open.body_start, body_end));
    let section = Section {
        ordinal: open.ordinal,
        label: labels.get(open.ordinal).to_string(),
        title: open.title.to_string(),
        body: span.slice(content).to_string(),
        span,
    };

    if sections.insert(open.ordinal, section).is_some() {
        log::warn!(
            "section {} appears more than once; keeping the later one",
            open.ordinal
        );
    }
}

/// Narrows `raw` to exclude leading and trailing whitespace.
fn trimmed_span(content: &str, raw: Span) -> Span {
    let s = raw.slice(content);
    let start = raw.start + (s.len() - s.trim_start().len());
    Span::new(start, start + s.trim().len())
}
