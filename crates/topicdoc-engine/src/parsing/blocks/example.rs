use super::{parse_blocks, types::Block};

/// Markers that split a worked example into its problem and solution halves.
pub struct ExampleMarkers;

impl ExampleMarkers {
    pub const PROBLEM: &'static str = "Problem:";
    pub const SOLUTION: &'static str = "Solution:";
    /// Optional emphasis wrapped around either marker (`**Problem:**`).
    pub const WRAP: &'static str = "**";
}

/// The two halves of a worked example, markers removed and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleParts {
    pub problem: String,
    pub solution: String,
}

/// Splits a worked-example body at its `Solution:` marker.
///
/// Requires a `Problem:` marker followed later by a `Solution:` marker. The
/// split point is the first `Solution:` that starts a line; failing that, the
/// first one preceded by whitespace. Returns `None` when no split point
/// exists.
pub fn split_example(body: &str) -> Option<ExampleParts> {
    let problem_at = body.find(ExampleMarkers::PROBLEM)?;
    let search_from = problem_at + ExampleMarkers::PROBLEM.len();
    if !body[search_from..].contains(ExampleMarkers::SOLUTION) {
        return None;
    }

    let Some(split_at) = find_split(body, search_from) else {
        log::debug!("example has Problem/Solution markers but no split point");
        return None;
    };

    Some(ExampleParts {
        problem: remove_marker(&body[..split_at], ExampleMarkers::PROBLEM),
        solution: remove_marker(&body[split_at..], ExampleMarkers::SOLUTION),
    })
}

/// Parses a section-7 body, producing a single [`Block::ExampleSplit`] when
/// the body splits and plain blocks otherwise.
pub fn parse_example_section(body: &str) -> Vec<Block> {
    match split_example(body) {
        Some(parts) => vec![Block::ExampleSplit {
            problem: parse_blocks(&parts.problem),
            solution: parse_blocks(&parts.solution),
        }],
        None => parse_blocks(body),
    }
}

/// Finds where the solution half starts, preferring a line-anchored marker.
fn find_split(body: &str, from: usize) -> Option<usize> {
    let starts: Vec<usize> = body[from..]
        .match_indices(ExampleMarkers::SOLUTION)
        .map(|(i, _)| marker_start(body, from + i))
        .filter(|&start| start >= from)
        .collect();

    let line_anchored = starts.iter().copied().find(|&start| {
        let line_start = body[..start].rfind('\n').map_or(0, |i| i + 1);
        line_start >= from && body[line_start..start].trim().is_empty()
    });

    line_anchored.or_else(|| {
        starts.iter().copied().find(|&start| {
            body[..start]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace)
        })
    })
}

/// Start of the marker found at `at`, including a leading `**` wrapper.
fn marker_start(body: &str, at: usize) -> usize {
    if body[..at].ends_with(ExampleMarkers::WRAP) {
        at - ExampleMarkers::WRAP.len()
    } else {
        at
    }
}

/// Removes the first `marker` (and any `**` wrapped around it) and trims.
fn remove_marker(part: &str, marker: &str) -> String {
    let Some(at) = part.find(marker) else {
        return part.trim().to_string();
    };
    let start = marker_start(part, at);
    let mut end = at + marker.len();
    if start < at && part[end..].starts_with(ExampleMarkers::WRAP) {
        end += ExampleMarkers::WRAP.len();
    }

    let mut out = String::with_capacity(part.len());
    out.push_str(&part[..start]);
    out.push_str(&part[end..]);
    out.trim().to_string()
}
