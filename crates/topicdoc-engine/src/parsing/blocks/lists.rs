use crate::parsing::inline::RichText;

use super::{classify::LineClass, types::ListItem};

/// Indentation (in columns) at which a bullet becomes a child item.
pub const CHILD_INDENT: usize = 2;

/// Turns bullet lines into top-level items with one level of children.
///
/// A line indented by at least [`CHILD_INDENT`] columns is a child of the most
/// recent top-level item; deeper indentation flattens into that same level.
/// A child with no preceding top-level item is dropped.
pub fn normalize(lines: &[LineClass<'_>]) -> Vec<ListItem> {
    let mut items: Vec<ListItem> = vec![];

    for line in lines {
        let Some(text) = line.bullet else {
            continue;
        };

        if line.indent < CHILD_INDENT {
            items.push(ListItem {
                text: RichText::parse(text),
                children: vec![],
            });
            continue;
        }

        match items.last_mut() {
            Some(parent) => parent.children.push(RichText::parse(text)),
            None => log::warn!(
                "dropping nested list item with no parent at byte {}: {text:?}",
                line.line.start
            ),
        }
    }

    items
}
