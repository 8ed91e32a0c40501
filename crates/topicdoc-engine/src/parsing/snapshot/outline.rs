use crate::{
    models::{Document, EntryBody},
    parsing::{
        blocks::{Block, CodeBlock},
        inline::{InlineSegment, RichText},
    },
};

const INDENT: &str = "  ";

/// Renders `doc` as an indented outline, one node per line.
///
/// Prose leaves are shown as their inline segments so that snapshots pin
/// down tokenization as well as block structure.
pub fn outline(doc: &Document) -> String {
    let mut out = String::new();
    push(&mut out, 0, &format!("{:?}", doc.structure));

    if let Some(toc) = &doc.toc {
        let anchors: Vec<&str> = toc.iter().map(|t| t.anchor.as_str()).collect();
        push(&mut out, 0, &format!("toc: {}", anchors.join(", ")));
    }

    for entry in &doc.entries {
        push(&mut out, 0, &format!("# {} | {}", entry.anchor, entry.label));
        match &entry.body {
            EntryBody::Blocks(blocks) => push_blocks(&mut out, 1, blocks),
            EntryBody::Placeholder(text) => push(&mut out, 1, &format!("Placeholder {text:?}")),
            EntryBody::Code(code) => push_code(&mut out, 1, code),
        }
    }
    out
}

fn push_blocks(out: &mut String, depth: usize, blocks: &[Block]) {
    for block in blocks {
        match block {
            Block::Paragraph(text) => push(out, depth, &format!("Paragraph {}", segments(text))),
            Block::BulletList(items) => {
                push(out, depth, "BulletList");
                for item in items {
                    push(out, depth + 1, &format!("- {}", segments(&item.text)));
                    for child in &item.children {
                        push(out, depth + 2, &format!("- {}", segments(child)));
                    }
                }
            }
            Block::NumberedList(items) => {
                push(out, depth, "NumberedList");
                for (i, item) in items.iter().enumerate() {
                    push(out, depth + 1, &format!("{}. {}", i + 1, segments(item)));
                }
            }
            Block::Callout { kind, paragraphs } => {
                push(out, depth, &format!("Callout({kind:?})"));
                for p in paragraphs {
                    push(out, depth + 1, &format!("> {}", segments(p)));
                }
            }
            Block::ExampleSplit { problem, solution } => {
                push(out, depth, "ExampleSplit");
                push(out, depth + 1, "problem:");
                push_blocks(out, depth + 2, problem);
                push(out, depth + 1, "solution:");
                push_blocks(out, depth + 2, solution);
            }
            Block::Code(code) => push_code(out, depth, code),
        }
    }
}

fn push_code(out: &mut String, depth: usize, code: &CodeBlock) {
    match &code.language {
        Some(lang) => push(out, depth, &format!("Code({lang})")),
        None => push(out, depth, "Code"),
    }
    for line in code.code.lines() {
        push(out, depth + 1, &format!("| {line}"));
    }
}

fn segments(text: &RichText) -> String {
    text.segments
        .iter()
        .map(|s| match s {
            InlineSegment::Text(v) => format!("Text({v:?})"),
            InlineSegment::Bold(v) => format!("Bold({v:?})"),
            InlineSegment::Code(v) => format!("Code({v:?})"),
            InlineSegment::Link { value, href } => format!("Link({value:?} -> {href:?})"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn push(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
