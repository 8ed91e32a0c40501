use crate::{
    models::{
        CODE_EXAMPLE_ANCHOR, Document, Entry, EntryBody, OVERVIEW_ANCHOR, Structure, TocEntry,
        section_anchor,
    },
    options::ParseOptions,
    parsing::{
        blocks::{Block, CodeBlock, parse_blocks, parse_example_section},
        inline::RichText,
        sections::Section,
        text::paragraphs,
    },
};

/// Sections up to this ordinal are shown before the code example.
pub const CODE_EXAMPLE_AFTER: u8 = 6;
/// The section whose body goes through the Problem/Solution splitter.
pub const EXAMPLE_SECTION: u8 = 7;

/// Builds a structured document: sections 1-6, the code example, then 7-8.
///
/// Absent sections get no entry; sections with an empty body get a
/// placeholder entry.
pub fn assemble(
    sections: Vec<Section>,
    code_example: Option<CodeBlock>,
    options: &ParseOptions,
) -> Document {
    let (early, late): (Vec<&Section>, Vec<&Section>) = sections
        .iter()
        .partition(|s| s.ordinal <= CODE_EXAMPLE_AFTER);

    let mut entries: Vec<Entry> = early.iter().map(|s| section_entry(s, options)).collect();
    entries.extend(code_example.clone().map(|c| code_entry(c, options)));
    entries.extend(late.iter().map(|s| section_entry(s, options)));

    let toc = build_toc(&entries, options.toc_threshold);
    Document {
        structure: Structure::Structured,
        sections,
        code_example,
        entries,
        toc,
    }
}

/// Builds the fallback document for content without section structure: one
/// overview entry of plain paragraphs, then the code example.
pub fn assemble_unstructured(
    content: &str,
    code_example: Option<CodeBlock>,
    options: &ParseOptions,
) -> Document {
    let blocks: Vec<Block> = paragraphs(content)
        .into_iter()
        .map(|p| Block::Paragraph(RichText::parse(p)))
        .collect();

    let mut entries = vec![];
    if !blocks.is_empty() {
        entries.push(Entry {
            ordinal: None,
            anchor: OVERVIEW_ANCHOR.to_string(),
            label: options.overview_label.clone(),
            body: EntryBody::Blocks(blocks),
        });
    }
    entries.extend(code_example.clone().map(|c| code_entry(c, options)));

    let toc = build_toc(&entries, options.toc_threshold);
    Document {
        structure: Structure::Unstructured,
        sections: vec![],
        code_example,
        entries,
        toc,
    }
}

/// One TOC entry per document entry, or `None` unless there are more than
/// `threshold` entries.
pub fn build_toc(entries: &[Entry], threshold: usize) -> Option<Vec<TocEntry>> {
    if entries.len() <= threshold {
        return None;
    }
    Some(
        entries
            .iter()
            .map(|e| TocEntry {
                anchor: e.anchor.clone(),
                label: e.label.clone(),
            })
            .collect(),
    )
}

fn section_entry(section: &Section, options: &ParseOptions) -> Entry {
    let body = if section.is_empty() {
        EntryBody::Placeholder(options.empty_section_placeholder.clone())
    } else if section.ordinal == EXAMPLE_SECTION {
        EntryBody::Blocks(parse_example_section(&section.body))
    } else {
        EntryBody::Blocks(parse_blocks(&section.body))
    };

    Entry {
        ordinal: Some(section.ordinal),
        anchor: section_anchor(section.ordinal),
        label: section.label.clone(),
        body,
    }
}

fn code_entry(code: CodeBlock, options: &ParseOptions) -> Entry {
    Entry {
        ordinal: None,
        anchor: CODE_EXAMPLE_ANCHOR.to_string(),
        label: options.code_example_label.clone(),
        body: EntryBody::Code(code),
    }
}
