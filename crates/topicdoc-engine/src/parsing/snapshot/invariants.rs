use std::collections::HashSet;

use crate::{
    models::{CODE_EXAMPLE_ANCHOR, Document, Structure},
    parsing::{assemble::CODE_EXAMPLE_AFTER, sections::SectionMarker},
};

/// Panics if `doc` breaks a structural invariant of parsing `content`.
pub fn check(content: &str, doc: &Document) {
    let n = content.len();

    let mut prev_ordinal = 0;
    for s in &doc.sections {
        assert!(
            SectionMarker::ORDINALS.contains(&s.ordinal),
            "section ordinal out of range: {}",
            s.ordinal
        );
        assert!(
            s.ordinal > prev_ordinal,
            "sections not in strictly increasing ordinal order: {} after {}",
            s.ordinal,
            prev_ordinal
        );
        prev_ordinal = s.ordinal;

        assert!(
            s.span.start <= s.span.end && s.span.end <= n,
            "section span out of bounds: {:?} (content len: {})",
            s.span,
            n
        );
        assert_eq!(
            s.span.slice(content),
            s.body,
            "section {} body does not match its span",
            s.ordinal
        );
    }

    if doc.structure == Structure::Unstructured {
        assert!(
            doc.sections.is_empty(),
            "unstructured document has sections"
        );
    }

    let mut anchors = HashSet::new();
    for e in &doc.entries {
        assert!(anchors.insert(&e.anchor), "duplicate anchor: {}", e.anchor);
    }

    let ordinals: Vec<u8> = doc.entries.iter().filter_map(|e| e.ordinal).collect();
    assert!(
        ordinals.windows(2).all(|w| w[0] < w[1]),
        "entries out of ordinal order: {ordinals:?}"
    );

    if let Some(code_at) = doc
        .entries
        .iter()
        .position(|e| e.anchor == CODE_EXAMPLE_ANCHOR)
    {
        for (i, e) in doc.entries.iter().enumerate() {
            if let Some(ordinal) = e.ordinal {
                assert_eq!(
                    i < code_at,
                    ordinal <= CODE_EXAMPLE_AFTER,
                    "section {ordinal} on the wrong side of the code example"
                );
            }
        }
    }

    if let Some(toc) = &doc.toc {
        assert_eq!(toc.len(), doc.entries.len(), "toc does not mirror entries");
        for (t, e) in toc.iter().zip(&doc.entries) {
            assert_eq!(t.anchor, e.anchor);
            assert_eq!(t.label, e.label);
        }
    }
}
