use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
    models::{Document, EntryBody},
    parsing::{
        blocks::{Block, CodeBlock},
        inline::{InlineSegment, RichText},
    },
};

use super::RenderOptions;

/// Renders `doc` as an HTML fragment.
pub fn render_document(doc: &Document, options: &RenderOptions) -> String {
    let mut html = String::new();

    if let Some(toc) = &doc.toc {
        html.push_str("<nav class=\"toc\">\n");
        html.push_str(&format!("<h2>{}</h2>\n<ol>\n", encode_text(&options.toc_heading)));
        for t in toc {
            html.push_str(&format!(
                "<li><a href=\"#{}\">{}</a></li>\n",
                encode_double_quoted_attribute(&t.anchor),
                encode_text(&t.label)
            ));
        }
        html.push_str("</ol>\n</nav>\n");
    }

    for entry in &doc.entries {
        html.push_str(&format!(
            "<section id=\"{}\">\n",
            encode_double_quoted_attribute(&entry.anchor)
        ));
        html.push_str(&format!("<h2>{}</h2>\n", encode_text(&entry.label)));
        match &entry.body {
            EntryBody::Blocks(blocks) => render_blocks(&mut html, blocks, options),
            EntryBody::Placeholder(text) => {
                html.push_str(&format!("<p class=\"placeholder\">{}</p>\n", encode_text(text)));
            }
            EntryBody::Code(code) => render_code(&mut html, code),
        }
        html.push_str("</section>\n");
    }

    html
}

fn render_blocks(html: &mut String, blocks: &[Block], options: &RenderOptions) {
    for block in blocks {
        match block {
            Block::Paragraph(text) => {
                html.push_str(&format!("<p>{}</p>\n", render_inline(text)));
            }
            Block::BulletList(items) => {
                html.push_str("<ul>\n");
                for item in items {
                    html.push_str(&format!("<li>{}", render_inline(&item.text)));
                    if !item.children.is_empty() {
                        html.push_str("\n<ul>\n");
                        for child in &item.children {
                            html.push_str(&format!("<li>{}</li>\n", render_inline(child)));
                        }
                        html.push_str("</ul>\n");
                    }
                    html.push_str("</li>\n");
                }
                html.push_str("</ul>\n");
            }
            Block::NumberedList(items) => {
                html.push_str("<ol>\n");
                for (i, item) in items.iter().enumerate() {
                    html.push_str(&format!(
                        "<li value=\"{}\">{}</li>\n",
                        i + 1,
                        render_inline(item)
                    ));
                }
                html.push_str("</ol>\n");
            }
            Block::Callout { kind, paragraphs } => {
                let label = kind.label();
                html.push_str(&format!(
                    "<aside class=\"callout callout-{}\">\n<strong>{}</strong>\n",
                    label.to_ascii_lowercase(),
                    label
                ));
                for p in paragraphs {
                    html.push_str(&format!("<p>{}</p>\n", render_inline(p)));
                }
                html.push_str("</aside>\n");
            }
            Block::ExampleSplit { problem, solution } => {
                html.push_str("<div class=\"example\">\n");
                for (class, label, part) in [
                    ("problem", &options.problem_label, problem),
                    ("solution", &options.solution_label, solution),
                ] {
                    html.push_str(&format!(
                        "<div class=\"example-{class}\">\n<h3>{}</h3>\n",
                        encode_text(label)
                    ));
                    render_blocks(html, part, options);
                    html.push_str("</div>\n");
                }
                html.push_str("</div>\n");
            }
            Block::Code(code) => render_code(html, code),
        }
    }
}

fn render_code(html: &mut String, code: &CodeBlock) {
    match &code.language {
        Some(lang) => html.push_str(&format!(
            "<pre><code class=\"language-{}\">",
            encode_double_quoted_attribute(lang)
        )),
        None => html.push_str("<pre><code>"),
    }
    html.push_str(&encode_text(&code.code));
    html.push_str("</code></pre>\n");
}

fn render_inline(text: &RichText) -> String {
    text.segments
        .iter()
        .map(|s| match s {
            InlineSegment::Text(v) => encode_text(v).into_owned(),
            InlineSegment::Bold(v) => format!("<strong>{}</strong>", encode_text(v)),
            InlineSegment::Code(v) => format!("<code>{}</code>", encode_text(v)),
            InlineSegment::Link { value, href } => {
                format!(
                    "<a href=\"{}\">{}</a>",
                    encode_double_quoted_attribute(href),
                    encode_text(value)
                )
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_topic;

    fn render(content: &str, code: Option<CodeBlock>) -> String {
        render_document(&parse_topic(content, code), &RenderOptions::default())
    }

    #[test]
    fn escapes_text_and_attributes() {
        let html = render("**1. Flow:**\nUse <b> & [x](https://a.b/?q=\"1\")", None);
        assert!(html.contains("Use &lt;b&gt; &amp; "));
        assert!(html.contains("<a href=\"https://a.b/?q=&quot;1&quot;\">x</a>"));
    }

    #[test]
    fn toc_links_to_sections() {
        let html = render(
            "**1. A:**\na\n**2. B:**\nb\n**3. C:**\nc",
            None,
        );
        assert!(html.starts_with("<nav class=\"toc\">\n<h2>Contents</h2>\n"));
        assert!(html.contains("<li><a href=\"#section-3\">Key concepts</a></li>"));
        assert!(html.contains("<section id=\"section-2\">\n<h2>Learning material</h2>\n"));
    }

    #[test]
    fn no_toc_for_small_documents() {
        assert!(!render("**1. A:**\na", None).contains("<nav"));
    }

    #[test]
    fn nested_list_and_numbering() {
        let html = render("**1. A:**\n- a\n  - a1\n\n5. x\n9. y", None);
        assert!(html.contains("<ul>\n<li>a\n<ul>\n<li>a1</li>\n</ul>\n</li>\n</ul>\n"));
        assert!(html.contains("<li value=\"1\">x</li>\n<li value=\"2\">y</li>"));
    }

    #[test]
    fn callout_and_example_panels() {
        let html = render(
            "**1. A:**\n**Tip:** test it\n**7. Example:**\nProblem: add\nSolution: `a + b`",
            None,
        );
        assert!(html.contains("<aside class=\"callout callout-tip\">\n<strong>Tip</strong>\n<p>test it</p>\n</aside>"));
        assert!(html.contains("<div class=\"example-problem\">\n<h3>Problem</h3>\n<p>add</p>\n</div>"));
        assert!(html.contains("<h3>Solution</h3>\n<p><code>a + b</code></p>"));
    }

    #[test]
    fn code_example_is_escaped() {
        let html = render(
            "plain",
            Some(CodeBlock::new("a < b", Some("rust".into()))),
        );
        assert!(html.contains("<pre><code class=\"language-rust\">a &lt; b</code></pre>"));
    }
}
