// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_topic_content(paragraphs_per_section: usize) -> String {
    let mut content = String::new();

    for ordinal in 1..=8 {
        content.push_str(&format!("**{ordinal}. Section {ordinal}:**\n"));
        for i in 0..paragraphs_per_section {
            content.push_str(&generate_section_chunk(ordinal, i));
            content.push('\n');
        }
    }

    content
}

#[allow(dead_code)]
pub fn generate_unstructured_content(paragraphs: usize) -> String {
    "A paragraph with **bold**, `code` and a [link](https://example.com).\n\n".repeat(paragraphs)
}

#[allow(dead_code)]
fn generate_section_chunk(ordinal: usize, i: usize) -> String {
    match (ordinal, i % 4) {
        (7, 0) => "**Problem:** add two numbers.\n\n**Solution:** use `a + b`.\n".to_string(),
        (_, 0) => "Some paragraph content with **bold** text and a [link](#top).\n".to_string(),
        (_, 1) => "- Bullet point\n  - Nested item\n- Another item\n".to_string(),
        (_, 2) => "1. First\n2. Second\n3. Third\n".to_string(),
        _ => "```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n".to_string(),
    }
}
