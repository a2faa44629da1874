//! About page rendered from markdown using pulldown-cmark

use pulldown_cmark::{html, Options, Parser};

use super::{layout, root_for_depth, NavItem, RenderOptions};

/// Body used when the public directory has no `about.md`
pub const DEFAULT_ABOUT_MD: &str = r#"# About

An open educational platform dedicated to making electronics and embedded
systems learning accessible to everyone.

## Our Mission

Bridge the gap between theoretical electronics knowledge and practical
implementation with easy-to-understand documentation for development boards
and microcontrollers, complete with interactive examples and visual aids.

## What We Offer

- **Interactive 3D models**: explore boards in 3D and click hotspots to learn about parts.
- **Detailed pinouts**: zoomable pinout diagrams for every board.
- **Component datasheets**: direct links to the official datasheets.
- **Example code**: ready-to-use sketches with syntax highlighting.
"#;

/// Convert markdown to an HTML fragment
pub fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

pub fn about_page(markdown: &str, options: &RenderOptions) -> String {
    let body = format!(
        "    <article class=\"card prose\">\n{}    </article>",
        markdown_to_html(markdown)
    );
    layout(
        "About",
        &root_for_depth(1),
        NavItem::About,
        options,
        &body,
        false,
    )
}
