//! Rendering of highlight tokens into marked-up text
//!
//! Each token span is wrapped exactly once in
//! `<span class="code-{kind}">…</span>`; text between tokens is copied.

use super::highlights::SyntaxHighlights;
use super::languages::LanguageId;
use super::tokenizer::tokenize;
use crate::util::html::push_escaped;

/// How text runs are written into the markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    /// Copy source text verbatim
    Raw,
    /// HTML-escape every text run, inside and outside spans
    Html,
}

/// Highlight `code` for the language named by `tag`.
///
/// Text is copied verbatim, so for unrecognised tags (or code with nothing
/// to highlight) the output is identical to the input.
pub fn highlight(code: &str, tag: &str) -> String {
    let highlights = tokenize(code, LanguageId::from_tag(tag));
    render_markup(code, &highlights, TextMode::Raw)
}

/// Like [`highlight`], but safe to embed in an HTML document
pub fn highlight_html(code: &str, tag: &str) -> String {
    let highlights = tokenize(code, LanguageId::from_tag(tag));
    render_markup(code, &highlights, TextMode::Html)
}

/// Wrap each token of `highlights` once, copying the text in between
pub fn render_markup(source: &str, highlights: &SyntaxHighlights, mode: TextMode) -> String {
    let mut out = String::with_capacity(source.len() + highlights.tokens.len() * 32);
    let mut cursor = 0;

    for token in &highlights.tokens {
        push_text(&mut out, &source[cursor..token.start], mode);
        out.push_str("<span class=\"");
        out.push_str(token.kind.css_class());
        out.push_str("\">");
        push_text(&mut out, token.text(source), mode);
        out.push_str("</span>");
        cursor = token.end;
    }
    push_text(&mut out, &source[cursor..], mode);

    out
}

fn push_text(out: &mut String, text: &str, mode: TextMode) {
    match mode {
        TextMode::Raw => out.push_str(text),
        TextMode::Html => push_escaped(out, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_for_unsupported_tag() {
        let code = "#include <x.h>\nint main() { return \"a\" < 1; }";
        assert_eq!(highlight(code, "python"), code);
        assert_eq!(highlight(code, ""), code);
    }

    #[test]
    fn test_identity_when_nothing_matches() {
        let code = "x = y + z;\n  { foo bar }";
        assert_eq!(highlight(code, "cpp"), code);
    }

    #[test]
    fn test_comment_line_wrapped_once() {
        assert_eq!(
            highlight("// comment text", "cpp"),
            "<span class=\"code-comment\">// comment text</span>"
        );
        assert_eq!(
            highlight("// for 42 loop()", "c"),
            "<span class=\"code-comment\">// for 42 loop()</span>"
        );
    }

    #[test]
    fn test_call_and_keyword_markup() {
        assert_eq!(
            highlight("void setup() {}", "cpp"),
            "<span class=\"code-keyword\">void</span> <span class=\"code-function\">setup</span>() {}"
        );
    }

    #[test]
    fn test_html_mode_escapes_text_and_spans() {
        assert_eq!(
            highlight_html("#include <Wire.h>\nprint(\"<b>\");", "cpp"),
            "<span class=\"code-preprocessor\">#include</span> &lt;Wire.h&gt;\n\
             <span class=\"code-function\">print</span>(<span class=\"code-string\">&quot;&lt;b&gt;&quot;</span>);"
        );
    }

    #[test]
    fn test_html_mode_escapes_unsupported_language() {
        assert_eq!(highlight_html("a < b && c", "rust"), "a &lt; b &amp;&amp; c");
    }
}
