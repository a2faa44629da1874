//! Highlighter tests through the public API

use boardscope::syntax::{highlight, highlight_html, tokenize, HighlightKind, LanguageId};

fn strip_spans(markup: &str) -> String {
    let mut out = String::new();
    let mut rest = markup;
    while let Some(start) = rest.find("<span class=\"") {
        out.push_str(&rest[..start]);
        let after = &rest[start..];
        let close = after.find("\">").unwrap() + 2;
        rest = &after[close..];
    }
    out.push_str(rest);
    out.replace("</span>", "")
}

const SKETCH: &str = r#"#include <WiFi.h>
#define LED 2

/* Blink the on-board LED
   while connected */
const char* ssid = "lab \"2.4GHz\"";

void setup() {
  Serial.begin(115200);
  pinMode(LED, OUTPUT);
}

void loop() {
  for (int i = 0; i < 3; i++) { // quick flashes
    digitalWrite(LED, HIGH);
    delay(100);
  }
  float forward = 0.5;
}
"#;

// ========================================================================
// Identity
// ========================================================================

#[test]
fn test_unsupported_tag_is_identity() {
    for tag in ["python", "rust", "", "C", "c++"] {
        assert_eq!(highlight(SKETCH, tag), SKETCH, "tag {:?}", tag);
    }
}

#[test]
fn test_nothing_to_highlight_is_identity() {
    let code = "a = b + c;\nx -> y";
    assert_eq!(highlight(code, "cpp"), code);
    assert_eq!(highlight(code, "c"), code);
    assert_eq!(highlight("", "cpp"), "");
}

#[test]
fn test_removing_markup_restores_source() {
    assert_eq!(strip_spans(&highlight(SKETCH, "cpp")), SKETCH);
}

// ========================================================================
// Categories
// ========================================================================

#[test]
fn test_comment_text_is_not_rewrapped() {
    assert_eq!(
        highlight("// for int 42 \"s\" setup()", "cpp"),
        r#"<span class="code-comment">// for int 42 "s" setup()</span>"#
    );
}

#[test]
fn test_escaped_quote_stays_inside_string() {
    assert_eq!(
        highlight(r#""a \" b""#, "c"),
        r#"<span class="code-string">"a \" b"</span>"#
    );
}

#[test]
fn test_keyword_prefix_is_not_keyword() {
    assert_eq!(highlight("forward", "cpp"), "forward");
    assert_eq!(
        highlight("for", "cpp"),
        r#"<span class="code-keyword">for</span>"#
    );
}

#[test]
fn test_sketch_categories() {
    let highlights = tokenize(SKETCH, LanguageId::Cpp);
    let texts = |kind| highlights.texts(SKETCH, kind);

    assert_eq!(
        texts(HighlightKind::Preprocessor),
        vec!["#include", "#define"]
    );
    assert_eq!(
        texts(HighlightKind::Function),
        vec!["setup", "begin", "pinMode", "loop", "digitalWrite", "delay"]
    );
    assert_eq!(texts(HighlightKind::String), vec![r#""lab \"2.4GHz\"""#]);
    assert_eq!(highlights.count(HighlightKind::Comment), 2);
    assert!(texts(HighlightKind::Keyword).contains(&"for"));
    assert!(!texts(HighlightKind::Keyword).contains(&"forward"));
    assert!(texts(HighlightKind::Number).contains(&"115200"));
    assert!(texts(HighlightKind::Number).contains(&"0.5"));
}

// ========================================================================
// HTML mode
// ========================================================================

#[test]
fn test_html_mode_escapes_everything() {
    let markup = highlight_html("#include <Wire.h>\nif (a < b && c > \"d\") {}", "cpp");
    assert!(markup.contains("&lt;Wire.h&gt;"));
    assert!(markup.contains("a &lt; b &amp;&amp; c &gt;"));
    assert!(markup.contains(r#"<span class="code-string">&quot;d&quot;</span>"#));
    assert!(!markup.contains("<Wire"));
}

#[test]
fn test_html_mode_for_plain_text_only_escapes() {
    assert_eq!(highlight_html("<b>&</b>", "text"), "&lt;b&gt;&amp;&lt;/b&gt;");
}
