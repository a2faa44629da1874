//! Syntax highlighting module
//!
//! Lightweight highlighting for the example code shown on device pages:
//! - Language detection from document tags and file extensions
//! - A single left-to-right tokenizer producing `(kind, span)` tokens
//! - One rendering step that wraps each span exactly once
//!
//! ## Architecture
//!
//! ```text
//! (code, tag) → LanguageId::from_tag → tokenize → SyntaxHighlights
//!             → render_markup → <span class="code-…">…</span>
//! ```
//!
//! ## Supported Languages
//!
//! - C (`"c"`)
//! - C++ (`"cpp"`)
//!
//! Every other tag passes through unchanged.

mod highlights;
mod languages;
mod markup;
mod tokenizer;

pub use highlights::{HighlightKind, HighlightToken, SyntaxHighlights, HIGHLIGHT_NAMES};
pub use languages::LanguageId;
pub use markup::{highlight, highlight_html, render_markup, TextMode};
pub use tokenizer::{is_keyword, tokenize, KEYWORDS};
