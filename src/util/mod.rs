//! Utility modules

pub mod html;
pub mod text;

pub use html::{escape_html, push_escaped};
pub use text::{is_ident_start, is_word_byte};
