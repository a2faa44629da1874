//! Single-pass tokenizer for C and C++ snippets
//!
//! Scans the source once, left to right, and emits non-overlapping spans.
//! At a given position the categories are tried in precedence order
//! (comment, string, number, keyword, call, directive). A span is never
//! revisited, so text inside a comment or string cannot be re-wrapped.

use super::highlights::{HighlightKind, HighlightToken, SyntaxHighlights};
use super::languages::LanguageId;
use crate::util::text::{
    digits_end, is_horizontal_space, is_ident_start, is_space_byte, is_word_byte, word_end,
};

/// Words highlighted as keywords (whole-word matches only)
pub const KEYWORDS: &[&str] = &[
    "void", "int", "const", "char", "bool", "float", "double", //
    "if", "else", "for", "while", "do", "switch", "case", "default", //
    "return", "break", "continue", "goto", //
    "class", "struct", "enum", "typedef", "namespace", //
    "public", "private", "protected", "static", "virtual", //
    "true", "false", "nullptr", "NULL", //
    "include", "define", "ifdef", "endif",
];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Tokenize `source` for `language`.
///
/// Languages without highlighting support produce no tokens.
pub fn tokenize(source: &str, language: LanguageId) -> SyntaxHighlights {
    let mut highlights = SyntaxHighlights::new(language);
    if language.has_highlighting() {
        highlights.tokens = Tokenizer::new(source).run();
    }
    highlights
}

struct Tokenizer<'a> {
    source: &'a str,
    bytes: &'a [u8],
    tokens: Vec<HighlightToken>,
}

impl<'a> Tokenizer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<HighlightToken> {
        let mut pos = 0;
        while pos < self.bytes.len() {
            let b = self.bytes[pos];
            let next = self.bytes.get(pos + 1).copied();
            pos = match (b, next) {
                (b'/', Some(b'/')) => self.line_comment(pos),
                (b'/', Some(b'*')) => self.block_comment(pos),
                (b'"', _) => self.string(pos),
                (b'0'..=b'9', _) => self.number(pos),
                (b'#', _) if self.at_line_start(pos) => self.directive(pos),
                _ if is_ident_start(b) => self.word(pos),
                _ => pos + 1,
            };
        }
        self.tokens
    }

    /// Record a token and return the position after it
    fn emit(&mut self, start: usize, end: usize, kind: HighlightKind) -> usize {
        self.tokens.push(HighlightToken::new(start, end, kind));
        end
    }

    fn line_comment(&mut self, start: usize) -> usize {
        let end = self.bytes[start..]
            .iter()
            .position(|&b| b == b'\n' || b == b'\r')
            .map_or(self.bytes.len(), |offset| start + offset);
        self.emit(start, end, HighlightKind::Comment)
    }

    fn block_comment(&mut self, start: usize) -> usize {
        match self.source[start + 2..].find("*/") {
            Some(offset) => self.emit(start, start + 2 + offset + 2, HighlightKind::Comment),
            // Unterminated: the slash is plain text
            None => start + 1,
        }
    }

    fn string(&mut self, start: usize) -> usize {
        let mut i = start + 1;
        while i < self.bytes.len() {
            match self.bytes[i] {
                b'"' => return self.emit(start, i + 1, HighlightKind::String),
                b'\\' => match self.bytes.get(i + 1) {
                    // An escaped line break does not continue the literal
                    Some(b'\n') | Some(b'\r') | None => break,
                    Some(_) => i += 2,
                },
                _ => i += 1,
            }
        }
        start + 1
    }

    fn number(&mut self, start: usize) -> usize {
        let int_end = digits_end(self.bytes, start);

        // `12abc`, `0x1F`: a word that happens to start with a digit
        if self.bytes.get(int_end).copied().is_some_and(is_word_byte) {
            return word_end(self.bytes, int_end);
        }

        let has_fraction = self.bytes.get(int_end) == Some(&b'.')
            && self
                .bytes
                .get(int_end + 1)
                .is_some_and(|b| b.is_ascii_digit());
        if has_fraction {
            let frac_end = digits_end(self.bytes, int_end + 1);
            if !self.bytes.get(frac_end).copied().is_some_and(is_word_byte) {
                return self.emit(start, frac_end, HighlightKind::Number);
            }
            // `1.5f`: only the integer part stands on word boundaries
        }

        self.emit(start, int_end, HighlightKind::Number)
    }

    fn word(&mut self, start: usize) -> usize {
        let end = word_end(self.bytes, start);
        let word = &self.source[start..end];

        if is_keyword(word) {
            return self.emit(start, end, HighlightKind::Keyword);
        }
        if self.followed_by_paren(end) {
            return self.emit(start, end, HighlightKind::Function);
        }
        end
    }

    fn followed_by_paren(&self, from: usize) -> bool {
        let mut i = from;
        while i < self.bytes.len() && is_space_byte(self.bytes[i]) {
            i += 1;
        }
        self.bytes.get(i) == Some(&b'(')
    }

    fn at_line_start(&self, pos: usize) -> bool {
        pos == 0 || matches!(self.bytes[pos - 1], b'\n' | b'\r')
    }

    fn directive(&mut self, start: usize) -> usize {
        let mut word_start = start + 1;
        while word_start < self.bytes.len() && is_horizontal_space(self.bytes[word_start]) {
            word_start += 1;
        }
        let end = word_end(self.bytes, word_start);
        if end > word_start {
            self.emit(start, end, HighlightKind::Preprocessor)
        } else {
            start + 1
        }
    }
}
