//! Syntax highlighting data structures
//!
//! Defines highlight categories, token spans, and snippet-level highlight state.

use super::languages::LanguageId;

/// Category names, in precedence order. Index into this array matches
/// the discriminant of [`HighlightKind`].
pub const HIGHLIGHT_NAMES: &[&str] = &[
    "comment",      // line and block comments
    "string",       // double-quoted literals
    "number",       // 42, 3.14
    "keyword",      // fixed keyword set
    "function",     // identifier followed by `(`
    "preprocessor", // #include, #define
];

/// Category of a highlighted span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    Comment,
    String,
    Number,
    Keyword,
    Function,
    Preprocessor,
}

impl HighlightKind {
    /// All kinds, in precedence order
    pub const ALL: [HighlightKind; 6] = [
        HighlightKind::Comment,
        HighlightKind::String,
        HighlightKind::Number,
        HighlightKind::Keyword,
        HighlightKind::Function,
        HighlightKind::Preprocessor,
    ];

    pub fn name(&self) -> &'static str {
        HIGHLIGHT_NAMES[*self as usize]
    }

    /// CSS class used in the rendered markup
    pub fn css_class(&self) -> &'static str {
        match self {
            HighlightKind::Comment => "code-comment",
            HighlightKind::String => "code-string",
            HighlightKind::Number => "code-number",
            HighlightKind::Keyword => "code-keyword",
            HighlightKind::Function => "code-function",
            HighlightKind::Preprocessor => "code-preprocessor",
        }
    }

    /// Look up a kind by category name
    pub fn from_name(name: &str) -> Option<Self> {
        HIGHLIGHT_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|idx| Self::ALL[idx])
    }
}

impl std::fmt::Display for HighlightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single highlighted span (byte offsets into the source)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightToken {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
    pub kind: HighlightKind,
}

impl HighlightToken {
    pub fn new(start: usize, end: usize, kind: HighlightKind) -> Self {
        Self { start, end, kind }
    }

    /// The covered slice of `source`
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Highlight information for one snippet of source code
#[derive(Debug, Clone, Default)]
pub struct SyntaxHighlights {
    pub language: LanguageId,
    /// Non-overlapping tokens sorted by start offset
    pub tokens: Vec<HighlightToken>,
}

impl SyntaxHighlights {
    /// Create new empty highlights for a language
    pub fn new(language: LanguageId) -> Self {
        Self {
            language,
            tokens: Vec::new(),
        }
    }

    /// Get the highlight kind covering a byte offset, if any
    pub fn kind_at(&self, offset: usize) -> Option<HighlightKind> {
        for token in &self.tokens {
            if offset >= token.start && offset < token.end {
                return Some(token.kind);
            }
            if token.start > offset {
                break; // tokens are sorted, no need to continue
            }
        }
        None
    }

    /// Number of tokens of a given kind
    pub fn count(&self, kind: HighlightKind) -> usize {
        self.tokens.iter().filter(|t| t.kind == kind).count()
    }

    /// Token texts of a given kind, in source order
    pub fn texts<'a>(&self, source: &'a str, kind: HighlightKind) -> Vec<&'a str> {
        self.tokens
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.text(source))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
