//! Language identification
//!
//! Maps language tags (as found in device documents) to language IDs.

use std::path::Path;

/// Supported language identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    #[default]
    PlainText,
    C,
    Cpp,
}

impl LanguageId {
    /// Resolve a language tag.
    ///
    /// Only the exact tags `"c"` and `"cpp"` are recognised; anything else is
    /// plain text and passes through the highlighter untouched.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "c" => LanguageId::C,
            "cpp" => LanguageId::Cpp,
            _ => LanguageId::PlainText,
        }
    }

    /// Detect language from file extension (used by the `highlight` command)
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "c" | "h" => LanguageId::C,
            "cpp" | "cc" | "cxx" | "hpp" | "hh" | "ino" => LanguageId::Cpp,
            _ => LanguageId::PlainText,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(LanguageId::PlainText)
    }

    /// Canonical tag, as accepted by [`LanguageId::from_tag`]
    pub fn tag(&self) -> &'static str {
        match self {
            LanguageId::PlainText => "text",
            LanguageId::C => "c",
            LanguageId::Cpp => "cpp",
        }
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::PlainText => "Plain Text",
            LanguageId::C => "C",
            LanguageId::Cpp => "C++",
        }
    }

    /// Check if this language has syntax highlighting support
    pub fn has_highlighting(&self) -> bool {
        !matches!(self, LanguageId::PlainText)
    }
}
