//! Theme system for the generated site
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from config directories.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/boardscope/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

use crate::syntax::HighlightKind;

// Embed theme YAML files at compile time
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/default-light.yaml");
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/default-dark.yaml");
pub const CIRCUIT_GREEN_YAML: &str = include_str!("../themes/circuit-green.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-light")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "circuit-green",
        yaml: CIRCUIT_GREEN_YAML,
    },
];

/// Where the theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// User-defined theme in ~/.config/boardscope/themes/
    User,
    /// Built-in theme embedded in binary
    Builtin,
}

/// Information about an available theme
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    /// Stable identifier (e.g., "default-light", "my-custom-theme")
    pub id: String,
    /// Display name from YAML (e.g., "Default Light")
    pub name: String,
    /// Where this theme is loaded from
    pub source: ThemeSource,
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    load_theme_from(crate::config_paths::themes_dir().as_deref(), id)
}

/// Load theme by id, looking in `user_dir` before the builtins
pub fn load_theme_from(user_dir: Option<&Path>, id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = user_dir {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// Load a theme, falling back to the default light theme on any error
pub fn load_theme_or_default(id: &str) -> Theme {
    load_theme(id).unwrap_or_else(|e| {
        tracing::warn!("Failed to load theme '{}': {}; using default", id, e);
        Theme::default_light()
    })
}

/// List all available themes from all sources
///
/// User themes override builtins with the same id.
pub fn list_available_themes() -> Vec<ThemeInfo> {
    list_themes_in(crate::config_paths::themes_dir().as_deref())
}

/// List themes from `user_dir` plus the builtins
pub fn list_themes_in(user_dir: Option<&Path>) -> Vec<ThemeInfo> {
    let mut themes = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();

    if let Some(user_dir) = user_dir {
        if let Ok(entries) = std::fs::read_dir(user_dir) {
            let mut paths: Vec<_> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
            paths.sort();
            for path in paths {
                if !path
                    .extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
                {
                    continue;
                }
                if let Some(id) = path.file_stem().and_then(|s| s.to_str()) {
                    if seen_ids.insert(id.to_string()) {
                        let name = extract_theme_name(&path).unwrap_or_else(|| id.to_string());
                        themes.push(ThemeInfo {
                            id: id.to_string(),
                            name,
                            source: ThemeSource::User,
                        });
                    }
                }
            }
        }
    }

    for builtin in BUILTIN_THEMES {
        if seen_ids.insert(builtin.id.to_string()) {
            let name = Theme::from_yaml(builtin.yaml)
                .map(|t| t.name)
                .unwrap_or_else(|_| builtin.id.to_string());
            themes.push(ThemeInfo {
                id: builtin.id.to_string(),
                name,
                source: ThemeSource::Builtin,
            });
        }
    }

    themes
}

/// Extract theme name from YAML file without full parsing
fn extract_theme_name(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    for line in content.lines() {
        if let Some(value) = line.trim().strip_prefix("name:") {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            return Some(value.to_string());
        }
    }
    None
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        if !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|e| e.to_string())
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// CSS notation: `#rrggbb` when opaque, `rgba(...)` otherwise
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f32 / 255.0
            )
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub page: PageThemeData,
    pub code: CodeThemeData,
}

/// Page colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct PageThemeData {
    pub background: String,
    pub foreground: String,
    pub muted: String,
    pub surface: String,
    pub border: String,
    pub accent: String,
    #[serde(default)]
    pub accent_foreground: Option<String>,
    #[serde(default)]
    pub hotspot: Option<String>,
}

/// Code block colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct CodeThemeData {
    pub background: String,
    pub foreground: String,
    pub comment: String,
    pub string: String,
    pub number: String,
    pub keyword: String,
    pub function: String,
    pub preprocessor: String,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub page: PageTheme,
    pub code: CodeTheme,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageTheme {
    pub background: Color,
    pub foreground: Color,
    /// Secondary text
    pub muted: Color,
    /// Cards and table headers
    pub surface: Color,
    pub border: Color,
    /// Links and buttons
    pub accent: Color,
    /// Text drawn on accent backgrounds
    pub accent_foreground: Color,
    /// Hotspot marker fill
    pub hotspot: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeTheme {
    pub background: Color,
    pub foreground: Color,
    pub comment: Color,
    pub string: Color,
    pub number: Color,
    pub keyword: Color,
    pub function: Color,
    pub preprocessor: Color,
}

impl CodeTheme {
    /// Color for a highlight category
    pub fn color_for(&self, kind: HighlightKind) -> Color {
        match kind {
            HighlightKind::Comment => self.comment,
            HighlightKind::String => self.string,
            HighlightKind::Number => self.number,
            HighlightKind::Keyword => self.keyword,
            HighlightKind::Function => self.function,
            HighlightKind::Preprocessor => self.preprocessor,
        }
    }
}

impl Theme {
    /// Parse theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a builtin theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown builtin theme: {}", id))
            .and_then(|t| Self::from_yaml(t.yaml))
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let accent = Color::from_hex(&data.page.accent)?;
        let optional = |value: &Option<String>, fallback: Color| {
            value
                .as_deref()
                .map(Color::from_hex)
                .transpose()
                .map(|c| c.unwrap_or(fallback))
        };

        Ok(Theme {
            name: data.name,
            page: PageTheme {
                background: Color::from_hex(&data.page.background)?,
                foreground: Color::from_hex(&data.page.foreground)?,
                muted: Color::from_hex(&data.page.muted)?,
                surface: Color::from_hex(&data.page.surface)?,
                border: Color::from_hex(&data.page.border)?,
                accent,
                accent_foreground: optional(
                    &data.page.accent_foreground,
                    Color::rgb(0xFF, 0xFF, 0xFF),
                )?,
                hotspot: optional(&data.page.hotspot, accent)?,
            },
            code: CodeTheme {
                background: Color::from_hex(&data.code.background)?,
                foreground: Color::from_hex(&data.code.foreground)?,
                comment: Color::from_hex(&data.code.comment)?,
                string: Color::from_hex(&data.code.string)?,
                number: Color::from_hex(&data.code.number)?,
                keyword: Color::from_hex(&data.code.keyword)?,
                function: Color::from_hex(&data.code.function)?,
                preprocessor: Color::from_hex(&data.code.preprocessor)?,
            },
        })
    }

    /// Default light theme (YAML-backed with Rust fallback)
    pub fn default_light() -> Self {
        match Theme::from_yaml(DEFAULT_LIGHT_YAML) {
            Ok(theme) => theme,
            Err(_) => Theme {
                name: "Default Light".to_string(),
                page: PageTheme {
                    background: Color::rgb(0xF8, 0xFA, 0xFC),
                    foreground: Color::rgb(0x0F, 0x17, 0x2A),
                    muted: Color::rgb(0x64, 0x74, 0x8B),
                    surface: Color::rgb(0xFF, 0xFF, 0xFF),
                    border: Color::rgb(0xE2, 0xE8, 0xF0),
                    accent: Color::rgb(0x25, 0x63, 0xEB),
                    accent_foreground: Color::rgb(0xFF, 0xFF, 0xFF),
                    hotspot: Color::rgb(0x25, 0x63, 0xEB),
                },
                code: CodeTheme {
                    background: Color::rgb(0x1E, 0x29, 0x3B),
                    foreground: Color::rgb(0xE2, 0xE8, 0xF0),
                    comment: Color::rgb(0x64, 0x74, 0x8B),
                    string: Color::rgb(0x22, 0xC5, 0x5E),
                    number: Color::rgb(0x60, 0xA5, 0xFA),
                    keyword: Color::rgb(0xF4, 0x72, 0xB6),
                    function: Color::rgb(0xEA, 0xB3, 0x08),
                    preprocessor: Color::rgb(0xA8, 0x55, 0xF7),
                },
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_light()
    }
}
