use boardscope::syntax::HighlightKind;
use boardscope::theme::{
    list_themes_in, load_theme_from, Color, Theme, ThemeSource, BUILTIN_THEMES,
    CIRCUIT_GREEN_YAML, DEFAULT_DARK_YAML, DEFAULT_LIGHT_YAML,
};
use tempfile::tempdir;

#[test]
fn test_color_from_hex_6() {
    let color = Color::from_hex("#1E293B").unwrap();
    assert_eq!((color.r, color.g, color.b, color.a), (0x1E, 0x29, 0x3B, 255));
}

#[test]
fn test_color_from_hex_8() {
    let color = Color::from_hex("#B45309CC").unwrap();
    assert_eq!((color.r, color.g, color.b, color.a), (0xB4, 0x53, 0x09, 0xCC));
}

#[test]
fn test_color_from_hex_invalid() {
    assert!(Color::from_hex("#1E29").is_err());
    assert!(Color::from_hex("#GGGGGG").is_err());
}

#[test]
fn test_builtin_yaml_parses() {
    for yaml in [DEFAULT_LIGHT_YAML, DEFAULT_DARK_YAML, CIRCUIT_GREEN_YAML] {
        assert!(Theme::from_yaml(yaml).is_ok());
    }
    for builtin in BUILTIN_THEMES {
        assert!(Theme::from_builtin(builtin.id).is_ok(), "{}", builtin.id);
    }
}

#[test]
fn test_default_theme() {
    let theme = Theme::default();
    assert_eq!(theme.name, "Default Light");
    assert_eq!(theme.code.color_for(HighlightKind::String).to_css(), "#22c55e");
}

#[test]
fn test_optional_colors_fall_back() {
    let theme = Theme::from_yaml(CIRCUIT_GREEN_YAML).unwrap();
    assert_eq!(theme.page.accent_foreground, Color::rgb(0xFF, 0xFF, 0xFF));
    assert_eq!(theme.page.hotspot.a, 0xCC);
}

#[test]
fn test_unknown_builtin_is_error() {
    assert!(Theme::from_builtin("solarized").is_err());
}

#[test]
fn test_user_theme_overrides_builtin() {
    let dir = tempdir().unwrap();
    let yaml = DEFAULT_DARK_YAML.replace("Default Dark", "My Dark");
    std::fs::write(dir.path().join("default-dark.yaml"), yaml).unwrap();

    let theme = load_theme_from(Some(dir.path()), "default-dark").unwrap();
    assert_eq!(theme.name, "My Dark");

    let themes = list_themes_in(Some(dir.path()));
    let dark: Vec<_> = themes.iter().filter(|t| t.id == "default-dark").collect();
    assert_eq!(dark.len(), 1);
    assert_eq!(dark[0].source, ThemeSource::User);
    assert_eq!(dark[0].name, "My Dark");
    assert!(themes
        .iter()
        .any(|t| t.id == "circuit-green" && t.source == ThemeSource::Builtin));
}

#[test]
fn test_invalid_user_theme_is_error() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("broken.yaml"), "name: [").unwrap();
    assert!(load_theme_from(Some(dir.path()), "broken").is_err());
}
