//! Site stylesheet generated from the theme

use crate::syntax::HighlightKind;
use crate::theme::Theme;

/// Generate CSS from theme colors
pub fn site_css(theme: &Theme) -> String {
    let page = &theme.page;
    let code = &theme.code;

    let mut css = format!(
        r#"/* {name} */
* {{
    box-sizing: border-box;
}}

body {{
    margin: 0;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    font-size: 15px;
    line-height: 1.6;
    color: {foreground};
    background: {background};
}}

main {{
    flex: 1;
    width: 100%;
    max-width: 1200px;
    margin: 0 auto;
    padding: 32px 16px;
}}

a {{
    color: {accent};
    text-decoration: none;
}}

a:hover {{
    text-decoration: underline;
}}

.site-header {{
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 12px 24px;
    background: {surface};
    border-bottom: 1px solid {border};
}}

.site-header .brand {{
    font-weight: 700;
    font-size: 1.1em;
    color: {foreground};
}}

.site-header nav a {{
    margin-left: 20px;
    color: {muted};
}}

.site-header nav a.active {{
    color: {accent};
    font-weight: 600;
}}

.site-footer {{
    padding: 24px;
    text-align: center;
    font-size: 0.875em;
    color: {muted};
    background: {surface};
    border-top: 1px solid {border};
}}

h1, h2, h3 {{
    line-height: 1.25;
    margin-top: 0;
}}

.muted {{
    color: {muted};
}}

.button {{
    display: inline-block;
    padding: 8px 16px;
    border: 1px solid {accent};
    border-radius: 6px;
    background: {accent};
    color: {accent_foreground};
    font-weight: 600;
    cursor: pointer;
}}

.button:hover {{
    text-decoration: none;
    opacity: 0.9;
}}

.button.ghost {{
    background: transparent;
    color: {accent};
}}

.button:disabled {{
    opacity: 0.4;
    cursor: not-allowed;
}}

.card {{
    background: {surface};
    border: 1px solid {border};
    border-radius: 12px;
    padding: 16px;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
}}

.hero {{
    text-align: center;
    padding: 48px 0;
}}

.hero h1 {{
    font-size: 2.8em;
}}

.hero h1 span {{
    display: block;
    color: {accent};
}}

.features, .device-grid {{
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 24px;
}}

.device-card {{
    padding: 0;
    overflow: hidden;
}}

.device-card img {{
    width: 100%;
    aspect-ratio: 16 / 9;
    object-fit: cover;
    background: {border};
}}

.device-card .body {{
    padding: 16px;
}}

.device-card .button {{
    display: block;
    text-align: center;
}}

.device-layout {{
    display: grid;
    grid-template-columns: minmax(0, 1fr) minmax(0, 1fr);
    gap: 24px;
}}

.device-layout > .column {{
    display: flex;
    flex-direction: column;
    gap: 24px;
}}

@media (max-width: 900px) {{
    .device-layout {{
        grid-template-columns: 1fr;
    }}
}}

model-viewer {{
    width: 100%;
    height: 500px;
    background: {border};
    border-radius: 8px;
}}

.hotspot-button {{
    display: block;
    width: 32px;
    height: 32px;
    border-radius: 50%;
    border: 3px solid {hotspot};
    background: {background};
    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.3);
    cursor: pointer;
    position: relative;
    transition: transform 0.2s ease;
}}

.hotspot-button:hover {{
    transform: scale(1.3);
    background: {hotspot};
}}

.hotspot-label {{
    display: none;
    position: absolute;
    bottom: 100%;
    left: 50%;
    transform: translateX(-50%);
    margin-bottom: 8px;
    padding: 6px 12px;
    background: {surface};
    color: {foreground};
    border-radius: 6px;
    font-size: 12px;
    font-weight: 600;
    white-space: nowrap;
    pointer-events: none;
}}

.hotspot-button:hover .hotspot-label {{
    display: block;
}}

.part-info .badge {{
    display: inline-block;
    padding: 2px 12px;
    border-radius: 999px;
    background: {accent};
    color: {accent_foreground};
    font-size: 0.8em;
    font-weight: 600;
}}

.part-info header {{
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
}}

table.components {{
    width: 100%;
    border-collapse: collapse;
}}

table.components th, table.components td {{
    text-align: left;
    padding: 10px 12px;
    border-bottom: 1px solid {border};
}}

table.components td.function, .empty {{
    color: {muted};
}}

.pinout-frame {{
    position: relative;
    overflow: auto;
    max-height: 800px;
    min-height: 400px;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 24px;
    background: {background};
    border-radius: 8px;
}}

.pinout-frame img {{
    max-width: 100%;
    height: auto;
    transition: transform 0.3s ease-in-out;
    transform-origin: center center;
}}

.pinout-controls {{
    position: absolute;
    top: 12px;
    right: 12px;
    display: flex;
    gap: 8px;
}}

.pinout-zoom-label {{
    position: absolute;
    bottom: 12px;
    right: 12px;
    padding: 2px 10px;
    border-radius: 6px;
    background: {surface};
    font-size: 0.85em;
    font-weight: 600;
}}

.code-block {{
    border-radius: 12px;
    overflow: hidden;
    background: {code_background};
    color: {code_foreground};
}}

.code-block header {{
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 8px 16px;
    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
}}

.code-block .language {{
    font-family: "SF Mono", "Fira Code", Consolas, "Liberation Mono", Menlo, monospace;
    font-size: 0.8em;
    text-transform: uppercase;
    opacity: 0.6;
}}

.code-block .copy-button {{
    background: transparent;
    border: 1px solid rgba(255, 255, 255, 0.2);
    border-radius: 6px;
    color: {code_foreground};
    padding: 4px 12px;
    cursor: pointer;
}}

.code-block pre {{
    margin: 0;
    padding: 16px;
    max-height: 600px;
    overflow: auto;
}}

.code-block code {{
    font-family: "SF Mono", "Fira Code", Consolas, "Liberation Mono", Menlo, monospace;
    font-size: 0.875em;
    line-height: 1.5;
}}

.prose {{
    max-width: 800px;
    margin: 0 auto;
}}
"#,
        name = theme.name,
        foreground = page.foreground.to_css(),
        background = page.background.to_css(),
        muted = page.muted.to_css(),
        surface = page.surface.to_css(),
        border = page.border.to_css(),
        accent = page.accent.to_css(),
        accent_foreground = page.accent_foreground.to_css(),
        hotspot = page.hotspot.to_css(),
        code_background = code.background.to_css(),
        code_foreground = code.foreground.to_css(),
    );

    for kind in HighlightKind::ALL {
        css.push_str(&format!(
            ".{} {{\n    color: {};{}\n}}\n\n",
            kind.css_class(),
            code.color_for(kind).to_css(),
            code_emphasis(kind)
        ));
    }

    css
}

fn code_emphasis(kind: HighlightKind) -> &'static str {
    match kind {
        HighlightKind::Comment => "\n    font-style: italic;",
        HighlightKind::Keyword => "\n    font-weight: 600;",
        HighlightKind::Preprocessor => "\n    font-weight: 500;",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_has_every_code_class() {
        let css = site_css(&Theme::default_light());
        for kind in HighlightKind::ALL {
            assert!(css.contains(&format!(".{} {{", kind.css_class())));
        }
        assert!(css.contains("color: #22c55e;"));
    }

    #[test]
    fn test_css_uses_theme_colors() {
        let theme = Theme::default_light();
        let css = site_css(&theme);
        assert!(css.contains(&theme.page.background.to_css()));
        assert!(css.contains(".hotspot-button"));
    }
}
