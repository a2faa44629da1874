//! HTML rendering for the generated site
//!
//! Pages are plain `format!` output around a shared layout. Every value that
//! comes from a document is escaped; highlighted code goes through
//! `syntax::highlight_html`.
//!
//! Links are relative to the page (`root` is `"./"`, `"../"` or `"../../"`)
//! so the output also works when opened straight from disk.

mod about;
mod code_block;
mod components;
mod gallery;
mod page;
mod pinout;
mod script;
mod style;
mod viewer;

use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::util::escape_html;

pub use about::{about_page, markdown_to_html, DEFAULT_ABOUT_MD};
pub use code_block::code_block;
pub use components::components_table;
pub use gallery::{gallery_page, home_page};
pub use page::{device_page, loading_page, not_found_page, render_page};
pub use pinout::pinout_viewer;
pub use script::SITE_JS;
pub use style::site_css;
pub use viewer::{model_viewer, part_info_card};

/// Site-relative path of the stylesheet
pub const STYLESHEET_PATH: &str = "assets/site.css";

/// Image shown when a pinout image is missing
pub const PLACEHOLDER_IMAGE: &str = "placeholder.svg";

/// Settings shared by every page
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub site_title: String,
    pub model_viewer_script: String,
    pub auto_rotate: bool,
    pub camera_controls: bool,
    /// Used to check that referenced images exist
    pub public_dir: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

impl RenderOptions {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            site_title: config.site_title.clone(),
            model_viewer_script: config.model_viewer_script.clone(),
            auto_rotate: config.auto_rotate,
            camera_controls: config.camera_controls,
            public_dir: Some(config.public_dir.clone()),
        }
    }
}

/// Relative prefix leading back to the site root from a page `depth`
/// directories deep
pub fn root_for_depth(depth: usize) -> String {
    if depth == 0 {
        "./".to_string()
    } else {
        "../".repeat(depth)
    }
}

/// Rewrite a document asset reference relative to `root`.
///
/// Remote and `data:` URLs are returned unchanged.
pub fn asset_url(root: &str, reference: &str) -> String {
    let reference = reference.trim();
    if reference.contains("://") || reference.starts_with("data:") {
        reference.to_string()
    } else {
        format!("{}{}", root, reference.trim_start_matches('/'))
    }
}

/// Which navigation entry is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Gallery,
    About,
    None,
}

/// Wrap page content in the shared document shell
pub(crate) fn layout(
    title: &str,
    root: &str,
    active: NavItem,
    options: &RenderOptions,
    body: &str,
    with_viewer: bool,
) -> String {
    let full_title = if title.is_empty() {
        escape_html(&options.site_title)
    } else {
        format!(
            "{} | {}",
            escape_html(title),
            escape_html(&options.site_title)
        )
    };

    let viewer_script = if with_viewer {
        format!(
            r#"<script type="module" src="{}"></script>"#,
            escape_html(&options.model_viewer_script)
        )
    } else {
        String::new()
    };

    let nav_link = |item: NavItem, href: &str, label: &str| {
        let class = if item == active {
            r#" class="active""#
        } else {
            ""
        };
        format!(r#"<a href="{root}{href}"{class}>{label}</a>"#)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{full_title}</title>
    <link rel="stylesheet" href="{root}{STYLESHEET_PATH}">
    {viewer_script}
</head>
<body>
    <header class="site-header">
        <a class="brand" href="{root}">{brand}</a>
        <nav>{home}{gallery}{about}</nav>
    </header>
    <main>
{body}
    </main>
    <footer class="site-footer">
        <p>{brand} &middot; an educational platform for learning electronics and microcontroller development.</p>
    </footer>
    <script>{SITE_JS}</script>
</body>
</html>
"#,
        brand = escape_html(&options.site_title),
        home = nav_link(NavItem::Home, "", "Home"),
        gallery = nav_link(NavItem::Gallery, "gallery/", "Device Gallery"),
        about = nav_link(NavItem::About, "about/", "About"),
    )
}
