//! Static site builder
//!
//! Renders every route of the site into an output directory and copies the
//! public directory's assets next to it.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::catalog::{summaries, DirectorySource, DATA_DIR};
use crate::model::Device;
use crate::render::{
    about_page, device_page, gallery_page, home_page, not_found_page, root_for_depth, site_css,
    RenderOptions, DEFAULT_ABOUT_MD, PLACEHOLDER_IMAGE, STYLESHEET_PATH,
};
use crate::theme::Theme;

/// Markdown file in the public directory that replaces the built-in About text
pub const ABOUT_FILE: &str = "about.md";

/// Directory holding one `{key}/index.html` per device
pub const DEVICE_DIR: &str = "device";

/// `404.html` is served for arbitrary missing URLs, so its links are
/// resolved from the host root instead of relative to the file
pub const ERROR_PAGE_ROOT: &str = "/";

const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="300" viewBox="0 0 400 300">
  <rect width="400" height="300" fill="#E5E7EB"/>
  <text x="200" y="155" font-family="sans-serif" font-size="20" fill="#6B7280" text-anchor="middle">Image not available</text>
</svg>
"##;

/// What a build produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Output-relative paths of the HTML pages written
    pub pages_written: Vec<PathBuf>,
    pub assets_copied: usize,
    pub warnings: Vec<String>,
}

impl BuildReport {
    fn warn(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.warnings.push(message);
    }
}

/// Build the whole site from `public_dir` into `out_dir`
pub fn build(
    public_dir: &Path,
    out_dir: &Path,
    theme: &Theme,
    options: &RenderOptions,
) -> Result<BuildReport> {
    let options = RenderOptions {
        public_dir: Some(public_dir.to_path_buf()),
        ..options.clone()
    };
    let mut report = BuildReport::default();

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let source = DirectorySource::new(public_dir);
    let documents = if source.data_dir().is_dir() {
        source.load_all()?
    } else {
        report.warn(format!(
            "No data directory at {}",
            source.data_dir().display()
        ));
        Vec::new()
    };

    let keys: HashSet<&str> = documents.iter().map(|(key, _)| key.as_str()).collect();
    prune_device_pages(&out_dir.join(DEVICE_DIR), &keys)?;

    let mut devices: Vec<(String, Device)> = Vec::new();
    for (key, result) in documents {
        let route = PathBuf::from(DEVICE_DIR).join(&key).join("index.html");
        match result {
            Ok(device) => {
                for issue in crate::catalog::validate(&key, &device, Some(public_dir)) {
                    report.warn(issue.to_string());
                }
                write_page(out_dir, &route, &device_page(&device, &options), &mut report)?;
                devices.push((key, device));
            }
            Err(e) => {
                report.warn(format!("{}: {:#}", key, e));
                let page = not_found_page(&options, &root_for_depth(2));
                write_page(out_dir, &route, &page, &mut report)?;
            }
        }
    }

    let gallery = summaries(devices.iter().map(|(key, device)| (key.as_str(), device)));
    write_page(out_dir, Path::new("index.html"), &home_page(&options), &mut report)?;
    write_page(
        out_dir,
        Path::new("gallery/index.html"),
        &gallery_page(&gallery, &options),
        &mut report,
    )?;

    let about_path = public_dir.join(ABOUT_FILE);
    let about_md = if about_path.is_file() {
        fs::read_to_string(&about_path)
            .with_context(|| format!("Failed to read {}", about_path.display()))?
    } else {
        DEFAULT_ABOUT_MD.to_string()
    };
    write_page(
        out_dir,
        Path::new("about/index.html"),
        &about_page(&about_md, &options),
        &mut report,
    )?;
    write_page(
        out_dir,
        Path::new("404.html"),
        &not_found_page(&options, ERROR_PAGE_ROOT),
        &mut report,
    )?;

    write_file(out_dir, Path::new(STYLESHEET_PATH), &site_css(theme))?;

    let skip = fs::canonicalize(out_dir).ok();
    let mut generated = report.pages_written.clone();
    generated.push(PathBuf::from(STYLESHEET_PATH));
    let copied = copy_assets(
        public_dir,
        out_dir,
        skip.as_deref(),
        &generated,
        &mut report,
    )?;
    report.assets_copied = copied;

    let placeholder = out_dir.join(PLACEHOLDER_IMAGE);
    if !placeholder.exists() {
        write_file(out_dir, Path::new(PLACEHOLDER_IMAGE), PLACEHOLDER_SVG)?;
    }

    tracing::info!(
        "Built {} pages and copied {} assets into {} ({} warnings)",
        report.pages_written.len(),
        report.assets_copied,
        out_dir.display(),
        report.warnings.len()
    );
    Ok(report)
}

fn write_page(out_dir: &Path, route: &Path, html: &str, report: &mut BuildReport) -> Result<()> {
    write_file(out_dir, route, html)?;
    report.pages_written.push(route.to_path_buf());
    Ok(())
}

fn write_file(out_dir: &Path, relative: &Path, contents: &str) -> Result<()> {
    let path = out_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

/// Remove `device/{key}` directories left over from documents that are gone
fn prune_device_pages(device_dir: &Path, keys: &HashSet<&str>) -> Result<()> {
    if !device_dir.is_dir() {
        return Ok(());
    }
    let entries = fs::read_dir(device_dir)
        .with_context(|| format!("Failed to read {}", device_dir.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read {}", device_dir.display()))?;
        let path = entry.path();
        let name = entry.file_name();
        if !path.is_dir() || keys.contains(&*name.to_string_lossy()) {
            continue;
        }
        fs::remove_dir_all(&path)
            .with_context(|| format!("Failed to remove {}", path.display()))?;
        tracing::info!("Removed stale page {}", path.display());
    }
    Ok(())
}

/// Copy every non-data, non-hidden file of `public_dir` into `out_dir`.
///
/// Files that would overwrite a `generated` route are skipped with a warning.
fn copy_assets(
    public_dir: &Path,
    out_dir: &Path,
    skip: Option<&Path>,
    generated: &[PathBuf],
    report: &mut BuildReport,
) -> Result<usize> {
    let mut copied = 0;
    let mut pending = vec![PathBuf::new()];

    while let Some(relative) = pending.pop() {
        let dir = public_dir.join(&relative);
        let entries =
            fs::read_dir(&dir).with_context(|| format!("Failed to read {}", dir.display()))?;

        for entry in entries {
            let entry = entry.with_context(|| format!("Failed to read {}", dir.display()))?;
            let name = entry.file_name();
            if name.to_string_lossy().starts_with('.') {
                continue;
            }
            let child = relative.join(&name);
            let path = entry.path();

            if path.is_dir() {
                if relative.as_os_str().is_empty() && name == DATA_DIR {
                    continue;
                }
                if skip.is_some_and(|skip| fs::canonicalize(&path).ok().as_deref() == Some(skip)) {
                    continue;
                }
                pending.push(child);
            } else if generated.contains(&child) {
                report.warn(format!(
                    "{} in {} conflicts with a generated page and was not copied",
                    child.display(),
                    public_dir.display()
                ));
            } else if child != Path::new(ABOUT_FILE) {
                let target = out_dir.join(&child);
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create directory {}", parent.display())
                    })?;
                }
                fs::copy(&path, &target).with_context(|| {
                    format!("Failed to copy {} to {}", path.display(), target.display())
                })?;
                copied += 1;
            }
        }
    }

    Ok(copied)
}
