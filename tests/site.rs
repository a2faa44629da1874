//! Static site builder tests

mod common;

use std::fs;
use std::path::PathBuf;

use boardscope::catalog::{validate, DirectorySource, DocumentSource, Severity};
use boardscope::render::RenderOptions;
use boardscope::site::build;
use boardscope::theme::Theme;
use common::write_public_dir;
use tempfile::tempdir;

fn read(path: PathBuf) -> String {
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e))
}

#[test]
fn test_build_writes_every_route() {
    let public = tempdir().unwrap();
    let out = tempdir().unwrap();
    write_public_dir(public.path());

    let report = build(
        public.path(),
        out.path(),
        &Theme::default(),
        &RenderOptions::default(),
    )
    .unwrap();

    for route in [
        "index.html",
        "gallery/index.html",
        "about/index.html",
        "404.html",
        "device/esp32/index.html",
        "device/uno/index.html",
        "assets/site.css",
        "placeholder.svg",
    ] {
        assert!(out.path().join(route).is_file(), "missing {}", route);
    }
    assert_eq!(report.pages_written.len(), 6);
    assert_eq!(report.assets_copied, 3);
    assert!(out.path().join("models/esp32.glb").is_file());
    assert!(!out.path().join("data").exists());
}

#[test]
fn test_gallery_lists_devices_by_name() {
    let public = tempdir().unwrap();
    let out = tempdir().unwrap();
    write_public_dir(public.path());
    build(
        public.path(),
        out.path(),
        &Theme::default(),
        &RenderOptions::default(),
    )
    .unwrap();

    let gallery = read(out.path().join("gallery/index.html"));
    let uno = gallery.find("Arduino Uno").unwrap();
    let esp32 = gallery.find("ESP32 DevKit").unwrap();
    assert!(uno < esp32);
    assert!(gallery.contains(r#"href="../device/esp32/""#));
}

#[test]
fn test_device_page_content() {
    let public = tempdir().unwrap();
    let out = tempdir().unwrap();
    write_public_dir(public.path());
    build(
        public.path(),
        out.path(),
        &Theme::default(),
        &RenderOptions::default(),
    )
    .unwrap();

    let esp32 = read(out.path().join("device/esp32/index.html"));
    assert!(esp32.contains(r#"src="../../models/esp32.glb""#));
    assert!(esp32.contains(r#"data-hotspot-slot="hotspot-usb""#));
    assert!(esp32.contains(r#"<img src="../../images/esp32-pinout.png""#));
    assert!(esp32.contains(r#"<span class="code-comment">// Blink</span>"#));

    // Pinout image is missing for the Uno, and it has no model
    let uno = read(out.path().join("device/uno/index.html"));
    assert!(uno.contains(r#"<img src="../../placeholder.svg""#));
    assert!(!uno.contains("<model-viewer"));
}

#[test]
fn test_broken_document_renders_not_found() {
    let public = tempdir().unwrap();
    let out = tempdir().unwrap();
    write_public_dir(public.path());
    fs::write(public.path().join("data/broken.json"), "{ not json").unwrap();

    let report = build(
        public.path(),
        out.path(),
        &Theme::default(),
        &RenderOptions::default(),
    )
    .unwrap();

    let page = read(out.path().join("device/broken/index.html"));
    assert!(page.contains("Device Not Found"));
    assert!(report.warnings.iter().any(|w| w.starts_with("broken:")));
    assert!(!read(out.path().join("gallery/index.html")).contains("device/broken/"));
}

#[test]
fn test_about_markdown_from_public_dir() {
    let public = tempdir().unwrap();
    let out = tempdir().unwrap();
    write_public_dir(public.path());
    fs::write(public.path().join("about.md"), "# Workshop\n\n| a | b |\n|---|---|\n| 1 | 2 |\n")
        .unwrap();

    build(
        public.path(),
        out.path(),
        &Theme::default(),
        &RenderOptions::default(),
    )
    .unwrap();

    let about = read(out.path().join("about/index.html"));
    assert!(about.contains("<h1>Workshop</h1>"));
    assert!(about.contains("<table>"));
    assert!(!out.path().join("about.md").exists());
}

#[test]
fn test_stylesheet_uses_theme_colors() {
    let public = tempdir().unwrap();
    let out = tempdir().unwrap();
    write_public_dir(public.path());
    let theme = Theme::from_builtin("default-dark").unwrap();

    build(public.path(), out.path(), &theme, &RenderOptions::default()).unwrap();

    let css = read(out.path().join("assets/site.css"));
    assert!(css.contains("#0f172a"));
    assert!(css.contains(".code-keyword"));
}

#[test]
fn test_directory_source_and_validation() {
    let public = tempdir().unwrap();
    write_public_dir(public.path());
    let source = DirectorySource::new(public.path());

    assert_eq!(source.keys().unwrap(), vec!["esp32", "uno"]);
    assert!(source.load("../secrets").is_err());

    let esp32 = source.load("esp32").unwrap();
    assert!(validate("esp32", &esp32, Some(public.path())).is_empty());

    let uno = source.load("uno").unwrap();
    let issues = validate("uno", &uno, Some(public.path()));
    assert!(issues.iter().all(|i| i.severity == Severity::Warning));
    assert!(!issues.is_empty());
}
