//! Device document retrieval and validation
//!
//! Documents live at `{public}/data/{key}.json`. Retrieval goes through the
//! [`DocumentSource`] trait so the runtime can be driven from memory in tests.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};

use crate::model::{Device, DeviceSummary};

/// Directory under the public root holding the documents
pub const DATA_DIR: &str = "data";

/// Something that can produce a device document by key
pub trait DocumentSource {
    fn load(&self, key: &str) -> Result<Device>;
}

/// Reject keys that could escape the data directory
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        bail!("empty device key");
    }
    if key.contains(['/', '\\']) || key.contains("..") || key.starts_with('.') {
        bail!("invalid device key '{}'", key);
    }
    Ok(())
}

/// Documents read from a public directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    public_dir: PathBuf,
}

impl DirectorySource {
    pub fn new(public_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: public_dir.into(),
        }
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.public_dir.join(DATA_DIR)
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.data_dir().join(format!("{}.json", key)))
    }

    /// Keys of every `*.json` document, sorted
    pub fn keys(&self) -> Result<Vec<String>> {
        let dir = self.data_dir();
        let entries = fs::read_dir(&dir)
            .with_context(|| format!("Failed to read data directory {}", dir.display()))?;

        let mut keys: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .filter(|key| validate_key(key).is_ok())
            .collect();
        keys.sort();
        Ok(keys)
    }

    /// Load every document, keeping failures alongside their keys
    pub fn load_all(&self) -> Result<Vec<(String, Result<Device>)>> {
        Ok(self
            .keys()?
            .into_iter()
            .map(|key| {
                let result = self.load(&key);
                (key, result)
            })
            .collect())
    }
}

impl DocumentSource for DirectorySource {
    fn load(&self, key: &str) -> Result<Device> {
        let path = self.path_for(key)?;
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let device = Device::from_json(&text)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!("Read device '{}' from {}", key, path.display());
        Ok(device)
    }
}

/// Documents held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, Device>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, device: Device) -> Self {
        self.insert(key, device);
        self
    }

    pub fn insert(&mut self, key: &str, device: Device) {
        self.documents.insert(key.to_string(), device);
    }
}

impl DocumentSource for MemorySource {
    fn load(&self, key: &str) -> Result<Device> {
        self.documents
            .get(key)
            .cloned()
            .ok_or_else(|| anyhow!("no document for '{}'", key))
    }
}

/// Gallery entries sorted by device name, then key
pub fn summaries<'a>(devices: impl IntoIterator<Item = (&'a str, &'a Device)>) -> Vec<DeviceSummary> {
    let mut list: Vec<DeviceSummary> = devices
        .into_iter()
        .map(|(key, device)| device.summary(key))
        .collect();
    list.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.key.cmp(&b.key))
    });
    list
}

/// Map a site-relative asset reference to a file in the public directory.
///
/// Returns `None` for remote URLs and empty references.
pub fn asset_path(public_dir: &Path, reference: &str) -> Option<PathBuf> {
    let reference = reference.trim();
    if reference.is_empty() || reference.contains("://") || reference.starts_with("data:") {
        return None;
    }
    let relative = reference.trim_start_matches('/');
    if relative.split('/').any(|part| part == "..") {
        return None;
    }
    Some(public_dir.join(relative))
}

/// Whether a referenced asset is available (remote URLs are assumed to be)
pub fn asset_exists(public_dir: &Path, reference: &str) -> bool {
    let reference = reference.trim();
    if reference.is_empty() {
        return false;
    }
    match asset_path(public_dir, reference) {
        Some(path) => path.is_file(),
        None => reference.contains("://") || reference.starts_with("data:"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A problem found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub key: String,
    pub message: String,
}

impl Issue {
    fn error(key: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            key: key.to_string(),
            message: message.into(),
        }
    }

    fn warning(key: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            key: key.to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.key, self.message)
    }
}

/// Check a document for problems that would break its page.
///
/// Asset checks run only when `public_dir` is given.
pub fn validate(key: &str, device: &Device, public_dir: Option<&Path>) -> Vec<Issue> {
    let mut issues = Vec::new();

    if device.name.trim().is_empty() {
        issues.push(Issue::error(key, "device name is empty"));
    }

    for (i, component) in device.components.iter().enumerate() {
        if component.name.trim().is_empty() {
            issues.push(Issue::error(key, format!("component {} has an empty name", i + 1)));
        }
    }

    let mut seen = HashSet::new();
    for (i, hotspot) in device.hotspots.iter().enumerate() {
        if hotspot.slot_name.trim().is_empty() {
            issues.push(Issue::error(key, format!("hotspot {} has an empty slot name", i + 1)));
        } else if !seen.insert(hotspot.slot_name.as_str()) {
            issues.push(Issue::error(
                key,
                format!(
                    "duplicate hotspot slot '{}'; only the first is clickable",
                    hotspot.slot_name
                ),
            ));
        }
        if !hotspot.has_finite_position() {
            issues.push(Issue::error(
                key,
                format!("hotspot '{}' has a non-finite position", hotspot.slot_name),
            ));
        }
    }

    if device.has_hotspots() && device.model_src().is_none() {
        issues.push(Issue::warning(key, "hotspots are listed but there is no model"));
    }

    if device.pinout_image.trim().is_empty() {
        issues.push(Issue::warning(key, "no pinout image; the placeholder is shown"));
    } else if let Some(dir) = public_dir {
        if !asset_exists(dir, &device.pinout_image) {
            issues.push(Issue::warning(
                key,
                format!(
                    "pinout image '{}' not found; the placeholder is shown",
                    device.pinout_image
                ),
            ));
        }
    }

    if let (Some(dir), Some(model)) = (public_dir, device.model_src()) {
        if !asset_exists(dir, model) {
            issues.push(Issue::warning(key, format!("model '{}' not found", model)));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(json: &str) -> Device {
        Device::from_json(json).unwrap()
    }

    #[test]
    fn test_validate_key() {
        assert!(validate_key("esp32").is_ok());
        assert!(validate_key("arduino-uno_r3").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../secrets").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("a\\b").is_err());
        assert!(validate_key(".hidden").is_err());
    }

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new().with("a", device(r#"{ "name": "A" }"#));
        assert_eq!(source.load("a").unwrap().name, "A");
        assert!(source.load("b").is_err());
    }

    #[test]
    fn test_summaries_sorted_by_name() {
        let a = device(r#"{ "name": "Raspberry Pi Pico" }"#);
        let b = device(r#"{ "name": "arduino Uno" }"#);
        let c = device(r#"{ "name": "ESP32" }"#);
        let list = summaries([("pico", &a), ("uno", &b), ("esp32", &c)]);
        let keys: Vec<&str> = list.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["uno", "esp32", "pico"]);
    }

    #[test]
    fn test_asset_path() {
        let public = Path::new("/site/public");
        assert_eq!(
            asset_path(public, "/images/a.png"),
            Some(PathBuf::from("/site/public/images/a.png"))
        );
        assert_eq!(asset_path(public, "https://cdn.example.com/a.png"), None);
        assert_eq!(asset_path(public, "/../etc/passwd"), None);
        assert_eq!(asset_path(public, ""), None);
    }

    #[test]
    fn test_validate_clean_document() {
        let d = device(
            r#"{ "name": "A", "model": "a.glb", "pinoutImage": "p.png",
                 "hotspots": [{ "slotName": "h1", "label": "L", "x": 0, "y": 0, "z": 0 }] }"#,
        );
        assert!(validate("a", &d, None).is_empty());
    }

    #[test]
    fn test_validate_reports_problems() {
        let d = device(
            r#"{ "name": " ",
                 "components": [{ "name": "", "function": "x" }],
                 "hotspots": [
                    { "slotName": "h1", "label": "L", "x": 0, "y": 0, "z": 0 },
                    { "slotName": "h1", "label": "M", "x": 1, "y": 0, "z": 0 },
                    { "slotName": "", "label": "N", "x": 1, "y": 0, "z": 0 }
                 ] }"#,
        );
        let issues = validate("bad", &d, None);
        let errors = issues.iter().filter(|i| i.is_error()).count();
        assert_eq!(errors, 4);
        assert!(issues.iter().any(|i| i.message.contains("duplicate hotspot slot 'h1'")));
        assert!(issues
            .iter()
            .any(|i| i.severity == Severity::Warning && i.message.contains("no model")));
        assert!(issues.iter().any(|i| i.message.contains("no pinout image")));
    }

    #[test]
    fn test_validate_non_finite_position() {
        let mut d = device(
            r#"{ "name": "A", "model": "a.glb", "pinoutImage": "p.png",
                 "hotspots": [{ "slotName": "h1", "label": "L", "x": 0, "y": 0, "z": 0 }] }"#,
        );
        let mut hotspots = d.hotspots.to_vec();
        hotspots[0].y = f64::NAN;
        d.hotspots = hotspots.into();
        let issues = validate("a", &d, None);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("non-finite"));
    }

    #[test]
    fn test_issue_display() {
        let issue = Issue::error("esp32", "device name is empty");
        assert_eq!(issue.to_string(), "error: esp32: device name is empty");
    }
}
