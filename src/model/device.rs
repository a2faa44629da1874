//! Device documents
//!
//! One JSON document per board, loaded whole and never mutated. Field
//! names follow the data files (`pinoutImage`, `exampleCode`, `slotName`).

use std::rc::Rc;

use serde::{Deserialize, Deserializer};

/// Tag handed to the highlighter when a document doesn't name one
pub const DEFAULT_CODE_LANGUAGE: &str = "cpp";

/// Surface normal used for every hotspot marker
pub const MARKER_NORMAL: &str = "0m 1m 0m";

/// A development board document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub name: String,
    /// 3D model reference (URL or path relative to the site root)
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub pinout_image: String,
    #[serde(default)]
    pub components: Vec<Component>,
    /// Shared with the hotspot router; an absent or null list is empty
    #[serde(default = "no_hotspots", deserialize_with = "deserialize_hotspots")]
    pub hotspots: Rc<[Hotspot]>,
    #[serde(default)]
    pub example_code: String,

    /// Gallery card text
    #[serde(default)]
    pub description: Option<String>,
    /// Gallery card image
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_code_language")]
    pub code_language: String,
}

/// One row of the components table
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Component {
    pub name: String,
    #[serde(default)]
    pub function: String,
    #[serde(default)]
    pub datasheet: Option<String>,
}

/// A clickable point on the 3D model
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    pub slot_name: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub datasheet: Option<String>,
}

/// Gallery projection of a device; `key` is the document file stem
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSummary {
    pub key: String,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

fn no_hotspots() -> Rc<[Hotspot]> {
    Rc::from(Vec::new())
}

fn default_code_language() -> String {
    DEFAULT_CODE_LANGUAGE.to_string()
}

fn deserialize_hotspots<'de, D>(deserializer: D) -> Result<Rc<[Hotspot]>, D::Error>
where
    D: Deserializer<'de>,
{
    let list: Option<Vec<Hotspot>> = Option::deserialize(deserializer)?;
    Ok(Rc::from(list.unwrap_or_default()))
}

/// `"#"` and empty links are placeholders in the data files
fn link(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty() && *url != "#")
}

impl Device {
    /// Parse a document from JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn summary(&self, key: &str) -> DeviceSummary {
        DeviceSummary {
            key: key.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
        }
    }

    /// The model reference, if the document has a non-empty one
    pub fn model_src(&self) -> Option<&str> {
        self.model.as_deref().filter(|src| !src.trim().is_empty())
    }

    pub fn has_hotspots(&self) -> bool {
        !self.hotspots.is_empty()
    }
}

impl Component {
    pub fn datasheet_url(&self) -> Option<&str> {
        link(&self.datasheet)
    }
}

impl Hotspot {
    /// Marker position attribute, e.g. `"0.5m 1m -0.25m"`
    pub fn position(&self) -> String {
        format!("{}m {}m {}m", self.x, self.y, self.z)
    }

    pub fn datasheet_url(&self) -> Option<&str> {
        link(&self.datasheet)
    }

    pub fn has_finite_position(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
