//! Site configuration persistence
//!
//! Stores defaults for the site builder in `~/.config/boardscope/config.yaml`.
//! Command-line flags override whatever is loaded here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// model-viewer web component used when the config doesn't name one
pub const DEFAULT_MODEL_VIEWER_SCRIPT: &str =
    "https://ajax.googleapis.com/ajax/libs/model-viewer/3.4.0/model-viewer.min.js";

/// Site configuration that persists across runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Selected theme id (e.g., "default-light", "default-dark")
    pub theme: String,
    /// Title shown in the header and page titles
    pub site_title: String,
    /// Directory holding `data/*.json` and the site assets
    pub public_dir: PathBuf,
    /// Where the built site is written
    pub out_dir: PathBuf,
    /// Script URL for the `<model-viewer>` element
    pub model_viewer_script: String,
    pub auto_rotate: bool,
    pub camera_controls: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: "default-light".to_string(),
            site_title: "Dev Board Explorer".to_string(),
            public_dir: PathBuf::from("public"),
            out_dir: PathBuf::from("dist"),
            model_viewer_script: DEFAULT_MODEL_VIEWER_SCRIPT.to_string(),
            auto_rotate: true,
            camera_controls: true,
        }
    }
}

impl SiteConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Update theme and save, to `path` or the default config file
    pub fn set_theme(&mut self, theme_id: &str, path: Option<&Path>) -> Result<(), String> {
        self.theme = theme_id.to_string();
        match path {
            Some(path) => self.save_to(path),
            None => self.save(),
        }
    }
}
