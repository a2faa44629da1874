//! Tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! page loading, hotspot routing and site builds.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=message=debug,router=debug` - scoped filtering
//! - `RUST_LOG=boardscope::site=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/boardscope/logs/boardscope.log` with daily
//! rotation. File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_PREFIX;
use crate::model::{BindingId, HotspotRouter};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes
/// to the logs directory with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console goes to stderr so `highlight` output stays clean
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of router state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterSnapshot {
    pub mounted: bool,
    pub model_loaded: bool,
    pub hotspot_count: usize,
    pub binding: Option<BindingId>,
    pub selected: Option<String>,
}

impl RouterSnapshot {
    pub fn from_router(router: &HotspotRouter) -> Self {
        Self {
            mounted: router.is_mounted(),
            model_loaded: router.model_loaded,
            hotspot_count: router.hotspots.len(),
            binding: router.binding,
            selected: router.selected().map(|h| h.slot_name.clone()),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &RouterSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.mounted != other.mounted {
            changes.push(format!("mounted: {} → {}", self.mounted, other.mounted));
        }
        if self.model_loaded != other.model_loaded {
            changes.push(format!(
                "loaded: {} → {}",
                self.model_loaded, other.model_loaded
            ));
        }
        if self.hotspot_count != other.hotspot_count {
            changes.push(format!(
                "hotspots: {} → {}",
                self.hotspot_count, other.hotspot_count
            ));
        }
        if self.binding != other.binding {
            changes.push(format!("binding: {:?} → {:?}", self.binding, other.binding));
        }
        if self.selected != other.selected {
            changes.push(format!(
                "selected: {} → {}",
                self.selected.as_deref().unwrap_or("none"),
                other.selected.as_deref().unwrap_or("none")
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
