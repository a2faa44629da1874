//! Boardscope - documentation site builder for development boards
//!
//! This crate provides the core types and logic for rendering device
//! documentation pages, following the Elm Architecture pattern for the
//! interactive parts of a page (hotspot routing, pinout zoom, copy feedback).

pub mod app;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod explore;
pub mod fs_watcher;
pub mod messages;
pub mod model;
pub mod render;
pub mod runtime;
pub mod site;
pub mod surface;
pub mod syntax;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use catalog::{DirectorySource, DocumentSource, MemorySource};
pub use commands::Cmd;
pub use config::SiteConfig;
pub use messages::Msg;
pub use model::{Device, Hotspot, HotspotRouter, PageModel};
pub use runtime::Session;
pub use surface::{HeadlessSurface, ViewerSurface};
pub use syntax::{highlight, highlight_html};
pub use theme::Theme;
