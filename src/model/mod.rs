//! Page model - the complete state of a device page
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod code_block;
pub mod device;
pub mod pinout;
pub mod viewer;

pub use code_block::{CodeBlockState, COPY_FEEDBACK_MS};
pub use device::{Component, Device, DeviceSummary, Hotspot};
pub use pinout::PinoutState;
pub use viewer::{BindingId, HotspotRouter};

use std::rc::Rc;

/// Where the page is in fetching its document
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading {
        key: String,
    },
    NotFound {
        key: String,
        reason: String,
    },
    Ready {
        key: String,
        device: Rc<Device>,
    },
}

impl LoadState {
    /// Key of the document requested or shown
    pub fn key(&self) -> Option<&str> {
        match self {
            LoadState::Idle => None,
            LoadState::Loading { key }
            | LoadState::NotFound { key, .. }
            | LoadState::Ready { key, .. } => Some(key),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading { .. })
    }
}

/// State of one device page
#[derive(Debug, Default)]
pub struct PageModel {
    pub load: LoadState,
    /// Hotspot router for the 3D viewer
    pub viewer: HotspotRouter,
    pub pinout: PinoutState,
    pub code: CodeBlockState,
}

impl PageModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The loaded device, if the page is ready
    pub fn device(&self) -> Option<&Rc<Device>> {
        match &self.load {
            LoadState::Ready { device, .. } => Some(device),
            _ => None,
        }
    }

    /// The hotspot shown in the detail card
    pub fn selected_hotspot(&self) -> Option<&Hotspot> {
        self.viewer.selected()
    }

    /// Reset per-page view state ahead of a navigation
    pub fn reset_view(&mut self) {
        self.pinout = PinoutState::default();
        self.code = CodeBlockState::default();
    }
}
