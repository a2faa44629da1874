//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::rc::Rc;

use crate::model::{BindingId, Device, Hotspot};

/// Device page navigation and document delivery
#[derive(Debug, Clone)]
pub enum PageMsg {
    /// Show the device page for `key`
    Navigate { key: String },
    /// Result of a document fetch; the error is a human-readable reason
    DocumentLoaded {
        key: String,
        result: Result<Rc<Device>, String>,
    },
}

/// Hotspot router messages (3D viewer)
#[derive(Debug, Clone)]
pub enum ViewerMsg {
    /// The viewer appeared with a model and its hotspots
    Mount {
        model: String,
        hotspots: Rc<[Hotspot]>,
    },
    /// The hotspot list was replaced
    HotspotsChanged(Rc<[Hotspot]>),
    /// The surface finished loading the model
    ModelLoaded,
    /// A marker was clicked through `binding`
    MarkerClicked { binding: BindingId, slot: String },
    /// Close the detail card
    ClearSelection,
    /// The viewer is being torn down
    Unmount,
}

/// Pinout image zoom controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinoutMsg {
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

/// Example code block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeMsg {
    /// Copy the example code to the clipboard
    Copy,
    /// Feedback timer for copy `seq` fired
    CopyFeedbackExpired { seq: u64 },
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Page messages (navigation, document loading)
    Page(PageMsg),
    /// Hotspot router messages
    Viewer(ViewerMsg),
    /// Pinout viewer messages
    Pinout(PinoutMsg),
    /// Code block messages
    Code(CodeMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a navigation message
    pub fn navigate(key: impl Into<String>) -> Self {
        Msg::Page(PageMsg::Navigate { key: key.into() })
    }

    /// Create a clear-selection message
    pub fn clear_selection() -> Self {
        Msg::Viewer(ViewerMsg::ClearSelection)
    }
}
