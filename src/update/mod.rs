//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod code_block;
mod page;
mod pinout;
mod viewer;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::PageModel;

#[cfg(debug_assertions)]
use crate::tracing::RouterSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use code_block::update_code_block;
pub use page::update_page;
pub use pinout::update_pinout;
pub use viewer::update_viewer;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut PageModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut PageModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Page(m) => page::update_page(model, m),
        Msg::Viewer(m) => viewer::update_viewer(&mut model.viewer, m),
        Msg::Pinout(m) => pinout::update_pinout(&mut model.pinout, m),
        Msg::Code(m) => code_block::update_code_block(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures router state before and after each message and logs the diff.
#[cfg(debug_assertions)]
fn update_traced(model: &mut PageModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    debug!(target: "message", msg = %msg_name, "processing");

    let before = RouterSnapshot::from_router(&model.viewer);
    let result = update_inner(model, msg);
    let after = RouterSnapshot::from_router(&model.viewer);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "router", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Page::Navigate { key: "esp32" }`
/// - `Viewer::ModelLoaded`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        // Documents are large; the key is enough
        Msg::Page(crate::messages::PageMsg::DocumentLoaded { key, result }) => format!(
            "Page::DocumentLoaded {{ key: {:?}, ok: {} }}",
            key,
            result.is_ok()
        ),
        Msg::Page(m) => format!("Page::{:?}", m),
        Msg::Viewer(crate::messages::ViewerMsg::Mount { model, hotspots }) => format!(
            "Viewer::Mount {{ model: {:?}, hotspots: {} }}",
            model,
            hotspots.len()
        ),
        Msg::Viewer(m) => format!("Viewer::{:?}", m),
        Msg::Pinout(m) => format!("Pinout::{:?}", m),
        Msg::Code(m) => format!("Code::{:?}", m),
    }
}
