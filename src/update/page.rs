//! Device page update handlers
//!
//! Navigation starts a document fetch; the response is accepted only if it
//! answers the request currently outstanding.

use std::rc::Rc;

use crate::commands::Cmd;
use crate::messages::{PageMsg, ViewerMsg};
use crate::model::{Device, LoadState, PageModel};

use super::viewer::update_viewer;

/// Handle page messages
pub fn update_page(model: &mut PageModel, msg: PageMsg) -> Option<Cmd> {
    match msg {
        PageMsg::Navigate { key } => {
            tracing::debug!("Navigating to device '{}'", key);
            let teardown = update_viewer(&mut model.viewer, ViewerMsg::Unmount);
            model.reset_view();
            model.load = LoadState::Loading { key: key.clone() };
            Cmd::from_parts([teardown, Some(Cmd::FetchDocument { key })])
        }

        PageMsg::DocumentLoaded { key, result } => {
            let current = match &model.load {
                LoadState::Loading { key } => key.as_str(),
                other => {
                    tracing::debug!(
                        "Discarding document '{}': no fetch outstanding ({:?})",
                        key,
                        other.key()
                    );
                    return None;
                }
            };
            if current != key {
                tracing::debug!(
                    "Discarding stale document '{}' (current request: '{}')",
                    key,
                    current
                );
                return None;
            }

            match result {
                Ok(device) => show_device(model, key, device),
                Err(reason) => {
                    tracing::warn!("Device '{}' unavailable: {}", key, reason);
                    model.load = LoadState::NotFound { key, reason };
                    None
                }
            }
        }
    }
}

fn show_device(model: &mut PageModel, key: String, device: Rc<Device>) -> Option<Cmd> {
    tracing::info!("Loaded device '{}' ({})", key, device.name);
    model.reset_view();

    let mount = device.model_src().map(|src| ViewerMsg::Mount {
        model: src.to_string(),
        hotspots: Rc::clone(&device.hotspots),
    });
    model.load = LoadState::Ready { key, device };

    mount.and_then(|msg| update_viewer(&mut model.viewer, msg))
}
