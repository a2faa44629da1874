//! Hotspot router update handlers
//!
//! Binds the hotspot list to click events from the viewer surface and keeps
//! the single selection. Listeners are attached only after the surface has
//! reported load completion, and every attachment gets a fresh binding id.

use std::rc::Rc;

use crate::commands::Cmd;
use crate::messages::ViewerMsg;
use crate::model::{BindingId, Hotspot, HotspotRouter};
use crate::surface::markers_for;

/// Handle hotspot router messages
pub fn update_viewer(router: &mut HotspotRouter, msg: ViewerMsg) -> Option<Cmd> {
    let cmd = match msg {
        ViewerMsg::Mount { model, hotspots } => mount(router, model, hotspots),
        ViewerMsg::HotspotsChanged(hotspots) => change_hotspots(router, hotspots),
        ViewerMsg::ModelLoaded => model_loaded(router),
        ViewerMsg::MarkerClicked { binding, slot } => {
            marker_clicked(router, binding, &slot);
            None
        }
        ViewerMsg::ClearSelection => {
            router.clear_selection();
            None
        }
        ViewerMsg::Unmount => unmount(router),
    };

    router.assert_invariants();
    cmd
}

fn mount(router: &mut HotspotRouter, model: String, hotspots: Rc<[Hotspot]>) -> Option<Cmd> {
    let teardown = if router.is_mounted() {
        tracing::debug!("Remounting viewer; releasing previous model");
        unmount(router)
    } else {
        None
    };

    tracing::debug!("Mounting viewer: model={} hotspots={}", model, hotspots.len());
    let markers = markers_for(&hotspots);
    router.model_src = Some(model.clone());
    router.replace_hotspots(hotspots);

    Cmd::from_parts([
        teardown,
        Some(Cmd::LoadModel { src: model }),
        Some(Cmd::DeclareMarkers { markers }),
    ])
}

fn change_hotspots(router: &mut HotspotRouter, hotspots: Rc<[Hotspot]>) -> Option<Cmd> {
    let detach = release(router);
    let markers = markers_for(&hotspots);
    router.replace_hotspots(hotspots);

    if !router.is_mounted() {
        return detach;
    }

    // No new load signal will arrive for an already-loaded model
    let attach = if router.model_loaded {
        attach(router)
    } else {
        None
    };

    Cmd::from_parts([detach, Some(Cmd::DeclareMarkers { markers }), attach])
}

fn model_loaded(router: &mut HotspotRouter) -> Option<Cmd> {
    if !router.is_mounted() {
        tracing::debug!("Ignoring load signal with no model mounted");
        return None;
    }
    router.model_loaded = true;
    if router.is_listening() {
        return None;
    }
    attach(router)
}

fn marker_clicked(router: &mut HotspotRouter, binding: BindingId, slot: &str) {
    if router.binding != Some(binding) {
        tracing::debug!(
            "Ignoring click on '{}' from stale binding {} (active: {:?})",
            slot,
            binding,
            router.binding
        );
        return;
    }

    match router.resolve(slot) {
        Some(index) => router.select(index),
        None => tracing::debug!("Ignoring click on unknown slot '{}'", slot),
    }
}

fn unmount(router: &mut HotspotRouter) -> Option<Cmd> {
    if !router.is_mounted() {
        return None;
    }
    let detach = release(router);
    router.reset();
    Cmd::from_parts([
        detach,
        Some(Cmd::DeclareMarkers {
            markers: Vec::new(),
        }),
    ])
}

/// Attach listeners for the current list; an empty list never attaches
fn attach(router: &mut HotspotRouter) -> Option<Cmd> {
    if router.hotspots.is_empty() {
        return None;
    }
    let binding = router.allocate_binding();
    router.binding = Some(binding);
    tracing::debug!(
        "Attaching {} to {} hotspots",
        binding,
        router.hotspots.len()
    );
    Some(Cmd::AttachListeners { binding })
}

fn release(router: &mut HotspotRouter) -> Option<Cmd> {
    router
        .binding
        .take()
        .map(|binding| Cmd::DetachListeners { binding })
}
