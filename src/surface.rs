//! 3D viewer surface abstraction
//!
//! The hotspot router never touches a viewer directly. It asks for markers
//! to be declared and for click listeners to be attached or detached under
//! a [`BindingId`]. Click events come back carrying the binding they were
//! delivered through, so events from a released binding can be told apart.

use crate::messages::{Msg, ViewerMsg};
use crate::model::device::{Hotspot, MARKER_NORMAL};
use crate::model::BindingId;

/// One declared marker on the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub slot: String,
    pub label: String,
    /// `"{x}m {y}m {z}m"`
    pub position: String,
    pub normal: String,
}

impl Marker {
    pub fn for_hotspot(hotspot: &Hotspot) -> Self {
        Self {
            slot: hotspot.slot_name.clone(),
            label: hotspot.label.clone(),
            position: hotspot.position(),
            normal: MARKER_NORMAL.to_string(),
        }
    }
}

/// Markers for every hotspot, in list order
pub fn markers_for(hotspots: &[Hotspot]) -> Vec<Marker> {
    hotspots.iter().map(Marker::for_hotspot).collect()
}

/// Operations the router needs from a 3D viewer
pub trait ViewerSurface {
    /// Start loading a model; completion is reported as `ViewerMsg::ModelLoaded`
    fn load_model(&mut self, src: &str);

    /// Replace the declared markers
    fn declare_markers(&mut self, markers: &[Marker]);

    /// Start delivering marker clicks under `binding`
    fn attach_listeners(&mut self, binding: BindingId);

    /// Stop delivering clicks for `binding`
    fn detach_listeners(&mut self, binding: BindingId);
}

/// A recorded surface call, for inspecting ordering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    LoadModel(String),
    DeclareMarkers(Vec<String>),
    Attach(BindingId),
    Detach(BindingId),
}

/// In-memory viewer used by the explorer and by tests
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    model: Option<String>,
    markers: Vec<Marker>,
    active: Option<BindingId>,
    calls: Vec<SurfaceCall>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn active_binding(&self) -> Option<BindingId> {
        self.active
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// The load event for the current model, if one is set
    pub fn finish_loading(&self) -> Option<Msg> {
        self.model
            .as_ref()
            .map(|_| Msg::Viewer(ViewerMsg::ModelLoaded))
    }

    /// Simulate a click on the marker for `slot`.
    ///
    /// Produces nothing when no listener is attached or no such marker is
    /// declared, as a real viewer would.
    pub fn click(&self, slot: &str) -> Option<Msg> {
        let binding = self.active?;
        self.markers.iter().find(|m| m.slot == slot).map(|m| {
            Msg::Viewer(ViewerMsg::MarkerClicked {
                binding,
                slot: m.slot.clone(),
            })
        })
    }
}

impl ViewerSurface for HeadlessSurface {
    fn load_model(&mut self, src: &str) {
        self.model = Some(src.to_string());
        self.calls.push(SurfaceCall::LoadModel(src.to_string()));
    }

    fn declare_markers(&mut self, markers: &[Marker]) {
        self.markers = markers.to_vec();
        self.calls.push(SurfaceCall::DeclareMarkers(
            markers.iter().map(|m| m.slot.clone()).collect(),
        ));
    }

    fn attach_listeners(&mut self, binding: BindingId) {
        if let Some(previous) = self.active {
            tracing::warn!(
                "Attaching binding {} while {} is still active",
                binding,
                previous
            );
        }
        self.active = Some(binding);
        self.calls.push(SurfaceCall::Attach(binding));
    }

    fn detach_listeners(&mut self, binding: BindingId) {
        if self.active == Some(binding) {
            self.active = None;
        }
        self.calls.push(SurfaceCall::Detach(binding));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotspot(slot: &str) -> Hotspot {
        Hotspot {
            slot_name: slot.to_string(),
            label: slot.to_uppercase(),
            x: 1.0,
            y: 0.5,
            z: 0.0,
            description: String::new(),
            datasheet: None,
        }
    }

    #[test]
    fn test_marker_attributes() {
        let marker = Marker::for_hotspot(&hotspot("a"));
        assert_eq!(marker.slot, "a");
        assert_eq!(marker.position, "1m 0.5m 0m");
        assert_eq!(marker.normal, "0m 1m 0m");
    }

    #[test]
    fn test_click_requires_attached_listener() {
        let mut surface = HeadlessSurface::new();
        surface.declare_markers(&markers_for(&[hotspot("a")]));
        assert!(surface.click("a").is_none());

        surface.attach_listeners(BindingId(3));
        match surface.click("a") {
            Some(Msg::Viewer(ViewerMsg::MarkerClicked { binding, slot })) => {
                assert_eq!(binding, BindingId(3));
                assert_eq!(slot, "a");
            }
            other => panic!("unexpected click result: {:?}", other),
        }
        assert!(surface.click("missing").is_none());
    }

    #[test]
    fn test_detach_only_releases_matching_binding() {
        let mut surface = HeadlessSurface::new();
        surface.attach_listeners(BindingId(2));
        surface.detach_listeners(BindingId(1));
        assert_eq!(surface.active_binding(), Some(BindingId(2)));
        surface.detach_listeners(BindingId(2));
        assert_eq!(surface.active_binding(), None);
    }

    #[test]
    fn test_finish_loading_needs_model() {
        let mut surface = HeadlessSurface::new();
        assert!(surface.finish_loading().is_none());
        surface.load_model("board.glb");
        assert!(surface.finish_loading().is_some());
    }
}
