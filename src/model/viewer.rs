//! Hotspot router state
//!
//! Tracks the mounted model, the current hotspot list, the active listener
//! binding and the single selection. Transitions live in `update::viewer`.

use std::fmt;
use std::rc::Rc;

use super::device::Hotspot;

/// Identifies one attachment of click listeners to a hotspot list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BindingId(pub u64);

impl fmt::Display for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct HotspotRouter {
    /// Model reference while mounted
    pub model_src: Option<String>,
    pub hotspots: Rc<[Hotspot]>,
    /// Set once the surface reports load completion for the mounted model
    pub model_loaded: bool,
    /// Binding currently receiving clicks
    pub binding: Option<BindingId>,
    next_binding: u64,
    selected: Option<usize>,
}

impl Default for HotspotRouter {
    fn default() -> Self {
        Self {
            model_src: None,
            hotspots: Rc::from(Vec::new()),
            model_loaded: false,
            binding: None,
            next_binding: 1,
            selected: None,
        }
    }
}

impl HotspotRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.model_src.is_some()
    }

    pub fn is_listening(&self) -> bool {
        self.binding.is_some()
    }

    /// The selected hotspot, if any
    pub fn selected(&self) -> Option<&Hotspot> {
        self.selected.and_then(|index| self.hotspots.get(index))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// First hotspot whose slot name equals `slot`
    pub fn resolve(&self, slot: &str) -> Option<usize> {
        self.hotspots.iter().position(|h| h.slot_name == slot)
    }

    /// Select by index into the current list; out-of-range indices clear
    pub fn select(&mut self, index: usize) {
        self.selected = (index < self.hotspots.len()).then_some(index);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Install a new list, dropping the selection
    pub fn replace_hotspots(&mut self, hotspots: Rc<[Hotspot]>) {
        self.hotspots = hotspots;
        self.selected = None;
    }

    /// Allocate a fresh binding id; ids only ever increase
    pub fn allocate_binding(&mut self) -> BindingId {
        let id = BindingId(self.next_binding);
        self.next_binding += 1;
        id
    }

    /// Forget everything about the mounted model, keeping the id counter
    pub fn reset(&mut self) {
        let next_binding = self.next_binding;
        *self = Self {
            next_binding,
            ..Self::default()
        };
    }

    /// Check that the selection refers to a hotspot in the current list
    pub fn assert_invariants(&self) {
        if let Some(index) = self.selected {
            debug_assert!(
                index < self.hotspots.len(),
                "selection {} out of range for {} hotspots",
                index,
                self.hotspots.len()
            );
        }
        debug_assert!(
            self.binding.is_none() || (self.model_loaded && !self.hotspots.is_empty()),
            "listening without a loaded model or hotspots"
        );
    }
}
