//! Pinout image zoom state

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.25;
pub const DEFAULT_ZOOM: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinoutState {
    pub scale: f64,
}

impl Default for PinoutState {
    fn default() -> Self {
        Self {
            scale: DEFAULT_ZOOM,
        }
    }
}

impl PinoutState {
    pub fn can_zoom_in(&self) -> bool {
        self.scale < MAX_ZOOM
    }

    pub fn can_zoom_out(&self) -> bool {
        self.scale > MIN_ZOOM
    }

    /// Returns true if the scale changed
    pub fn zoom_in(&mut self) -> bool {
        self.set_scale(self.scale + ZOOM_STEP)
    }

    /// Returns true if the scale changed
    pub fn zoom_out(&mut self) -> bool {
        self.set_scale(self.scale - ZOOM_STEP)
    }

    pub fn reset(&mut self) -> bool {
        self.set_scale(DEFAULT_ZOOM)
    }

    /// Percentage label, e.g. `"125%"`
    pub fn label(&self) -> String {
        format!("{}%", (self.scale * 100.0).round() as i64)
    }

    fn set_scale(&mut self, scale: f64) -> bool {
        let scale = scale.clamp(MIN_ZOOM, MAX_ZOOM);
        let changed = scale != self.scale;
        self.scale = scale;
        changed
    }
}
