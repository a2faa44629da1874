//! Pinout viewer update handlers

use crate::commands::Cmd;
use crate::messages::PinoutMsg;
use crate::model::PinoutState;

/// Handle zoom messages; zooming past the limits is a no-op
pub fn update_pinout(pinout: &mut PinoutState, msg: PinoutMsg) -> Option<Cmd> {
    let changed = match msg {
        PinoutMsg::ZoomIn => pinout.zoom_in(),
        PinoutMsg::ZoomOut => pinout.zoom_out(),
        PinoutMsg::ResetZoom => pinout.reset(),
    };
    if changed {
        tracing::debug!("Pinout zoom now {}", pinout.label());
    }
    None
}
