//! Pinout image with zoom controls

use super::{asset_url, RenderOptions, PLACEHOLDER_IMAGE};
use crate::catalog::asset_exists;
use crate::model::pinout::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use crate::model::{Device, PinoutState};
use crate::util::escape_html;

/// Render the pinout viewer.
///
/// When the referenced image is missing from the public directory the
/// placeholder is used instead.
pub fn pinout_viewer(
    device: &Device,
    root: &str,
    options: &RenderOptions,
    state: &PinoutState,
) -> String {
    let placeholder = format!("{}{}", root, PLACEHOLDER_IMAGE);
    let reference = device.pinout_image.trim();
    let available = match &options.public_dir {
        Some(dir) => asset_exists(dir, reference),
        None => !reference.is_empty(),
    };
    let src = if available {
        asset_url(root, reference)
    } else {
        if !reference.is_empty() {
            tracing::debug!("Pinout image '{}' missing, using placeholder", reference);
        }
        placeholder.clone()
    };

    let disabled = |yes: bool| if yes { " disabled" } else { "" };

    format!(
        r#"<div class="pinout-frame" data-pinout data-min="{MIN_ZOOM}" data-max="{MAX_ZOOM}" data-step="{ZOOM_STEP}" data-scale="{scale}">
            <div class="pinout-controls">
                <button class="button ghost" data-zoom="out" aria-label="Zoom Out"{out_disabled}>&minus;</button>
                <button class="button ghost" data-zoom="reset" aria-label="Reset Zoom">&#8634;</button>
                <button class="button ghost" data-zoom="in" aria-label="Zoom In"{in_disabled}>+</button>
            </div>
            <img src="{src}" alt="{alt}" data-placeholder="{placeholder}" style="transform: scale({scale})">
            <div class="pinout-zoom-label">{label}</div>
        </div>"#,
        scale = state.scale,
        out_disabled = disabled(!state.can_zoom_out()),
        in_disabled = disabled(!state.can_zoom_in()),
        src = escape_html(&src),
        alt = escape_html(&format!("{} Pinout", device.name)),
        placeholder = escape_html(&placeholder),
        label = state.label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn device(pinout: &str) -> Device {
        Device::from_json(&format!(
            r#"{{ "name": "Board", "pinoutImage": "{}" }}"#,
            pinout
        ))
        .unwrap()
    }

    fn options(public_dir: Option<&std::path::Path>) -> RenderOptions {
        RenderOptions {
            public_dir: public_dir.map(|p| p.to_path_buf()),
            ..RenderOptions::default()
        }
    }

    #[test]
    fn test_existing_image_is_used() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("images/p.png"), b"png").unwrap();

        let html = pinout_viewer(
            &device("/images/p.png"),
            "../../",
            &options(Some(dir.path())),
            &PinoutState::default(),
        );
        assert!(html.contains(r#"<img src="../../images/p.png""#));
        assert!(html.contains(">100%<"));
    }

    #[test]
    fn test_missing_image_uses_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let html = pinout_viewer(
            &device("/images/missing.png"),
            "../../",
            &options(Some(dir.path())),
            &PinoutState::default(),
        );
        assert!(html.contains(r#"<img src="../../placeholder.svg""#));
    }

    #[test]
    fn test_zoom_buttons_reflect_limits() {
        let mut state = PinoutState::default();
        for _ in 0..10 {
            state.zoom_in();
        }
        let html = pinout_viewer(&device("p.png"), "./", &options(None), &state);
        assert!(html.contains(r#"aria-label="Zoom In" disabled"#));
        assert!(!html.contains(r#"aria-label="Zoom Out" disabled"#));
        assert!(html.contains(">300%<"));
    }
}
