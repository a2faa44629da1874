//! 3D model viewer with hotspot markers and the part info card

use super::{asset_url, RenderOptions};
use crate::model::{Device, Hotspot};
use crate::surface::markers_for;
use crate::util::escape_html;

const CARD_ID: &str = "part-info";

/// Render the `<model-viewer>` block, or nothing if the device has no model.
///
/// `selected` pre-fills the part info card.
pub fn model_viewer(
    device: &Device,
    root: &str,
    options: &RenderOptions,
    selected: Option<&Hotspot>,
) -> String {
    let Some(src) = device.model_src() else {
        return String::new();
    };

    let buttons: String = markers_for(&device.hotspots)
        .iter()
        .zip(device.hotspots.iter())
        .map(|(marker, hotspot)| {
            format!(
                r#"            <button class="hotspot-button" slot="{slot}" data-hotspot-slot="{slot}" data-position="{position}" data-normal="{normal}" data-label="{label}" data-description="{description}" data-datasheet="{datasheet}">
                <div class="hotspot-label">{label}</div>
            </button>
"#,
                slot = escape_html(&marker.slot),
                position = marker.position,
                normal = marker.normal,
                label = escape_html(&marker.label),
                description = escape_html(&hotspot.description),
                datasheet = escape_html(hotspot.datasheet_url().unwrap_or("")),
            )
        })
        .collect();

    let flags = match (options.auto_rotate, options.camera_controls) {
        (true, true) => " auto-rotate camera-controls",
        (true, false) => " auto-rotate",
        (false, true) => " camera-controls",
        (false, false) => "",
    };

    format!(
        r#"<section class="card viewer">
        <model-viewer src="{src}" alt="{alt}"{flags} shadow-intensity="1" data-hotspots="{count}" data-card="{CARD_ID}">
{buttons}        </model-viewer>
        <p class="muted"><strong>Controls:</strong> Click and drag to rotate, scroll to zoom, click the circular hotspots to learn about parts.</p>
    </section>
    {card}"#,
        src = escape_html(&asset_url(root, src)),
        alt = escape_html(&format!("{} 3D Model", device.name)),
        count = device.hotspots.len(),
        card = part_info_card(selected),
    )
}

/// The "Part Information" card; hidden until a hotspot is selected
pub fn part_info_card(selected: Option<&Hotspot>) -> String {
    let (hidden, label, description, datasheet) = match selected {
        Some(hotspot) => (
            "",
            escape_html(&hotspot.label),
            escape_html(&hotspot.description),
            hotspot.datasheet_url(),
        ),
        None => (" hidden", String::new(), String::new(), None),
    };

    let (link_hidden, href) = match datasheet {
        Some(url) => ("", escape_html(url)),
        None => (" hidden", "#".to_string()),
    };

    format!(
        r##"<section class="card part-info" id="{CARD_ID}"{hidden}>
        <header>
            <h3>Part Information</h3>
            <button class="button ghost" data-action="close" aria-label="Close">&times;</button>
        </header>
        <span class="badge">Selected Part</span>
        <h4 data-field="label">{label}</h4>
        <p class="muted" data-field="description">{description}</p>
        <p data-field="datasheet"{link_hidden}><a href="{href}" target="_blank" rel="noopener noreferrer">View Datasheet</a></p>
    </section>"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device() -> Device {
        Device::from_json(
            r#"{ "name": "ESP32", "model": "/models/esp32.glb",
                 "hotspots": [
                    { "slotName": "hotspot-1", "label": "Chip", "x": 0.5, "y": 1, "z": 0,
                      "description": "Main <MCU>", "datasheet": "https://example.com/d.pdf" },
                    { "slotName": "hotspot-2", "label": "USB", "x": 0, "y": 0, "z": -1 }
                 ] }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_markers_rendered_per_hotspot() {
        let html = model_viewer(&device(), "../../", &RenderOptions::default(), None);
        assert!(html.contains(r#"src="../../models/esp32.glb""#));
        assert!(html.contains(r#"slot="hotspot-1" data-hotspot-slot="hotspot-1" data-position="0.5m 1m 0m" data-normal="0m 1m 0m""#));
        assert!(html.contains(r#"data-position="0m 0m -1m""#));
        assert!(html.contains("data-description=\"Main &lt;MCU&gt;\""));
        assert!(html.contains(" auto-rotate camera-controls"));
    }

    #[test]
    fn test_no_model_renders_nothing() {
        let device = Device::from_json(r#"{ "name": "Bare" }"#).unwrap();
        assert!(model_viewer(&device, "./", &RenderOptions::default(), None).is_empty());
    }

    #[test]
    fn test_part_info_card() {
        let device = device();
        let hidden = part_info_card(None);
        assert!(hidden.contains(r#"id="part-info" hidden"#));

        let shown = part_info_card(Some(&device.hotspots[0]));
        assert!(shown.contains(r#"<h4 data-field="label">Chip</h4>"#));
        assert!(shown.contains("View Datasheet"));
        assert!(shown.contains(r#"<p data-field="datasheet"><a href="https://example.com/d.pdf""#));

        let no_link = part_info_card(Some(&device.hotspots[1]));
        assert!(no_link.contains(r#"<p data-field="datasheet" hidden>"#));
    }
}
