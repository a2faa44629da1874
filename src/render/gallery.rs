//! Home and gallery pages

use super::{asset_url, layout, root_for_depth, NavItem, RenderOptions, PLACEHOLDER_IMAGE};
use crate::model::DeviceSummary;
use crate::util::escape_html;

/// One card per device, in the order given (callers sort by name)
pub fn gallery_page(devices: &[DeviceSummary], options: &RenderOptions) -> String {
    let root = root_for_depth(1);

    let cards: String = devices
        .iter()
        .map(|device| {
            let image = device
                .image
                .as_deref()
                .filter(|src| !src.trim().is_empty())
                .map(|src| asset_url(&root, src))
                .unwrap_or_else(|| format!("{}{}", root, PLACEHOLDER_IMAGE));
            format!(
                r#"        <article class="card device-card">
            <img src="{image}" alt="{name}">
            <div class="body">
                <h3>{name}</h3>
                <p class="muted">{description}</p>
                <a class="button" href="{root}device/{key}/">Learn More &rarr;</a>
            </div>
        </article>
"#,
                image = escape_html(&image),
                name = escape_html(&device.name),
                description = escape_html(device.description.as_deref().unwrap_or("")),
                key = escape_html(&device.key),
            )
        })
        .collect();

    let grid = if devices.is_empty() {
        r#"    <p class="empty">No devices yet. Add documents to the data directory.</p>"#.to_string()
    } else {
        format!("    <div class=\"device-grid\">\n{}    </div>", cards)
    };

    let body = format!(
        r#"    <div class="hero">
        <h1>Device Gallery</h1>
        <p class="muted">Explore our collection of development boards and microcontrollers with detailed documentation.</p>
    </div>
{grid}
    <section class="card hero">
        <h3>More Devices Coming Soon</h3>
        <p class="muted">New development boards and microcontrollers are added regularly.</p>
    </section>"#
    );

    layout("Device Gallery", &root, NavItem::Gallery, options, &body, false)
}

pub fn home_page(options: &RenderOptions) -> String {
    let root = root_for_depth(0);
    let body = format!(
        r#"    <section class="hero">
        <h1>Explore the World of <span>Electronics</span></h1>
        <p class="muted">Learn about microcontrollers, development boards, and embedded systems through interactive documentation and examples.</p>
        <a class="button" href="{root}gallery/">Explore Devices &rarr;</a>
        <a class="button ghost" href="{root}about/">Learn More</a>
    </section>
    <section class="features">
        <div class="card">
            <h3>Detailed Specs</h3>
            <p class="muted">Technical specifications, pinout diagrams, and component details for each device.</p>
        </div>
        <div class="card">
            <h3>Code Examples</h3>
            <p class="muted">Ready-to-use example code to get started quickly.</p>
        </div>
        <div class="card">
            <h3>Interactive Learning</h3>
            <p class="muted">Explore 3D models and interactive diagrams to understand the hardware.</p>
        </div>
    </section>"#
    );
    layout("", &root, NavItem::Home, options, &body, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(key: &str, name: &str, image: Option<&str>) -> DeviceSummary {
        DeviceSummary {
            key: key.to_string(),
            name: name.to_string(),
            description: Some(format!("{} board", name)),
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn test_gallery_cards() {
        let html = gallery_page(
            &[
                summary("esp32", "ESP32", Some("/images/esp32.jpg")),
                summary("uno", "Uno & Friends", None),
            ],
            &RenderOptions::default(),
        );
        assert!(html.contains(r#"href="../device/esp32/">Learn More"#));
        assert!(html.contains(r#"<img src="../images/esp32.jpg""#));
        assert!(html.contains(r#"<img src="../placeholder.svg" alt="Uno &amp; Friends">"#));
        assert_eq!(html.matches("device-card").count(), 2);
    }

    #[test]
    fn test_empty_gallery() {
        let html = gallery_page(&[], &RenderOptions::default());
        assert!(html.contains("No devices yet."));
    }

    #[test]
    fn test_home_links() {
        let html = home_page(&RenderOptions::default());
        assert!(html.contains(r#"href="./gallery/">Explore Devices"#));
        assert!(html.contains("<title>Dev Board Explorer</title>"));
    }
}
