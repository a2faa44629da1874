//! Device detail page and its loading / not-found states

use super::{
    code_block, components_table, layout, model_viewer, pinout_viewer, root_for_depth, NavItem,
    RenderOptions,
};
use crate::model::{CodeBlockState, Device, Hotspot, LoadState, PageModel, PinoutState};
use crate::util::escape_html;

/// Device pages live at `device/{key}/index.html`
const DEVICE_PAGE_DEPTH: usize = 2;

/// Render whatever the page model currently shows
pub fn render_page(model: &PageModel, options: &RenderOptions) -> String {
    match &model.load {
        LoadState::Idle | LoadState::Loading { .. } => loading_page(options),
        LoadState::NotFound { .. } => {
            not_found_page(options, &root_for_depth(DEVICE_PAGE_DEPTH))
        }
        LoadState::Ready { device, .. } => render_device(
            device,
            options,
            model.selected_hotspot(),
            &model.pinout,
            &model.code,
        ),
    }
}

/// Render a device page in its initial state
pub fn device_page(device: &Device, options: &RenderOptions) -> String {
    render_device(
        device,
        options,
        None,
        &PinoutState::default(),
        &CodeBlockState::default(),
    )
}

fn render_device(
    device: &Device,
    options: &RenderOptions,
    selected: Option<&Hotspot>,
    pinout: &PinoutState,
    code: &CodeBlockState,
) -> String {
    let root = root_for_depth(DEVICE_PAGE_DEPTH);
    let name = escape_html(&device.name);

    let body = format!(
        r#"    <a class="button ghost" href="{root}gallery/">&larr; Back to Gallery</a>
    <h1>{name}</h1>
    <div class="device-layout">
        <div class="column">
    {viewer}
        </div>
        <div class="column">
            <section class="card">
                <h2>Components &amp; Parts</h2>
                {components}
            </section>
            <section class="card">
                <h2>Pinout Diagram</h2>
                {pinout}
            </section>
            <section class="card">
                <h2>Example Code</h2>
                <p class="muted">Get started with this example code for the {name}:</p>
                {code}
            </section>
        </div>
    </div>"#,
        viewer = model_viewer(device, &root, options, selected),
        components = components_table(&device.components),
        pinout = pinout_viewer(device, &root, options, pinout),
        code = code_block(&device.example_code, &device.code_language, code),
    );

    layout(
        &device.name,
        &root,
        NavItem::Gallery,
        options,
        &body,
        device.model_src().is_some(),
    )
}

pub fn loading_page(options: &RenderOptions) -> String {
    let body = r#"    <div class="hero">
        <p class="muted">Loading device data...</p>
    </div>"#;
    layout(
        "Loading",
        &root_for_depth(DEVICE_PAGE_DEPTH),
        NavItem::Gallery,
        options,
        body,
        false,
    )
}

/// "Device Not Found" page with links resolved against `root`
pub fn not_found_page(options: &RenderOptions, root: &str) -> String {
    let body = format!(
        r#"    <div class="hero">
        <h2>Device Not Found</h2>
        <a class="button" href="{root}gallery/">&larr; Back to Gallery</a>
    </div>"#
    );
    layout("Device Not Found", root, NavItem::None, options, &body, false)
}
