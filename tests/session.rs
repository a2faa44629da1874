//! Page session tests: navigation, document delivery, timers

mod common;

use std::rc::Rc;

use boardscope::messages::{CodeMsg, Msg, PageMsg, PinoutMsg};
use boardscope::model::LoadState;
use boardscope::surface::SurfaceCall;
use common::{esp32, test_session};

#[test]
fn test_navigate_loads_and_mounts() {
    let mut session = test_session();
    session.dispatch(Msg::navigate("esp32"));

    let device = session.model().device().expect("device should be ready");
    assert_eq!(device.name, "ESP32 DevKit");
    assert_eq!(session.surface().model(), Some("/models/esp32.glb"));
    assert_eq!(session.surface().markers().len(), 2);
    assert!(Rc::ptr_eq(&device.hotspots, &session.model().viewer.hotspots));
}

#[test]
fn test_device_without_model_does_not_mount() {
    let mut session = test_session();
    session.dispatch(Msg::navigate("uno"));

    assert!(session.model().device().is_some());
    assert!(!session.model().viewer.is_mounted());
    assert!(session.model().viewer.hotspots.is_empty());
    assert!(session.surface().calls().is_empty());
}

#[test]
fn test_missing_document_is_not_found() {
    let mut session = test_session();
    session.dispatch(Msg::navigate("mega"));

    match &session.model().load {
        LoadState::NotFound { key, reason } => {
            assert_eq!(key, "mega");
            assert!(reason.contains("mega"));
        }
        other => panic!("expected not found, got {:?}", other),
    }
}

#[test]
fn test_stale_document_response_is_ignored() {
    let mut session = test_session();
    session.dispatch(Msg::navigate("uno"));

    // A late response for a page we already left
    session.dispatch(Msg::Page(PageMsg::DocumentLoaded {
        key: "esp32".to_string(),
        result: Ok(Rc::new(esp32())),
    }));

    assert_eq!(session.model().load.key(), Some("uno"));
    assert_eq!(
        session.model().device().map(|d| d.name.as_str()),
        Some("Arduino Uno")
    );
    assert!(!session.model().viewer.is_mounted());
}

#[test]
fn test_navigation_tears_down_previous_viewer() {
    let mut session = test_session();
    session.dispatch(Msg::navigate("esp32"));
    let msg = session.surface().finish_loading();
    session.dispatch_opt(msg);
    let msg = session.surface().click("hotspot-usb");
    session.dispatch_opt(msg);
    session.dispatch(Msg::Pinout(PinoutMsg::ZoomIn));
    session.surface_mut().clear_calls();

    session.dispatch(Msg::navigate("uno"));

    assert_eq!(session.model().selected_hotspot(), None);
    assert_eq!(session.model().pinout.label(), "100%");
    assert_eq!(session.surface().active_binding(), None);
    assert_eq!(
        session.surface().calls().first(),
        Some(&SurfaceCall::Detach(boardscope::model::BindingId(1)))
    );
}

#[test]
fn test_copy_feedback_expires_after_delay() {
    let mut session = test_session();
    session.dispatch(Msg::navigate("uno"));
    session.dispatch(Msg::Code(CodeMsg::Copy));

    assert_eq!(session.clipboard().contents.as_deref(), Some("int led = 13;"));
    assert!(session.model().code.copied);
    assert_eq!(session.pending_timers(), 1);

    session.advance_by(1999);
    assert!(session.model().code.copied);

    session.advance_by(1);
    assert!(!session.model().code.copied);
    assert_eq!(session.pending_timers(), 0);
}

#[test]
fn test_older_timer_does_not_clear_newer_copy() {
    let mut session = test_session();
    session.dispatch(Msg::navigate("uno"));
    session.dispatch(Msg::Code(CodeMsg::Copy));
    session.advance_by(1500);
    session.dispatch(Msg::Code(CodeMsg::Copy));

    // First timer fires at 2000 but belongs to the older copy
    session.advance_to(2000);
    assert!(session.model().code.copied);

    session.advance_to(3500);
    assert!(!session.model().code.copied);
}

#[test]
fn test_copy_without_device_does_nothing() {
    let mut session = test_session();
    session.dispatch(Msg::Code(CodeMsg::Copy));
    assert_eq!(session.clipboard().contents, None);
    assert_eq!(session.pending_timers(), 0);
}

#[test]
fn test_pinout_zoom_clamps() {
    let mut session = test_session();
    session.dispatch(Msg::navigate("esp32"));

    for _ in 0..20 {
        session.dispatch(Msg::Pinout(PinoutMsg::ZoomIn));
    }
    assert_eq!(session.model().pinout.label(), "300%");

    for _ in 0..20 {
        session.dispatch(Msg::Pinout(PinoutMsg::ZoomOut));
    }
    assert_eq!(session.model().pinout.label(), "50%");

    session.dispatch(Msg::Pinout(PinoutMsg::ResetZoom));
    assert_eq!(session.model().pinout.label(), "100%");
}
