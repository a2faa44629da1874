//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::rc::Rc;

use boardscope::catalog::MemorySource;
use boardscope::model::{Device, Hotspot};
use boardscope::runtime::{MemoryClipboard, Session};
use boardscope::surface::HeadlessSurface;

pub type TestSession = Session<HeadlessSurface, MemorySource, MemoryClipboard>;

pub const ESP32_JSON: &str = r#"{
  "name": "ESP32 DevKit",
  "model": "/models/esp32.glb",
  "pinoutImage": "/images/esp32-pinout.png",
  "description": "Wi-Fi and Bluetooth microcontroller",
  "image": "/images/esp32.jpg",
  "components": [
    { "name": "ESP32-WROOM-32", "function": "Main module", "datasheet": "https://example.com/wroom.pdf" },
    { "name": "CP2102", "function": "USB to UART" }
  ],
  "hotspots": [
    { "slotName": "hotspot-usb", "label": "USB Port", "x": 0, "y": -1.5, "z": 0.2,
      "description": "Micro USB for power and programming" },
    { "slotName": "hotspot-module", "label": "WROOM Module", "x": 0, "y": 1.2, "z": 0.3,
      "description": "Dual-core module", "datasheet": "https://example.com/wroom.pdf" }
  ],
  "exampleCode": "// Blink\nvoid setup() {\n  pinMode(2, OUTPUT);\n}\n"
}"#;

pub const UNO_JSON: &str = r#"{
  "name": "Arduino Uno",
  "pinoutImage": "/images/uno-pinout.png",
  "components": [],
  "hotspots": null,
  "exampleCode": "int led = 13;"
}"#;

pub fn esp32() -> Device {
    Device::from_json(ESP32_JSON).expect("ESP32 document parses")
}

pub fn uno() -> Device {
    Device::from_json(UNO_JSON).expect("Uno document parses")
}

/// A hotspot with the given slot name at the origin
pub fn hotspot(slot: &str, label: &str) -> Hotspot {
    Hotspot {
        slot_name: slot.to_string(),
        label: label.to_string(),
        x: 0.0,
        y: 0.0,
        z: 0.0,
        description: format!("{} description", label),
        datasheet: None,
    }
}

pub fn hotspots(slots: &[&str]) -> Rc<[Hotspot]> {
    slots.iter().map(|slot| hotspot(slot, slot)).collect()
}

/// Session over an in-memory catalog holding `esp32` and `uno`
pub fn test_session() -> TestSession {
    let source = MemorySource::new()
        .with("esp32", esp32())
        .with("uno", uno());
    Session::new(HeadlessSurface::new(), source, MemoryClipboard::default())
}

/// Write a public directory with both documents and their assets
pub fn write_public_dir(root: &Path) {
    fs::create_dir_all(root.join("data")).unwrap();
    fs::create_dir_all(root.join("images")).unwrap();
    fs::create_dir_all(root.join("models")).unwrap();
    fs::write(root.join("data/esp32.json"), ESP32_JSON).unwrap();
    fs::write(root.join("data/uno.json"), UNO_JSON).unwrap();
    fs::write(root.join("images/esp32-pinout.png"), b"png").unwrap();
    fs::write(root.join("images/esp32.jpg"), b"jpg").unwrap();
    fs::write(root.join("models/esp32.glb"), b"glb").unwrap();
}
