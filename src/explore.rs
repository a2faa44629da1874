//! Line-oriented explorer over a headless [`Session`]
//!
//! Each input line is one command; the reply is plain text. The viewer
//! surface only reports load completion when asked (`load`), so the effect of
//! clicking before the model is ready can be observed.

use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::Result;

use crate::catalog::DocumentSource;
use crate::messages::{CodeMsg, Msg, PinoutMsg};
use crate::model::{LoadState, PageModel};
use crate::runtime::{Clipboard, Session};
use crate::surface::HeadlessSurface;

pub const HELP: &str = "\
Commands:
  load            finish loading the 3D model
  click SLOT      click the hotspot marker SLOT
  close           close the part information card
  zoom in|out|reset
  copy            copy the example code
  show            print the page state
  hotspots        list the hotspots
  goto KEY        open another device
  help            print this help
  quit            exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExploreCommand {
    Load,
    Click(String),
    Close,
    Zoom(PinoutMsg),
    Copy,
    Show,
    Hotspots,
    Goto(String),
    Help,
    Quit,
}

impl ExploreCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(None);
        };
        let argument = words.next();
        if words.next().is_some() {
            return Err(format!("Too many arguments for '{}'", command));
        }

        let parsed = match (command, argument) {
            ("load", None) => Self::Load,
            ("click", Some(slot)) => Self::Click(slot.to_string()),
            ("close", None) => Self::Close,
            ("zoom", Some("in")) => Self::Zoom(PinoutMsg::ZoomIn),
            ("zoom", Some("out")) => Self::Zoom(PinoutMsg::ZoomOut),
            ("zoom", Some("reset")) => Self::Zoom(PinoutMsg::ResetZoom),
            ("copy", None) => Self::Copy,
            ("show", None) => Self::Show,
            ("hotspots", None) => Self::Hotspots,
            ("goto", Some(key)) => Self::Goto(key.to_string()),
            ("help", None) => Self::Help,
            ("quit" | "exit", None) => Self::Quit,
            ("click" | "goto" | "zoom", _) => {
                return Err(format!("Usage error for '{}', see 'help'", command))
            }
            _ => return Err(format!("Unknown command '{}', see 'help'", line.trim())),
        };
        Ok(Some(parsed))
    }
}

/// Drives a session from explorer commands
pub struct Explorer<D, C> {
    session: Session<HeadlessSurface, D, C>,
}

impl<D: DocumentSource, C: Clipboard> Explorer<D, C> {
    /// Start a session showing `key`
    pub fn new(source: D, clipboard: C, key: &str) -> Self {
        let mut session = Session::new(HeadlessSurface::new(), source, clipboard);
        session.dispatch(Msg::navigate(key));
        Self { session }
    }

    pub fn session(&self) -> &Session<HeadlessSurface, D, C> {
        &self.session
    }

    /// Move the session clock to `now_ms`, firing due timers
    pub fn advance_to(&mut self, now_ms: u64) {
        self.session.advance_to(now_ms);
    }

    /// Run one command and return the reply
    pub fn execute(&mut self, command: &ExploreCommand) -> String {
        match command {
            ExploreCommand::Load => {
                let msg = self.session.surface().finish_loading();
                if self.session.dispatch_opt(msg) {
                    let router = &self.session.model().viewer;
                    match router.binding {
                        Some(binding) => format!(
                            "Model loaded, listening on {} hotspots ({})",
                            router.hotspots.len(),
                            binding
                        ),
                        None => "Model loaded, no hotspots to listen on".to_string(),
                    }
                } else {
                    "No model to load".to_string()
                }
            }
            ExploreCommand::Click(slot) => {
                let msg = self.session.surface().click(slot);
                if !self.session.dispatch_opt(msg) {
                    return format!("Click on '{}' went nowhere", slot);
                }
                match self.session.model().selected_hotspot() {
                    Some(hotspot) if hotspot.slot_name == *slot => {
                        format!("Selected {}", hotspot.label)
                    }
                    _ => format!("Click on '{}' ignored", slot),
                }
            }
            ExploreCommand::Close => {
                self.session.dispatch(Msg::clear_selection());
                "Selection cleared".to_string()
            }
            ExploreCommand::Zoom(msg) => {
                self.session.dispatch(Msg::Pinout(*msg));
                format!("Pinout zoom {}", self.session.model().pinout.label())
            }
            ExploreCommand::Copy => {
                let before = self.session.model().code.copy_seq;
                self.session.dispatch(Msg::Code(CodeMsg::Copy));
                if self.session.model().code.copy_seq == before {
                    "Nothing to copy".to_string()
                } else {
                    self.session.model().code.button_label().to_string()
                }
            }
            ExploreCommand::Show => describe(self.session.model()),
            ExploreCommand::Hotspots => {
                let hotspots = &self.session.model().viewer.hotspots;
                if hotspots.is_empty() {
                    return "No hotspots".to_string();
                }
                let mut out = String::new();
                for hotspot in hotspots.iter() {
                    let _ = writeln!(
                        out,
                        "{:<16} {:<24} {}",
                        hotspot.slot_name,
                        hotspot.label,
                        hotspot.position()
                    );
                }
                out.trim_end().to_string()
            }
            ExploreCommand::Goto(key) => {
                self.session.dispatch(Msg::navigate(key.as_str()));
                describe(self.session.model())
            }
            ExploreCommand::Help => HELP.to_string(),
            ExploreCommand::Quit => String::new(),
        }
    }

    /// Read commands from `input` until `quit` or end of input
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        let started = Instant::now();
        writeln!(output, "{}", describe(self.session.model()))?;

        for line in input.lines() {
            let line = line?;
            self.advance_to(started.elapsed().as_millis() as u64);

            match ExploreCommand::parse(&line) {
                Ok(None) => continue,
                Ok(Some(ExploreCommand::Quit)) => break,
                Ok(Some(command)) => {
                    tracing::debug!("explore: {:?}", command);
                    writeln!(output, "{}", self.execute(&command))?;
                }
                Err(e) => writeln!(output, "{}", e)?,
            }
            output.flush()?;
        }
        Ok(())
    }
}

/// Summary of the page state
pub fn describe(model: &PageModel) -> String {
    let mut out = String::new();
    match &model.load {
        LoadState::Idle => out.push_str("No device"),
        LoadState::Loading { key } => {
            let _ = write!(out, "Loading '{}'", key);
        }
        LoadState::NotFound { key, reason } => {
            let _ = write!(out, "Device Not Found: '{}' ({})", key, reason);
        }
        LoadState::Ready { key, device } => {
            let _ = writeln!(out, "Device: {} ({})", device.name, key);
            let router = &model.viewer;
            match &router.model_src {
                Some(src) => {
                    let state = if router.model_loaded { "loaded" } else { "loading" };
                    let _ = writeln!(out, "Model: {} [{}]", src, state);
                }
                None => out.push_str("Model: none\n"),
            }
            let listening = match router.binding {
                Some(binding) => format!("listening on {}", binding),
                None => "not listening".to_string(),
            };
            let _ = writeln!(out, "Hotspots: {} ({})", router.hotspots.len(), listening);
            match model.selected_hotspot() {
                Some(hotspot) => {
                    let _ = writeln!(out, "Selected: {} - {}", hotspot.label, hotspot.description);
                }
                None => out.push_str("Selected: none\n"),
            }
            let _ = writeln!(out, "Pinout zoom: {}", model.pinout.label());
            let _ = write!(out, "Copy button: {}", model.code.button_label());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemorySource;
    use crate::model::Device;
    use crate::runtime::MemoryClipboard;

    fn source() -> MemorySource {
        let device = Device::from_json(
            r#"{ "name": "ESP32", "model": "/models/esp32.glb", "exampleCode": "void loop() {}",
                 "hotspots": [
                   { "slotName": "hotspot-1", "label": "USB Port", "x": 0, "y": 0, "z": 0 },
                   { "slotName": "hotspot-2", "label": "Antenna", "x": 1, "y": 2, "z": 3 }
                 ] }"#,
        )
        .unwrap();
        MemorySource::new().with("esp32", device)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ExploreCommand::parse("  "), Ok(None));
        assert_eq!(
            ExploreCommand::parse("click hotspot-1"),
            Ok(Some(ExploreCommand::Click("hotspot-1".to_string())))
        );
        assert_eq!(
            ExploreCommand::parse("zoom out"),
            Ok(Some(ExploreCommand::Zoom(PinoutMsg::ZoomOut)))
        );
        assert!(ExploreCommand::parse("zoom sideways").is_err());
        assert!(ExploreCommand::parse("click").is_err());
        assert!(ExploreCommand::parse("dance").is_err());
    }

    #[test]
    fn test_click_before_load_goes_nowhere() {
        let mut explorer = Explorer::new(source(), MemoryClipboard::default(), "esp32");
        let reply = explorer.execute(&ExploreCommand::Click("hotspot-1".to_string()));
        assert_eq!(reply, "Click on 'hotspot-1' went nowhere");

        explorer.execute(&ExploreCommand::Load);
        let reply = explorer.execute(&ExploreCommand::Click("hotspot-2".to_string()));
        assert_eq!(reply, "Selected Antenna");
    }

    #[test]
    fn test_copy_then_expire() {
        let mut explorer = Explorer::new(source(), MemoryClipboard::default(), "esp32");
        assert_eq!(explorer.execute(&ExploreCommand::Copy), "Copied!");
        assert_eq!(
            explorer.session().clipboard().contents.as_deref(),
            Some("void loop() {}")
        );
        explorer.advance_to(2000);
        assert_eq!(explorer.session().model().code.button_label(), "Copy");
    }

    #[test]
    fn test_run_reads_until_quit() {
        let mut explorer = Explorer::new(source(), MemoryClipboard::default(), "esp32");
        let input = b"load\nclick hotspot-1\nquit\nclose\n";
        let mut output = Vec::new();
        explorer.run(&input[..], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Device: ESP32 (esp32)"));
        assert!(text.contains("Selected USB Port"));
        assert!(!text.contains("Selection cleared"));
    }

    #[test]
    fn test_goto_missing_device() {
        let mut explorer = Explorer::new(source(), MemoryClipboard::default(), "esp32");
        let reply = explorer.execute(&ExploreCommand::Goto("uno".to_string()));
        assert!(reply.starts_with("Device Not Found: 'uno'"));
    }
}
