//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::messages::Msg;
use crate::model::BindingId;
use crate::surface::Marker;

/// Commands returned by update functions
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Fetch a device document; answered with `PageMsg::DocumentLoaded`
    FetchDocument { key: String },
    /// Start loading a 3D model on the viewer surface
    LoadModel { src: String },
    /// Replace the markers declared on the viewer surface
    DeclareMarkers { markers: Vec<Marker> },
    /// Attach click listeners under a new binding
    AttachListeners { binding: BindingId },
    /// Release the listeners of a binding
    DetachListeners { binding: BindingId },
    /// Put text on the system clipboard
    CopyToClipboard { text: String },
    /// Deliver `msg` after `delay_ms`
    ScheduleTimer { delay_ms: u64, msg: Box<Msg> },
    /// Execute multiple commands, in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Combine optional commands, collapsing empty and single batches
    pub fn from_parts(cmds: impl IntoIterator<Item = Option<Cmd>>) -> Option<Cmd> {
        let mut cmds: Vec<Cmd> = cmds
            .into_iter()
            .flatten()
            .filter(|cmd| !matches!(cmd, Cmd::None))
            .collect();
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }

    /// Flatten nested batches into execution order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            cmd => vec![cmd],
        }
    }
}
