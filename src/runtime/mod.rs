//! Runtime module - executes commands for the page model
//!
//! - `session` - single-threaded message loop with a deadline timer queue
//! - `clipboard` - system and in-memory clipboards

pub mod clipboard;
pub mod session;

pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use session::Session;
