//! Platform integration.
//!
//! Currently this is only system clipboard access, used by hosts that
//! cannot hand over the clipboard contents of a native paste event.

mod clipboard;

pub use clipboard::{Clipboard, ClipboardError};
