//! System clipboard access for paste.
//!
//! A thin wrapper around the `arboard` crate. Only the plain-text
//! representation is ever read: the editable surface degrades every paste to
//! plain text, so the clipboard's HTML flavor is never requested.
//!
//! # Example
//!
//! ```ignore
//! use direct_edit::platform::Clipboard;
//! use direct_edit::PasteEvent;
//!
//! let mut clipboard = Clipboard::new()?;
//! let mut event = PasteEvent::new(clipboard.read_paste()?);
//! editing.handle_paste(&mut event);
//! ```
//!
//! # Platform Notes
//!
//! - **Windows**: Uses the Win32 clipboard API
//! - **macOS**: Uses NSPasteboard
//! - **Linux**: Uses X11 selections or Wayland data-control protocol

use direct_edit_core::logging::targets;

use crate::error::Result;
use crate::events::ClipboardData;

/// Error type for clipboard operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The system clipboard could not be opened or read.
    #[error("clipboard error: {0}")]
    Access(#[from] arboard::Error),
}

/// System clipboard handle.
///
/// Create it when a paste is about to be served and drop it afterwards.
pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    /// Open the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is unavailable or locked by another
    /// process.
    pub fn new() -> std::result::Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new().inspect_err(|err| {
            tracing::warn!(target: targets::CLIPBOARD, error = %err, "failed to open clipboard");
        })?;
        Ok(Self { inner })
    }

    /// Get the current text content of the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard holds no text or cannot be accessed.
    pub fn get_text(&mut self) -> std::result::Result<String, ClipboardError> {
        self.inner.get_text().map_err(Into::into)
    }

    /// Read the clipboard for a paste.
    ///
    /// Only the plain-text slot of the returned [`ClipboardData`] is filled.
    /// A clipboard without text yields empty data rather than an error.
    pub fn read_paste(&mut self) -> Result<ClipboardData> {
        match self.inner.get_text() {
            Ok(text) => Ok(ClipboardData::plain(text)),
            Err(arboard::Error::ContentNotAvailable) => {
                tracing::trace!(target: targets::CLIPBOARD, "clipboard holds no text");
                Ok(ClipboardData::default())
            }
            Err(err) => {
                tracing::warn!(target: targets::CLIPBOARD, error = %err, "failed to read clipboard");
                Err(ClipboardError::from(err).into())
            }
        }
    }
}

impl std::fmt::Debug for Clipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clipboard").finish_non_exhaustive()
    }
}
