//! Error types for direct editing.

use direct_edit_core::CoreError;

use crate::platform::ClipboardError;

/// Result type alias for direct editing operations.
pub type Result<T> = std::result::Result<T, DirectEditError>;

/// Errors surfaced by direct editing.
///
/// Ordinary negative outcomes are not errors: an activation no provider
/// accepts returns `false`, and cancelling or completing while inactive does
/// nothing.
#[derive(Debug, thiserror::Error)]
pub enum DirectEditError {
    /// The system clipboard could not be read.
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    /// An activation context could not be deserialized.
    #[error("Invalid activation context: {0}")]
    InvalidContext(#[from] serde_json::Error),

    /// A presentation value could not be interpreted.
    #[error(transparent)]
    Core(#[from] CoreError),
}
