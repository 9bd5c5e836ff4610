//! Error types for the direct editing core.

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while interpreting presentation values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A color string could not be parsed.
    #[error("Invalid color value '{value}'")]
    InvalidColor { value: String },

    /// A length string was neither a number nor a pixel value.
    #[error("Invalid length value '{value}': expected a number or '<n>px'")]
    InvalidLength { value: String },
}

impl CoreError {
    /// Create a length error.
    pub fn invalid_length(value: impl Into<String>) -> Self {
        Self::InvalidLength {
            value: value.into(),
        }
    }
}
