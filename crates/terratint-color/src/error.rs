//! Color error types.

/// Errors produced while converting colors to or from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The string is not a hexadecimal color.
    #[error("malformed color: {0:?}")]
    MalformedColor(String),
}
