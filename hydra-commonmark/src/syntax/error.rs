//! Error types for syntax highlighting operations.

/// Result type for syntax highlighting operations.
pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Errors that can occur during syntax highlighting.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
  #[error("No grammar available for language '{0}'")]
  UnknownLanguage(String),
  #[error("Highlighting failed: {0}")]
  HighlightingFailed(String),
}
