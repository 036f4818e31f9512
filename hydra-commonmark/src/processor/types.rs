//! Type definitions for the Markdown processor.
//!
//! Contains the configuration options (`MarkdownOptions`), the processor
//! itself (`MarkdownProcessor`) and its error type (`ProcessError`).
//!
//! # Examples
//!
//! ```
//! use hydra_commonmark::{MarkdownOptions, MarkdownProcessor, UnterminatedFence};
//!
//! let options = MarkdownOptions {
//!   highlight_code: true,
//!   unterminated_fence: UnterminatedFence::Error,
//!   ..Default::default()
//! };
//!
//! let processor = MarkdownProcessor::new(options);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::syntax::{SyntaxError, SyntaxManager};

/// Result type for Markdown processing.
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Errors that can occur while processing Markdown.
#[derive(Debug, Error)]
pub enum ProcessError {
  #[error(transparent)]
  Syntax(#[from] SyntaxError),

  #[error("Code block opened on line {line} is never closed")]
  UnterminatedFence { line: usize },
}

/// What to do with a fenced block that is still open at end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnterminatedFence {
  /// Render the captured lines as an unhighlighted block and log a warning.
  #[default]
  Flush,
  /// Fail with [`ProcessError::UnterminatedFence`].
  Error,
}

/// Options for configuring the Markdown processor.
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
  /// Enable syntax highlighting for code blocks.
  pub highlight_code: bool,

  /// Optional: Custom syntax highlighting theme name.
  pub highlight_theme: Option<String>,

  /// Render code in a language without a grammar as an unhighlighted block
  /// instead of failing.
  pub fallback_to_plain: bool,

  /// How to handle a fenced block that is never closed.
  pub unterminated_fence: UnterminatedFence,
}

impl Default for MarkdownOptions {
  fn default() -> Self {
    Self {
      highlight_code:     true,
      highlight_theme:    None,
      fallback_to_plain:  false,
      unterminated_fence: UnterminatedFence::Flush,
    }
  }
}

/// Main Markdown processor.
///
/// Can be cheaply cloned since it uses `Arc` internally for the syntax manager.
#[derive(Debug, Clone)]
pub struct MarkdownProcessor {
  pub(crate) options:        MarkdownOptions,
  pub(crate) syntax_manager: Option<Arc<SyntaxManager>>,
}
