use std::{error::Error as _, io};

use hydra_commonmark::ProcessError;
use thiserror::Error;

/// Result type used throughout the hydra crate.
pub type Result<T> = std::result::Result<T, HydraError>;

/// Top-level error type for the hydra crate.
#[derive(Debug, Error)]
pub enum HydraError {
  #[error("Template not found: {0}")]
  TemplateNotFound(String),

  #[error("Template error: {0}")]
  Template(String),

  #[error("Markdown error: {0}")]
  Markdown(#[from] ProcessError),

  #[error("Configuration error: {0}")]
  Config(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Serde error: {0}")]
  Serde(#[from] serde_json::Error),

  #[error("TOML error: {0}")]
  Toml(#[from] toml::de::Error),

  #[cfg(feature = "serve")]
  #[error("Render task failed: {0}")]
  Task(#[from] tokio::task::JoinError),
}

impl From<tera::Error> for HydraError {
  fn from(e: tera::Error) -> Self {
    // Tera keeps the interesting part (missing variable, syntax error) in the
    // source chain.
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
      message.push_str(": ");
      message.push_str(&cause.to_string());
      source = cause.source();
    }
    Self::Template(message)
  }
}

impl HydraError {
  /// Whether the error means the requested page does not exist.
  #[must_use]
  pub const fn is_not_found(&self) -> bool {
    matches!(self, Self::TemplateNotFound(_))
  }
}
