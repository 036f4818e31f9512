//! Core types and traits for syntax highlighting.

use std::collections::HashMap;

use super::error::{SyntaxError, SyntaxResult};

/// Trait for syntax highlighting backends.
///
/// The Markdown pipeline only needs two things from a backend: to know whether
/// a grammar exists for a language tag, and to turn code into an HTML
/// fragment.
pub trait SyntaxHighlighter: Send + Sync {
  /// Get the name of this highlighter backend
  fn name(&self) -> &'static str;

  /// Check if a grammar exists for the language
  fn supports_language(&self, language: &str) -> bool;

  /// Highlight code with the specified language and theme.
  ///
  /// The returned fragment is a complete block (including its `<pre>`
  /// wrapper) without line numbers.
  ///
  /// # Errors
  ///
  /// Returns [`SyntaxError::UnknownLanguage`] if no grammar matches
  /// `language`.
  fn highlight(
    &self,
    code: &str,
    language: &str,
    theme: Option<&str>,
  ) -> SyntaxResult<String>;
}

/// Configuration for syntax highlighting
#[derive(Debug, Clone)]
pub struct SyntaxConfig {
  /// Default theme to use when none is specified
  pub default_theme: Option<String>,

  /// Language aliases for mapping common names to supported languages
  pub language_aliases: HashMap<String, String>,

  /// Render code in an unknown language without highlighting instead of
  /// failing.
  pub fallback_to_plain: bool,
}

impl Default for SyntaxConfig {
  fn default() -> Self {
    let language_aliases = [
      ("js", "javascript"),
      ("ts", "typescript"),
      ("py", "python"),
      ("rb", "ruby"),
      ("sh", "bash"),
      ("shell", "bash"),
      ("yml", "yaml"),
      ("md", "markdown"),
    ]
    .into_iter()
    .map(|(alias, language)| (alias.to_string(), language.to_string()))
    .collect();

    Self {
      default_theme: None,
      language_aliases,
      fallback_to_plain: false,
    }
  }
}

/// High-level syntax highlighting manager.
///
/// Owns a backend and applies alias resolution and the default theme before
/// delegating to it.
pub struct SyntaxManager {
  highlighter: Box<dyn SyntaxHighlighter>,
  config:      SyntaxConfig,
}

impl SyntaxManager {
  /// Create a new syntax manager with the given highlighter and config
  #[must_use]
  pub fn new(
    highlighter: Box<dyn SyntaxHighlighter>,
    config: SyntaxConfig,
  ) -> Self {
    Self {
      highlighter,
      config,
    }
  }

  /// Get the configuration
  #[must_use]
  pub const fn config(&self) -> &SyntaxConfig {
    &self.config
  }

  /// Resolve a language name using aliases
  #[must_use]
  pub fn resolve_language(&self, language: &str) -> String {
    self
      .config
      .language_aliases
      .get(language)
      .cloned()
      .unwrap_or_else(|| language.to_string())
  }

  /// Highlight code after alias resolution.
  ///
  /// # Errors
  ///
  /// Returns [`SyntaxError::UnknownLanguage`] with the resolved language name
  /// when the backend has no grammar for it, or any error of the backend.
  pub fn highlight_code(
    &self,
    code: &str,
    language: &str,
    theme: Option<&str>,
  ) -> SyntaxResult<String> {
    let resolved_language = self.resolve_language(language);
    let theme = theme.or(self.config.default_theme.as_deref());

    if !self.highlighter.supports_language(&resolved_language) {
      return Err(SyntaxError::UnknownLanguage(resolved_language));
    }

    self.highlighter.highlight(code, &resolved_language, theme)
  }
}

impl std::fmt::Debug for SyntaxManager {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SyntaxManager")
      .field("highlighter", &self.highlighter.name())
      .field("config", &self.config)
      .finish()
  }
}
