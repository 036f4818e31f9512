//! Trait-based syntax highlighting for fenced code blocks.
//!
//! The Markdown pipeline talks to a [`SyntaxManager`], which resolves
//! language aliases and delegates to a [`SyntaxHighlighter`] backend. The only
//! backend shipped is **Syntect**, using Sublime Text syntax definitions with
//! two-face added for extended syntax definitions and themes.

pub mod error;
mod syntect;
pub mod types;

pub use error::{SyntaxError, SyntaxResult};
pub use types::{SyntaxConfig, SyntaxHighlighter, SyntaxManager};

pub use self::syntect::{DEFAULT_THEME, SyntectHighlighter, create_syntect_manager};

/// Create the default syntax manager.
#[must_use]
pub fn create_default_manager() -> SyntaxManager {
  create_syntect_manager(None, SyntaxConfig::default())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_syntax_config_default() {
    let config = SyntaxConfig::default();
    assert!(!config.fallback_to_plain);
    assert_eq!(config.language_aliases["js"], "javascript");
    assert_eq!(config.language_aliases["py"], "python");
  }

  #[test]
  fn test_syntect_highlighter() {
    let highlighter = SyntectHighlighter::default();
    assert_eq!(highlighter.name(), "Syntect");
    assert!(
      format!("{:?}", create_default_manager())
        .contains("highlighter: \"Syntect\"")
    );
  }

  #[test]
  fn test_grammar_resolution() {
    let highlighter = SyntectHighlighter::default();
    assert!(highlighter.supports_language("python"));
    assert!(highlighter.supports_language("Python"));
    assert!(highlighter.supports_language("rs"));
    assert!(!highlighter.supports_language("klingon"));
  }

  #[test]
  fn test_syntect_highlight_simple() {
    let highlighter = SyntectHighlighter::default();
    let html = highlighter
      .highlight("fn main() {}", "rust", None)
      .expect("Failed to highlight code");
    assert!(html.starts_with("<pre"));
    assert!(html.trim_end().ends_with("</pre>"));
    assert!(html.contains("main"));
  }

  #[test]
  fn test_unknown_language_is_an_error() {
    let manager = create_default_manager();
    let result = manager.highlight_code("x", "klingon", None);
    assert!(matches!(
      result,
      Err(SyntaxError::UnknownLanguage(ref lang)) if lang == "klingon"
    ));
  }

  #[test]
  fn test_alias_resolution() {
    let manager = create_default_manager();
    assert_eq!(manager.resolve_language("py"), "python");
    assert_eq!(manager.resolve_language("sh"), "bash");
    assert_eq!(manager.resolve_language("rust"), "rust");

    let html = manager
      .highlight_code("print('hi')", "py", None)
      .expect("python should be highlighted through its alias");
    assert!(html.contains("print"));
  }

  #[test]
  fn test_unknown_theme_falls_back() {
    let manager = create_syntect_manager(
      Some("does-not-exist".to_string()),
      SyntaxConfig::default(),
    );
    let html = manager
      .highlight_code("let x = 1;", "rust", None)
      .expect("unknown themes fall back to the default theme");
    assert!(html.contains("<pre style="));
  }

  #[test]
  fn test_default_theme_is_recorded() {
    let manager = create_default_manager();
    assert_eq!(manager.config().default_theme.as_deref(), Some(DEFAULT_THEME));
  }
}
