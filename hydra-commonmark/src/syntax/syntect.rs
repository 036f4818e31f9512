//! Syntect-based syntax highlighting backend enhanced with two-face.
//!
//! Grammars are Sublime Text syntax definitions from two-face's extended set.
//! Themes come from syntect's default theme set first, then from two-face's
//! embedded themes.

use std::sync::OnceLock;

use log::warn;
use syntect::{
  highlighting::{Theme, ThemeSet},
  html::highlighted_html_for_string,
  parsing::SyntaxSet,
};
use two_face::theme::{EmbeddedLazyThemeSet, EmbeddedThemeName};

use super::{
  error::{SyntaxError, SyntaxResult},
  types::{SyntaxConfig, SyntaxHighlighter, SyntaxManager},
};

/// Theme used when none is configured, or the configured one does not exist.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

fn embedded_theme(name: &str) -> Option<EmbeddedThemeName> {
  let theme = match name {
    "Ansi" => EmbeddedThemeName::Ansi,
    "Base16" => EmbeddedThemeName::Base16,
    "ColdarkCold" => EmbeddedThemeName::ColdarkCold,
    "ColdarkDark" => EmbeddedThemeName::ColdarkDark,
    "Dracula" => EmbeddedThemeName::Dracula,
    "Github" => EmbeddedThemeName::Github,
    "GruvboxDark" => EmbeddedThemeName::GruvboxDark,
    "GruvboxLight" => EmbeddedThemeName::GruvboxLight,
    "MonokaiExtended" => EmbeddedThemeName::MonokaiExtended,
    "Nord" => EmbeddedThemeName::Nord,
    "OneHalfDark" => EmbeddedThemeName::OneHalfDark,
    "OneHalfLight" => EmbeddedThemeName::OneHalfLight,
    "TwoDark" => EmbeddedThemeName::TwoDark,
    "Zenburn" => EmbeddedThemeName::Zenburn,
    _ => return None,
  };
  Some(theme)
}

/// Syntect-based syntax highlighter
pub struct SyntectHighlighter {
  theme_name: String,
}

impl SyntectHighlighter {
  /// Create a new Syntect highlighter with the specified theme.
  #[must_use]
  pub fn new(theme_name: Option<String>) -> Self {
    Self {
      theme_name: theme_name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_THEME.to_string()),
    }
  }

  /// Get the syntect `SyntaxSet`.
  fn syntax_set() -> &'static SyntaxSet {
    static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAX_SET.get_or_init(two_face::syntax::extra_newlines)
  }

  /// Get the two-face theme set.
  fn theme_set() -> &'static EmbeddedLazyThemeSet {
    static THEME_SET: OnceLock<EmbeddedLazyThemeSet> = OnceLock::new();
    THEME_SET.get_or_init(two_face::theme::extra)
  }

  /// Get the default syntect `ThemeSet`.
  fn default_theme_set() -> &'static ThemeSet {
    static DEFAULT_THEME_SET: OnceLock<ThemeSet> = OnceLock::new();
    DEFAULT_THEME_SET.get_or_init(ThemeSet::load_defaults)
  }

  /// Look up a theme by name in both theme sets.
  fn find_theme(name: &str) -> Option<&'static Theme> {
    if let Some(theme) = Self::default_theme_set().themes.get(name) {
      return Some(theme);
    }

    embedded_theme(name).map(|embedded| Self::theme_set().get(embedded))
  }

  /// Get the theme by name, falling back to the default theme.
  fn get_theme(&self, theme_name: Option<&str>) -> &'static Theme {
    let name = theme_name.unwrap_or(self.theme_name.as_str());

    Self::find_theme(name).unwrap_or_else(|| {
      warn!("Unknown highlighting theme '{name}', using '{DEFAULT_THEME}'");
      Self::find_theme(DEFAULT_THEME)
        .unwrap_or_else(|| Self::theme_set().get(EmbeddedThemeName::Base16))
    })
  }
}

impl Default for SyntectHighlighter {
  fn default() -> Self {
    Self::new(None)
  }
}

impl SyntaxHighlighter for SyntectHighlighter {
  fn name(&self) -> &'static str {
    "Syntect"
  }

  fn supports_language(&self, language: &str) -> bool {
    Self::syntax_set().find_syntax_by_token(language).is_some()
  }

  fn highlight(
    &self,
    code: &str,
    language: &str,
    theme: Option<&str>,
  ) -> SyntaxResult<String> {
    let syntax_set = Self::syntax_set();
    let syntax = syntax_set
      .find_syntax_by_token(language)
      .ok_or_else(|| SyntaxError::UnknownLanguage(language.to_string()))?;

    let theme = self.get_theme(theme);

    // The newline variants of the grammars expect every line to be terminated
    let mut code = code.to_string();
    if !code.ends_with('\n') {
      code.push('\n');
    }

    highlighted_html_for_string(&code, syntax_set, syntax, theme)
      .map_err(|e| SyntaxError::HighlightingFailed(e.to_string()))
  }
}

/// Create a Syntect-based syntax manager.
#[must_use]
pub fn create_syntect_manager(
  theme: Option<String>,
  mut config: SyntaxConfig,
) -> SyntaxManager {
  let highlighter = SyntectHighlighter::new(theme);
  config.default_theme = Some(highlighter.theme_name.clone());
  SyntaxManager::new(Box::new(highlighter), config)
}
