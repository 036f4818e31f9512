//! Site configuration.
//!
//! Every field has a default, so an empty file (or no file at all) is a valid
//! configuration. Values given on the command line take precedence over the
//! configuration file.
use std::{
  fs,
  path::{Path, PathBuf},
};

use hydra_commonmark::{
  MarkdownOptions,
  UnterminatedFence,
  syntax::DEFAULT_THEME,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};

#[cfg(feature = "serve")]
use crate::cli::Commands;
use crate::{
  cli::Cli,
  error::{HydraError, Result},
};

fn default_title() -> String {
  "Hydra".to_string()
}

fn default_bind() -> String {
  "127.0.0.1:8080".to_string()
}

fn default_theme() -> String {
  DEFAULT_THEME.to_string()
}

const fn default_true() -> bool {
  true
}

/// Configuration options for hydra
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
  /// Site title, used by `page.html` when the document has no `h1`
  #[serde(default = "default_title")]
  pub title: String,

  /// Directory whose templates override the embedded ones
  #[serde(default)]
  pub template_dir: Option<PathBuf>,

  /// Address the HTTP server listens on
  #[serde(default = "default_bind")]
  pub bind: String,

  /// Syntax highlighting of fenced code blocks
  #[serde(default)]
  pub highlight: HighlightConfig,

  /// Markdown processing
  #[serde(default)]
  pub markdown: MarkdownConfig,
}

/// Syntax highlighting options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HighlightConfig {
  /// Highlight fenced code blocks that carry a language
  #[serde(default = "default_true")]
  pub enable: bool,

  /// Highlighting theme
  #[serde(default = "default_theme")]
  pub theme: String,

  /// Render code in a language without a grammar as plain code instead of
  /// failing the page
  #[serde(default)]
  pub fallback_to_plain: bool,
}

/// Markdown processing options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkdownConfig {
  /// What to do with a code block that is never closed
  #[serde(default)]
  pub unterminated_fence: UnterminatedFence,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      title:        default_title(),
      template_dir: None,
      bind:         default_bind(),
      highlight:    HighlightConfig::default(),
      markdown:     MarkdownConfig::default(),
    }
  }
}

impl Default for HighlightConfig {
  fn default() -> Self {
    Self {
      enable:            true,
      theme:             default_theme(),
      fallback_to_plain: false,
    }
  }
}

impl Config {
  /// Create a new configuration from a file.
  /// Only TOML and JSON are supported.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or has an
  /// unsupported extension.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let extension = path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(str::to_lowercase)
      .ok_or_else(|| {
        HydraError::Config(format!(
          "Config file has no extension: {}",
          path.display()
        ))
      })?;

    match extension.as_str() {
      "json" => Ok(serde_json::from_str(&content)?),
      "toml" => Ok(toml::from_str(&content)?),
      _ => {
        Err(HydraError::Config(format!(
          "Unsupported config file format: {}",
          path.display()
        )))
      },
    }
  }

  /// Load config from file and CLI arguments.
  ///
  /// # Errors
  ///
  /// Returns an error if the configuration file cannot be loaded or the
  /// resulting configuration is invalid.
  pub fn load(cli: &Cli) -> Result<Self> {
    let mut config = match &cli.config_file {
      Some(path) => {
        info!("Using config file: {}", path.display());
        Self::from_file(path)?
      },
      None => Self::default(),
    };

    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
  }

  /// Merge CLI arguments into this config, prioritizing CLI values when
  /// present.
  pub fn merge_with_cli(&mut self, cli: &Cli) {
    if let Some(template_dir) = &cli.template_dir {
      self.template_dir = Some(template_dir.clone());
    }

    #[cfg(feature = "serve")]
    if let Commands::Serve {
      bind: Some(bind), ..
    } = &cli.command
    {
      self.bind.clone_from(bind);
    }
  }

  /// Check the configuration for values that cannot work.
  ///
  /// # Errors
  ///
  /// Returns [`HydraError::Config`] if the template directory does not exist.
  pub fn validate(&self) -> Result<()> {
    if let Some(dir) = &self.template_dir
      && !dir.is_dir()
    {
      return Err(HydraError::Config(format!(
        "Template directory does not exist: {}",
        dir.display()
      )));
    }
    Ok(())
  }

  /// Options for the Markdown processor.
  #[must_use]
  pub fn markdown_options(&self) -> MarkdownOptions {
    MarkdownOptions {
      highlight_code:     self.highlight.enable,
      highlight_theme:    Some(self.highlight.theme.clone()),
      fallback_to_plain:  self.highlight.fallback_to_plain,
      unterminated_fence: self.markdown.unterminated_fence,
    }
  }

  /// Export embedded templates to a directory for customization.
  ///
  /// Existing files are kept unless `force` is set. Returns the paths that
  /// were written.
  ///
  /// # Errors
  ///
  /// Returns an error if a directory or file cannot be written.
  pub fn export_templates(
    output_dir: &Path,
    force: bool,
  ) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let mut templates: Vec<_> =
      hydra_templates::all_templates().into_iter().collect();
    templates.sort_unstable();

    let mut written = Vec::new();
    for (filename, content) in templates {
      let file_path = output_dir.join(filename);

      if file_path.exists() && !force {
        warn!(
          "Skipping existing file: {} (use --force to overwrite)",
          file_path.display()
        );
        continue;
      }

      if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
      }
      fs::write(&file_path, content)?;

      info!("Exported template: {}", file_path.display());
      written.push(file_path);
    }

    info!("Templates exported to: {}", output_dir.display());
    info!(
      "Use --template-dir {} to customize your pages",
      output_dir.display()
    );
    Ok(written)
  }
}
