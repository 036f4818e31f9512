use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for hydra
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "Hydra: Markdown pages for a small documentation site"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to configuration file (TOML or JSON)
  #[arg(short = 'c', long = "config-file", global = true)]
  pub config_file: Option<PathBuf>,

  /// Path to directory containing template files. Templates override
  /// built-in ones (page.html, page/navigation.html, etc.)
  #[arg(long = "template-dir", global = true)]
  pub template_dir: Option<PathBuf>,
}

/// All supported subcommands for the hydra CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Render a Markdown template to a complete HTML page.
  Render {
    /// Name of the template to render, e.g. `frameworks.md`.
    template: String,

    /// Template variable (KEY=VALUE format, can be used multiple times)
    #[arg(long = "var", value_parser = parse_var, action = clap::ArgAction::Append)]
    vars: Vec<(String, String)>,

    /// Write the output to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only render the content fragment, without navigation and page layout.
    #[arg(long)]
    content_only: bool,
  },

  /// Export default templates to a directory for customization.
  ExportTemplates {
    /// Output directory for template files.
    #[arg(short, long, default_value = "templates")]
    output_dir: PathBuf,

    /// Whether to overwrite existing files.
    #[arg(long)]
    force: bool,
  },

  /// Serve the pages over HTTP.
  #[cfg(feature = "serve")]
  Serve {
    /// Address to listen on, overrides `bind` from the configuration.
    #[arg(short, long)]
    bind: Option<String>,
  },
}

impl Cli {
  /// Parse command line arguments.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

/// Parse a `KEY=VALUE` pair.
fn parse_var(s: &str) -> Result<(String, String), String> {
  let (key, value) = s
    .split_once('=')
    .ok_or_else(|| format!("invalid KEY=VALUE pair: no `=` found in `{s}`"))?;

  if key.is_empty() {
    return Err(format!("invalid KEY=VALUE pair: empty key in `{s}`"));
  }

  Ok((key.to_string(), value.to_string()))
}
