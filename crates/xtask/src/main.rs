use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate_to, shells};
use clap_mangen::Man;
use hydra::{
  config::Config,
  render::{PAGES, PageRenderer},
};

#[derive(Parser)]
#[command(author, version, about)]
struct Xtask {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build distribution artifacts for the hydra CLI
  Dist {
    /// Output directory for generated files.
    #[arg(short, long, default_value = "dist", value_parser = clap::value_parser!(std::path::PathBuf))]
    output_dir: PathBuf,

    /// Only generate shell completions.
    #[arg(long, conflicts_with_all = ["manpage_only", "pages_only"])]
    completions_only: bool,

    /// Only generate manpage.
    #[arg(long, conflicts_with_all = ["completions_only", "pages_only"])]
    manpage_only: bool,

    /// Only render the built-in pages to static HTML.
    #[arg(long, conflicts_with_all = ["completions_only", "manpage_only"])]
    pages_only: bool,
  },
}

fn main() -> Result<()> {
  let xtask = Xtask::parse();

  match xtask.command {
    Commands::Dist {
      output_dir,
      completions_only,
      manpage_only,
      pages_only,
    } => {
      let all = !(completions_only || manpage_only || pages_only);
      if all || completions_only {
        generate_completions(&output_dir)?;
      }
      if all || manpage_only {
        generate_manpage(&output_dir)?;
      }
      if all || pages_only {
        render_pages(&output_dir)?;
      }
    },
  }

  Ok(())
}

/// Generate shell completions for various shells.
fn generate_completions(output_dir: &Path) -> Result<()> {
  let completions_dir = output_dir.join("completions");
  fs::create_dir_all(&completions_dir)?;
  let mut cmd = hydra::cli::Cli::command();
  generate_to(shells::Bash, &mut cmd, "hydra", &completions_dir)?;
  generate_to(shells::Zsh, &mut cmd, "hydra", &completions_dir)?;
  generate_to(shells::Fish, &mut cmd, "hydra", &completions_dir)?;
  generate_to(shells::PowerShell, &mut cmd, "hydra", &completions_dir)?;
  println!(
    "Shell completions generated in {}",
    completions_dir.display()
  );
  Ok(())
}

/// Generate manpage for the hydra CLI.
fn generate_manpage(output_dir: &Path) -> Result<()> {
  let man_dir = output_dir.join("man");
  fs::create_dir_all(&man_dir)?;
  let man = Man::new(hydra::cli::Cli::command());
  let file_path = man_dir.join("hydra.1");
  let mut file = fs::File::create(&file_path).with_context(|| {
    format!("Failed to create manpage file at {}", file_path.display())
  })?;
  man
    .render(&mut file)
    .with_context(|| "Failed to render manpage")?;
  println!("Manpage generated in {}", man_dir.display());
  Ok(())
}

/// Render the built-in pages with the default configuration, as a preview of
/// what `hydra serve` returns.
fn render_pages(output_dir: &Path) -> Result<()> {
  let pages_dir = output_dir.join("pages");
  fs::create_dir_all(&pages_dir)?;
  let renderer = PageRenderer::new(Config::default())
    .context("Failed to load the embedded templates")?;

  for (slug, template) in PAGES {
    let html = renderer
      .render_page(template, &tera::Context::new())
      .with_context(|| format!("Failed to render {template}"))?;
    let file_path = pages_dir.join(format!("{slug}.html"));
    fs::write(&file_path, html).with_context(|| {
      format!("Failed to write page at {}", file_path.display())
    })?;
  }

  println!("Pages rendered in {}", pages_dir.display());
  Ok(())
}
