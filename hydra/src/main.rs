use std::{
  fs,
  io::{self, Write},
};

use color_eyre::eyre::{Context, Result};
use hydra::{
  cli::{Cli, Commands},
  config::Config,
  render::PageRenderer,
};
use log::{LevelFilter, info};

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  match &cli.command {
    Commands::ExportTemplates { output_dir, force } => {
      let written = Config::export_templates(output_dir, *force)
        .wrap_err_with(|| {
          format!("Failed to export templates to {}", output_dir.display())
        })?;
      info!("Exported {} template(s)", written.len());
    },

    Commands::Render {
      template,
      vars,
      output,
      content_only,
    } => {
      let renderer = build_renderer(&cli)?;

      let mut context = tera::Context::new();
      for (key, value) in vars {
        context.insert(key, value);
      }

      let html = if *content_only {
        renderer.render_markdown(template, &context)
      } else {
        renderer.render_page(template, &context)
      }
      .wrap_err_with(|| format!("Failed to render {template}"))?;

      if let Some(path) = output {
        fs::write(path, html).wrap_err_with(|| {
          format!("Failed to write output file: {}", path.display())
        })?;
        info!("Page written to {}", path.display());
      } else {
        io::stdout()
          .write_all(html.as_bytes())
          .wrap_err("Failed to write page to stdout")?;
      }
    },

    #[cfg(feature = "serve")]
    Commands::Serve { .. } => {
      let renderer = std::sync::Arc::new(build_renderer(&cli)?);
      let bind = renderer.config().bind.clone();

      tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .wrap_err("Failed to start the async runtime")?
        .block_on(hydra::serve::run(renderer, &bind))
        .wrap_err_with(|| format!("Server on {bind} failed"))?;
    },
  }

  Ok(())
}

/// Load the configuration and build the page renderer.
fn build_renderer(cli: &Cli) -> Result<PageRenderer> {
  let config = Config::load(cli).wrap_err("Failed to load configuration")?;
  PageRenderer::new(config).wrap_err("Failed to load templates")
}
