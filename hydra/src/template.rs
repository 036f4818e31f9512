//! Template store backed by tera.
//!
//! Embedded templates from `hydra-templates` are always available. Files in
//! the configured template directory are registered on top of them: a file
//! with the same relative name replaces the embedded template, any other file
//! adds a new one.
use std::{fs, path::Path};

use log::{debug, info};
use tera::{Context, Tera};
use walkdir::WalkDir;

use crate::error::{HydraError, Result};

/// Name of the page layout template.
pub const PAGE_TEMPLATE: &str = "page.html";

/// Name of the navigation template.
pub const NAVIGATION_TEMPLATE: &str = "page/navigation.html";

/// Collection of named templates.
#[derive(Debug)]
pub struct TemplateStore {
  tera: Tera,
}

impl TemplateStore {
  /// Create a store with the embedded templates, overridden by the templates
  /// found in `template_dir`.
  ///
  /// # Errors
  ///
  /// Returns an error if a template cannot be read or does not compile.
  pub fn new(template_dir: Option<&Path>) -> Result<Self> {
    let mut tera = Tera::default();
    tera.add_raw_templates(hydra_templates::all_templates())?;

    if let Some(dir) = template_dir {
      let overrides = read_template_dir(dir)?;
      info!(
        "Loaded {} template(s) from {}",
        overrides.len(),
        dir.display()
      );
      tera.add_raw_templates(overrides)?;
    }

    Ok(Self { tera })
  }

  /// Whether a template with this name exists.
  #[must_use]
  pub fn contains(&self, name: &str) -> bool {
    self.tera.get_template_names().any(|known| known == name)
  }

  /// Names of every registered template, sorted.
  #[must_use]
  pub fn names(&self) -> Vec<&str> {
    let mut names: Vec<&str> = self.tera.get_template_names().collect();
    names.sort_unstable();
    names
  }

  /// Render a template with the given context.
  ///
  /// # Errors
  ///
  /// Returns [`HydraError::TemplateNotFound`] if no template has this name,
  /// or [`HydraError::Template`] if rendering fails.
  pub fn render(&self, name: &str, context: &Context) -> Result<String> {
    if !self.contains(name) {
      return Err(HydraError::TemplateNotFound(name.to_string()));
    }

    debug!("Rendering template {name}");
    Ok(self.tera.render(name, context)?)
  }
}

/// Read every file below `dir`, keyed by its path relative to `dir` with `/`
/// separators.
fn read_template_dir(dir: &Path) -> Result<Vec<(String, String)>> {
  let mut templates = Vec::new();

  for entry in WalkDir::new(dir).sort_by_file_name() {
    let entry = entry.map_err(|e| {
      HydraError::Config(format!(
        "Failed to read template directory {}: {e}",
        dir.display()
      ))
    })?;

    if !entry.file_type().is_file() {
      continue;
    }

    let Ok(relative) = entry.path().strip_prefix(dir) else {
      continue;
    };
    let name = relative
      .components()
      .map(|component| component.as_os_str().to_string_lossy())
      .collect::<Vec<_>>()
      .join("/");

    debug!("Found template {name}");
    templates.push((name, fs::read_to_string(entry.path())?));
  }

  Ok(templates)
}
