//! Page rendering.
//!
//! A page is a Markdown template rendered in three steps: tera substitutes
//! the context, the Markdown pipeline turns the result into an annotated HTML
//! fragment, and the fragment is dropped into `page.html` together with a
//! navigation tree rendered by `page/navigation.html`.
use hydra_commonmark::{Fragment, MarkdownProcessor, build_navigation};
use log::debug;
use tera::Context;

use crate::{
  config::Config,
  error::Result,
  template::{NAVIGATION_TEMPLATE, PAGE_TEMPLATE, TemplateStore},
};

/// Built-in pages, as `(slug, template)` pairs.
pub const PAGES: [(&str, &str); 2] =
  [("frameworks", "frameworks.md"), ("colors", "colors.md")];

/// Renders Markdown templates to HTML pages.
///
/// Read-only once built, so one renderer can serve concurrent requests.
#[derive(Debug)]
pub struct PageRenderer {
  config:    Config,
  templates: TemplateStore,
  processor: MarkdownProcessor,
}

impl PageRenderer {
  /// Build the template store and the Markdown processor from `config`.
  ///
  /// # Errors
  ///
  /// Returns an error if the templates cannot be loaded.
  pub fn new(config: Config) -> Result<Self> {
    let templates = TemplateStore::new(config.template_dir.as_deref())?;
    let processor = MarkdownProcessor::new(config.markdown_options());

    Ok(Self {
      config,
      templates,
      processor,
    })
  }

  /// The configuration this renderer was built with.
  #[must_use]
  pub const fn config(&self) -> &Config {
    &self.config
  }

  /// The template store.
  #[must_use]
  pub const fn templates(&self) -> &TemplateStore {
    &self.templates
  }

  /// Render a Markdown template to an annotated HTML fragment.
  ///
  /// # Errors
  ///
  /// Returns [`HydraError::TemplateNotFound`](crate::error::HydraError) if
  /// the template does not exist, or any templating or Markdown error.
  pub fn parse_markdown(
    &self,
    template: &str,
    context: &Context,
  ) -> Result<Fragment> {
    let raw = self.templates.render(template, context)?;
    Ok(self.processor.parse(&raw)?)
  }

  /// Render a Markdown template to HTML.
  ///
  /// # Errors
  ///
  /// See [`Self::parse_markdown`].
  pub fn render_markdown(
    &self,
    template: &str,
    context: &Context,
  ) -> Result<String> {
    Ok(self.parse_markdown(template, context)?.to_html())
  }

  /// Render a Markdown template to a complete page with navigation.
  ///
  /// The page title is the first `h1` of the document, or the site title
  /// when there is none.
  ///
  /// # Errors
  ///
  /// See [`Self::parse_markdown`]. Rendering the page and navigation
  /// templates can fail as well.
  pub fn render_page(&self, template: &str, context: &Context) -> Result<String> {
    let fragment = self.parse_markdown(template, context)?;
    let navigation = build_navigation(&fragment);
    debug!(
      "Page {template} has {} top-level section(s)",
      navigation.len()
    );

    let mut navigation_context = Context::new();
    navigation_context.insert("navigation", &navigation);
    let navigation_html =
      self.templates.render(NAVIGATION_TEMPLATE, &navigation_context)?;

    let title = fragment
      .title()
      .unwrap_or_else(|| self.config.title.clone());

    let mut page_context = Context::new();
    page_context.insert("content", &fragment.to_html());
    page_context.insert("navigation", &navigation_html);
    page_context.insert("title", &title);

    self.templates.render(PAGE_TEMPLATE, &page_context)
  }
}
