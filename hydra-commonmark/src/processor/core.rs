//! Core implementation of the Markdown processor.
//!
//! The pipeline has three stages: fenced code blocks are rendered to raw HTML
//! first, the result is converted by comrak (which passes that HTML through
//! untouched), and the output is parsed into a [`Fragment`] whose headings get
//! their ids.
use std::sync::Arc;

use comrak::{Arena, format_html, options::Options, parse_document};
use log::{debug, error, trace, warn};

use super::types::{
  MarkdownOptions,
  MarkdownProcessor,
  ProcessError,
  ProcessResult,
  UnterminatedFence,
};
use crate::{
  html::{Fragment, annotate_heading_ids, build_navigation},
  syntax::{SyntaxConfig, SyntaxError, create_syntect_manager},
  types::MarkdownResult,
  utils::codeblock::{CodeBlock, FenceState, Step},
};

impl MarkdownProcessor {
  /// Create a new `MarkdownProcessor` with the given options.
  #[must_use]
  pub fn new(options: MarkdownOptions) -> Self {
    let syntax_manager = options.highlight_code.then(|| {
      let config = SyntaxConfig {
        fallback_to_plain: options.fallback_to_plain,
        ..Default::default()
      };
      Arc::new(create_syntect_manager(options.highlight_theme.clone(), config))
    });

    Self {
      options,
      syntax_manager,
    }
  }

  /// Access processor options.
  #[must_use]
  pub const fn options(&self) -> &MarkdownOptions {
    &self.options
  }

  /// Replace every fenced code block of a raw Markdown document with its
  /// rendered HTML.
  ///
  /// Lines outside of fences are kept as they are. The output is the list of
  /// kept lines and rendered blocks joined with `\n`, so a document without
  /// fences comes back unchanged.
  ///
  /// # Errors
  ///
  /// Returns [`ProcessError::Syntax`] if a block names a language without a
  /// grammar (and falling back to plain blocks is disabled), or
  /// [`ProcessError::UnterminatedFence`] if a block is never closed and the
  /// processor is configured to reject those.
  pub fn process_fenced_blocks(&self, raw: &str) -> ProcessResult<String> {
    let mut output: Vec<String> = Vec::new();
    let mut state = FenceState::new();

    for (idx, line) in raw.lines().enumerate() {
      let (next, step) = state.advance(line, idx + 1);
      state = next;

      match step {
        Step::Emit(line) => output.push(line.to_string()),
        Step::Open => debug!("Starting code block on line {}", idx + 1),
        Step::Capture => {},
        Step::Close(block) => {
          debug!(
            "Ending code block (language={:?}, lines={})",
            block.language,
            block.lines.len()
          );
          output.push(self.render_code_block(&block)?);
        },
      }
    }

    if let Some(block) = state.finish() {
      match self.options.unterminated_fence {
        UnterminatedFence::Error => {
          return Err(ProcessError::UnterminatedFence {
            line: block.opened_at,
          });
        },
        UnterminatedFence::Flush => {
          warn!(
            "Code block opened on line {} is never closed, rendering it as \
             plain code",
            block.opened_at
          );
          output.push(render_plain_block(&block));
        },
      }
    }

    Ok(output.join("\n"))
  }

  /// Render a single captured code block to HTML.
  ///
  /// # Errors
  ///
  /// Returns [`ProcessError::Syntax`] if highlighting fails.
  pub fn render_code_block(&self, block: &CodeBlock) -> ProcessResult<String> {
    let Some(manager) = self.syntax_manager.as_ref() else {
      return Ok(render_plain_block(block));
    };

    if block.is_plain() {
      return Ok(render_plain_block(block));
    }

    match manager.highlight_code(&block.code(), &block.language, None) {
      Ok(html) => {
        trace!("Highlighted {} block", block.language);
        Ok(html)
      },
      Err(SyntaxError::UnknownLanguage(language))
        if manager.config().fallback_to_plain =>
      {
        warn!("No grammar for language '{language}', rendering plain code");
        Ok(render_plain_block(block))
      },
      Err(e) => Err(e.into()),
    }
  }

  /// Convert Markdown to HTML using comrak.
  ///
  /// Raw HTML is passed through and comrak's own heading ids are disabled,
  /// ids are assigned by [`annotate_heading_ids`] afterwards.
  #[must_use]
  pub fn convert_to_html(&self, content: &str) -> String {
    let arena = Arena::new();
    let options = comrak_options();
    let root = parse_document(&arena, content, &options);

    let mut html_output = String::new();
    if let Err(e) = format_html(root, &options, &mut html_output) {
      error!("Failed to format Markdown as HTML: {e}");
    }
    html_output
  }

  /// Run the full pipeline up to the annotated fragment.
  ///
  /// # Errors
  ///
  /// Propagates errors of [`Self::process_fenced_blocks`].
  pub fn parse(&self, markdown: &str) -> ProcessResult<Fragment> {
    let processed = self.process_fenced_blocks(markdown)?;
    let html = self.convert_to_html(&processed);
    Ok(annotate_heading_ids(&Fragment::parse(&html)))
  }

  /// Render Markdown to HTML, building the navigation tree and extracting the
  /// title.
  ///
  /// # Errors
  ///
  /// Propagates errors of [`Self::process_fenced_blocks`].
  pub fn render(&self, markdown: &str) -> ProcessResult<MarkdownResult> {
    let fragment = self.parse(markdown)?;

    Ok(MarkdownResult {
      html:       fragment.to_html(),
      navigation: build_navigation(&fragment),
      title:      fragment.title(),
    })
  }
}

impl Default for MarkdownProcessor {
  fn default() -> Self {
    Self::new(MarkdownOptions::default())
  }
}

/// Build comrak options.
fn comrak_options() -> Options<'static> {
  let mut options = Options::default();
  options.render.r#unsafe = true;
  options.extension.header_id_prefix = None;
  options
}

/// Render a block without highlighting. The code is not escaped.
fn render_plain_block(block: &CodeBlock) -> String {
  format!("<pre><code>{}</code></pre>", block.code())
}
