//! Markdown processing module.
//!
//! - [`core`]: the processing pipeline (fenced blocks, comrak, heading ids)
//! - [`types`]: configuration, the processor struct and its error type
pub mod core;
pub mod types;

pub use types::{
  MarkdownOptions,
  MarkdownProcessor,
  ProcessError,
  ProcessResult,
  UnterminatedFence,
};

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{HeadingNode, syntax::SyntaxError};

  fn plain_processor() -> MarkdownProcessor {
    MarkdownProcessor::new(MarkdownOptions {
      highlight_code: false,
      ..Default::default()
    })
  }

  #[test]
  fn test_empty_document() {
    let processor = MarkdownProcessor::default();
    assert_eq!(processor.process_fenced_blocks("").unwrap_or_default(), "");
  }

  #[test]
  fn test_markdown_document_is_unchanged() {
    let processor = MarkdownProcessor::default();
    let document = "# Greetings, Starfighter!\n\nYou have been recruited by \
                    the Star League to defend the\nfrontier against Xur and \
                    the Ko-Dan Armada!";

    let processed = processor
      .process_fenced_blocks(document)
      .expect("documents without fences never fail");
    assert_eq!(processed, document);
  }

  #[test]
  fn test_code_block() {
    let processor = MarkdownProcessor::default();
    let document = "# Greetings, Starfighter!\n\n```\nrecruiter = 'Star \
                    League'\ndefend = 'the frontier'\nenemies = 'Xur and the \
                    Ko-Dan Armada'\n```";
    let expected = "# Greetings, Starfighter!\n\n<pre><code>recruiter = 'Star \
                    League'\ndefend = 'the frontier'\nenemies = 'Xur and the \
                    Ko-Dan Armada'</code></pre>";

    let processed = processor
      .process_fenced_blocks(document)
      .expect("plain blocks never fail");
    assert_eq!(processed, expected);
  }

  #[test]
  fn test_single_line_code_block() {
    let processor = MarkdownProcessor::default();
    let processed = processor
      .process_fenced_blocks("```\nA\n```")
      .expect("plain blocks never fail");
    assert_eq!(processed, "<pre><code>A</code></pre>");
  }

  #[test]
  fn test_empty_code_block() {
    let processor = MarkdownProcessor::default();
    let processed = processor
      .process_fenced_blocks("before\n```\n```\nafter")
      .expect("plain blocks never fail");
    assert_eq!(processed, "before\n<pre><code></code></pre>\nafter");
  }

  #[test]
  fn test_none_language_is_plain() {
    let processor = MarkdownProcessor::default();
    let processed = processor
      .process_fenced_blocks("```none\n<b>raw</b>\n```")
      .expect("plain blocks never fail");
    assert_eq!(processed, "<pre><code><b>raw</b></code></pre>");
  }

  #[test]
  fn test_indented_fence_is_deindented() {
    let processor = MarkdownProcessor::default();
    let processed = processor
      .process_fenced_blocks("-  ```\n   first\n     second\n   ```")
      .expect("plain blocks never fail");
    assert_eq!(processed, "<pre><code>first\n  second</code></pre>");
  }

  #[test]
  fn test_highlighted_block() {
    let processor = MarkdownProcessor::default();
    let document = "# Greetings, Starfighter!\n\n```python\nrecruiter = 'Star \
                    League'\ndefend = 'the frontier'\n```";

    let processed = processor
      .process_fenced_blocks(document)
      .expect("python has a grammar");
    assert!(processed.starts_with("# Greetings, Starfighter!\n\n<pre style="));
    assert!(processed.contains("recruiter"));
    assert!(processed.contains("<span style="));
    assert!(processed.trim_end().ends_with("</pre>"));
    assert!(!processed.contains("```"));
  }

  #[test]
  fn test_highlighting_disabled_renders_plain() {
    let processed = plain_processor()
      .process_fenced_blocks("```python\nx = 1\n```")
      .expect("plain blocks never fail");
    assert_eq!(processed, "<pre><code>x = 1</code></pre>");
  }

  #[test]
  fn test_unknown_language_fails() {
    let processor = MarkdownProcessor::default();
    let result = processor.process_fenced_blocks("```klingon\nQapla'\n```");
    assert!(matches!(
      result,
      Err(ProcessError::Syntax(SyntaxError::UnknownLanguage(ref lang)))
        if lang == "klingon"
    ));
  }

  #[test]
  fn test_unknown_language_falls_back_when_configured() {
    let processor = MarkdownProcessor::new(MarkdownOptions {
      fallback_to_plain: true,
      ..Default::default()
    });
    let processed = processor
      .process_fenced_blocks("```klingon\nQapla'\n```")
      .expect("unknown languages fall back to plain blocks");
    assert_eq!(processed, "<pre><code>Qapla'</code></pre>");
  }

  #[test]
  fn test_unterminated_fence_is_flushed() {
    let processor = MarkdownProcessor::default();
    let processed = processor
      .process_fenced_blocks("intro\n```rust\nlet x = 1;")
      .expect("unterminated fences are flushed by default");
    assert_eq!(processed, "intro\n<pre><code>let x = 1;</code></pre>");
  }

  #[test]
  fn test_unterminated_fence_errors_when_configured() {
    let processor = MarkdownProcessor::new(MarkdownOptions {
      unterminated_fence: UnterminatedFence::Error,
      ..Default::default()
    });
    let result = processor.process_fenced_blocks("intro\n\n```\ncode");
    assert!(matches!(
      result,
      Err(ProcessError::UnterminatedFence { line: 3 })
    ));
  }

  #[test]
  fn test_render_end_to_end() {
    let processor = MarkdownProcessor::default();
    let result = processor
      .render("# Title\n\n## Characters\n\n### The Partner\n\nGrig")
      .expect("plain markdown always renders");

    assert_eq!(
      result.html,
      "<h1 id=\"title\">Title</h1>\n<h2 \
       id=\"characters\">Characters</h2>\n<h3 id=\"the-partner\">The \
       Partner</h3>\n<p>Grig</p>\n"
    );
    assert_eq!(result.title.as_deref(), Some("Title"));
    assert_eq!(result.navigation, vec![
      HeadingNode::new("Characters", "#characters")
        .with_children(vec![HeadingNode::new("The Partner", "#the-partner")]),
    ]);
  }

  #[test]
  fn test_render_code_block_document() {
    let processor = MarkdownProcessor::default();
    let result = processor
      .render(
        "# Greetings, Starfighter!\n\n```\nrecruiter = 'Star League'\ndefend \
         = 'the frontier'\n```",
      )
      .expect("plain blocks never fail");

    assert_eq!(
      result.html,
      "<h1 id=\"greetings-starfighter\">Greetings, Starfighter!</h1>\n<pre><code>recruiter \
       = 'Star League'\ndefend = 'the frontier'</code></pre>\n"
    );
    assert!(result.navigation.is_empty());
  }

  #[test]
  fn test_render_keeps_leading_raw_html() {
    let processor = plain_processor();

    let result = processor
      .render("<!-- draft -->\n\n# Title\n\nBody")
      .expect("raw html renders");
    assert_eq!(
      result.html,
      "<!-- draft -->\n<h1 id=\"title\">Title</h1>\n<p>Body</p>\n"
    );
    assert_eq!(result.title.as_deref(), Some("Title"));

    let result = processor
      .render("<script>var x = 1;</script>\n\n# Title")
      .expect("raw html renders");
    assert_eq!(
      result.html,
      "<script>var x = 1;</script>\n<h1 id=\"title\">Title</h1>\n"
    );

    let result = processor
      .render("<link rel=\"stylesheet\" href=\"a.css\">\n\n## Sec")
      .expect("raw html renders");
    assert_eq!(
      result.html,
      "<link rel=\"stylesheet\" href=\"a.css\">\n<h2 id=\"sec\">Sec</h2>\n"
    );
    assert_eq!(result.navigation, vec![HeadingNode::new("Sec", "#sec")]);
  }

  #[test]
  fn test_comrak_assigns_no_heading_ids() {
    let html = plain_processor().convert_to_html("# Title\n\n## Sec");
    assert_eq!(html, "<h1>Title</h1>\n<h2>Sec</h2>\n");
  }

  #[test]
  fn test_render_empty_document() {
    let result = MarkdownProcessor::default()
      .render("")
      .expect("empty documents render");
    assert_eq!(result.html, "");
    assert!(result.navigation.is_empty());
    assert_eq!(result.title, None);
  }

  #[test]
  fn test_processor_options() {
    let processor = plain_processor();
    assert!(!processor.options().highlight_code);
    assert_eq!(processor.options().unterminated_fence, UnterminatedFence::Flush);
  }

  #[test]
  fn test_unterminated_fence_deserializes_lowercase() {
    let policy: UnterminatedFence =
      serde_json::from_str("\"error\"").expect("valid policy");
    assert_eq!(policy, UnterminatedFence::Error);
  }
}
