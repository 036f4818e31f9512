//! Types for hydra-commonmark public API and internal use.
use serde::{Deserialize, Serialize};

/// A heading in the navigation tree of a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeadingNode {
  /// Heading text (tags stripped).
  pub label: String,

  /// Link to the heading anchor, `#` followed by the heading id.
  pub anchor_url: String,

  /// Headings nested exactly one level deeper, in document order.
  pub children: Vec<Self>,
}

impl HeadingNode {
  /// Create a leaf node.
  #[must_use]
  pub fn new(label: impl Into<String>, anchor_url: impl Into<String>) -> Self {
    Self {
      label:      label.into(),
      anchor_url: anchor_url.into(),
      children:   Vec::new(),
    }
  }

  /// Builder-style helper to attach children, mostly useful in tests.
  #[must_use]
  pub fn with_children(mut self, children: Vec<Self>) -> Self {
    self.children = children;
    self
  }
}

/// Result of Markdown processing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkdownResult {
  /// Rendered HTML output, headings carry their generated ids.
  pub html: String,

  /// Navigation tree built from the top-level `h2`-`h6` headings.
  pub navigation: Vec<HeadingNode>,

  /// Title of the document, if found (first top-level H1).
  pub title: Option<String>,
}
