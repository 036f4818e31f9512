//! Parsed HTML fragments.
use std::fmt;

use kuchikikiki::{NodeRef, parse_fragment};
use log::error;
use markup5ever::{QualName, local_name, ns};
use tendril::TendrilSink;

/// A parsed HTML fragment.
///
/// The source is parsed in the context of a `<body>` element, so nothing is
/// moved into an implied `<head>`: comments, `<script>`, `<style>` and
/// `<link>` stay where they appear. The parser wraps the top-level nodes in a
/// single `<html>` root, which is never serialized.
///
/// Nodes are reference counted, so a fragment is deliberately not `Clone`:
/// use [`Fragment::deep_copy`] to get an independent tree.
pub struct Fragment {
  document: NodeRef,
}

impl Fragment {
  /// Parse an HTML string into a fragment.
  #[must_use]
  pub fn parse(html: &str) -> Self {
    let context = QualName::new(None, ns!(html), local_name!("body"));
    Self {
      document: parse_fragment(context, Vec::new()).one(html),
    }
  }

  /// Parse a fresh copy of this fragment that shares no nodes with it.
  #[must_use]
  pub fn deep_copy(&self) -> Self {
    Self::parse(&self.to_html())
  }

  fn root(&self) -> Option<NodeRef> {
    self
      .document
      .children()
      .find(|node| node.as_element().is_some())
  }

  /// Top-level nodes of the fragment, in document order.
  #[must_use]
  pub fn children(&self) -> Vec<NodeRef> {
    self
      .root()
      .map(|root| root.children().collect())
      .unwrap_or_default()
  }

  /// Every `h1`-`h6` element of the fragment, at any depth, in document
  /// order.
  #[must_use]
  pub fn headings(&self) -> Vec<NodeRef> {
    self
      .document
      .select("h1, h2, h3, h4, h5, h6")
      .map(|headings| {
        headings
          .map(|heading| heading.as_node().clone())
          .collect()
      })
      .unwrap_or_default()
  }

  /// Text of the first top-level `h1`, if any.
  #[must_use]
  pub fn title(&self) -> Option<String> {
    self
      .children()
      .into_iter()
      .find(|node| heading_level(node) == Some(1))
      .map(|node| node.text_contents())
  }

  /// Serialize the fragment back to HTML.
  #[must_use]
  pub fn to_html(&self) -> String {
    let mut out = Vec::new();
    for child in self.children() {
      if let Err(e) = child.serialize(&mut out) {
        error!("Failed to serialize HTML node: {e}");
      }
    }
    String::from_utf8(out).unwrap_or_default()
  }

  /// Whether the fragment has no content at all.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.children().is_empty()
  }
}

impl fmt::Display for Fragment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.to_html())
  }
}

impl fmt::Debug for Fragment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Fragment").field(&self.to_html()).finish()
  }
}

/// Heading level (1-6) of an element node, `None` for anything else.
#[must_use]
pub fn heading_level(node: &NodeRef) -> Option<u8> {
  let element = node.as_element()?;
  match &*element.name.local {
    "h1" => Some(1),
    "h2" => Some(2),
    "h3" => Some(3),
    "h4" => Some(4),
    "h5" => Some(5),
    "h6" => Some(6),
    _ => None,
  }
}

/// Value of the `id` attribute of an element node.
#[must_use]
pub fn element_id(node: &NodeRef) -> Option<String> {
  node
    .as_element()
    .and_then(|element| element.attributes.borrow().get("id").map(ToString::to_string))
}
