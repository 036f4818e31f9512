//! Navigation trees built from document headings.
use super::fragment::{Fragment, element_id, heading_level};
use crate::types::HeadingNode;

/// Build the navigation tree of a fragment.
///
/// Only top-level `h2`-`h6` elements are considered; `h1` is the document
/// title. Each heading is appended to the children of the last heading one
/// level up. When a level is skipped the heading attaches to the deepest
/// ancestor available, so an `h4` right after an `h2` becomes a child of that
/// `h2`.
///
/// Anchors are read from the `id` attribute, so the fragment must have gone
/// through [`annotate_heading_ids`](super::annotate_heading_ids) first.
#[must_use]
pub fn build_navigation(fragment: &Fragment) -> Vec<HeadingNode> {
  let mut navigation = Vec::new();

  for node in fragment.children() {
    let Some(level) = heading_level(&node).filter(|level| *level >= 2) else {
      continue;
    };

    let id = element_id(&node).unwrap_or_default();
    let heading = HeadingNode::new(node.text_contents(), format!("#{id}"));
    parent_children(&mut navigation, level).push(heading);
  }

  navigation
}

/// Find the list a heading of `level` should be appended to.
fn parent_children(
  navigation: &mut Vec<HeadingNode>,
  level: u8,
) -> &mut Vec<HeadingNode> {
  let mut children = navigation;

  for _ in 2..level {
    let Some(last) = children.len().checked_sub(1) else {
      break;
    };
    children = &mut children[last].children;
  }

  children
}
