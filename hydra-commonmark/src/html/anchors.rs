//! Heading anchor generation.
use super::fragment::Fragment;
use crate::utils::slugify;

/// Return a copy of `fragment` in which every `h1`-`h6` element, at any
/// depth, has its `id` set to the slug of its text content.
///
/// The input fragment is left untouched. Ids are not deduplicated: two
/// headings with the same label share the same id.
#[must_use]
pub fn annotate_heading_ids(fragment: &Fragment) -> Fragment {
  let annotated = fragment.deep_copy();

  for heading in annotated.headings() {
    let id = slugify(&heading.text_contents());
    if let Some(element) = heading.as_element() {
      element.attributes.borrow_mut().insert("id", id);
    }
  }

  annotated
}
