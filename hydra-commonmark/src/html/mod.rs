//! HTML post-processing of rendered Markdown.
//!
//! Both passes work on a parsed [`Fragment`]: [`annotate_heading_ids`] gives
//! every heading a slug id, and [`build_navigation`] turns the annotated
//! top-level headings into a tree.

mod anchors;
mod fragment;
mod navigation;

pub use anchors::annotate_heading_ids;
pub use fragment::{Fragment, element_id, heading_level};
pub use navigation::build_navigation;
