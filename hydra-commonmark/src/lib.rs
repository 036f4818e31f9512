//! # Hydra CommonMark - Markdown pipeline for the Hydra documentation site
//!
//! Turns Markdown into HTML ready to be dropped into a page template. On top of
//! plain `CommonMark` rendering (delegated to `comrak`) it provides:
//!
//! - **Fenced code blocks** rendered either as plain `<pre><code>` blocks or
//!   highlighted with `syntect`
//! - **Heading anchors** generated from the heading text
//! - **Navigation trees** rebuilt from the flat sequence of headings
//!
//! ## Quick Start
//!
//! ```rust
//! use hydra_commonmark::{MarkdownOptions, MarkdownProcessor};
//!
//! let processor = MarkdownProcessor::new(MarkdownOptions::default());
//! let result = processor
//!   .render("# Hello World\n\n## Usage\n\nSome **bold** text.")
//!   .expect("plain markdown always renders");
//!
//! assert!(result.html.contains(r#"<h1 id="hello-world">"#));
//! assert_eq!(result.title.as_deref(), Some("Hello World"));
//! assert_eq!(result.navigation[0].anchor_url, "#usage");
//! ```

pub mod html;
pub mod processor;
pub mod syntax;
mod types;
pub mod utils;

pub use crate::{
  html::{Fragment, annotate_heading_ids, build_navigation},
  processor::{
    MarkdownOptions,
    MarkdownProcessor,
    ProcessError,
    ProcessResult,
    UnterminatedFence,
  },
  types::{HeadingNode, MarkdownResult},
  utils::slugify,
};
