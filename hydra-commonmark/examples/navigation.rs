//! Render a Markdown file and print its navigation tree.
//!
//! ```sh
//! cargo run -p hydra-commonmark --example navigation -- README.md
//! ```
#![allow(clippy::print_stdout, reason = "Example output")]
use std::{env, fs};

use hydra_commonmark::{HeadingNode, MarkdownOptions, MarkdownProcessor};

fn print_tree(nodes: &[HeadingNode], depth: usize) {
  for node in nodes {
    println!("{}- {} ({})", "  ".repeat(depth), node.label, node.anchor_url);
    print_tree(&node.children, depth + 1);
  }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  let path = env::args().nth(1).ok_or("usage: navigation <FILE>")?;
  let markdown = fs::read_to_string(&path)?;

  let processor = MarkdownProcessor::new(MarkdownOptions {
    fallback_to_plain: true,
    ..Default::default()
  });
  let result = processor.render(&markdown)?;

  println!("Title: {}", result.title.as_deref().unwrap_or("<none>"));
  println!("HTML output length: {} characters", result.html.len());
  println!("Navigation:");
  print_tree(&result.navigation, 1);

  Ok(())
}
