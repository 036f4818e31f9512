//! Hydra renders Markdown templates to HTML pages with syntax highlighted code
//! blocks, heading anchors and a navigation tree.
//!
//! The binary is a thin layer over this library: build a [`config::Config`],
//! hand it to [`render::PageRenderer::new`] and render pages by template name.
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
#[cfg(feature = "serve")]
pub mod serve;
pub mod template;
