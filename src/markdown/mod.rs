//! Markdown conversion and rendering.
//!
//! This module handles:
//! - Converting markdown to HTML with comrak ([`MarkdownConverter`])
//! - Rendering markdown to styled lines for the preview pane

mod html;
mod terminal;

pub use html::{ComrakConverter, ConvertError, HtmlOptions, MarkdownConverter};
pub use terminal::render_lines;
