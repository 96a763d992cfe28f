//! Terminal UI components.
//!
//! This module contains all rendering code:
//! - the editor with its line-number gutter and placeholder
//! - the inline and navigated previews with the statistics panel
//! - status/toast bars and the help overlay

mod overlays;
mod render;
mod status;

pub use render::{
    editor_visible_rows, preview_content_width, preview_visible_rows, render, split_preview_columns,
};

pub const PREVIEW_LEFT_PADDING: u16 = 1;
pub const PREVIEW_WIDTH_PERCENT: u16 = 75;
pub const STATS_WIDTH_PERCENT: u16 = 25;

#[cfg(test)]
mod tests;
