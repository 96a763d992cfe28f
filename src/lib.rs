// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. markdown::MarkdownConverter)
    clippy::module_name_repetitions
)]

//! # mdpad
//!
//! A terminal markdown scratchpad with a live preview.
//!
//! mdpad lets you write markdown in a plain editor and then:
//! - Preview it inline or as a pushed snapshot
//! - See character, word and line counts
//! - Copy it to the clipboard as markdown or HTML
//! - Hand it to the calling shell on exit
//!
//! ## Architecture
//!
//! mdpad uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`controller`]: Document buffer, mode and statistics
//! - [`markdown`]: HTML conversion and terminal rendering
//! - [`editor`]: Rope-backed text entry
//! - [`host`]: Clipboard and paste collaborators
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved default flags
//! - [`logging`]: Tracing subscriber setup

pub mod app;
pub mod config;
pub mod controller;
pub mod editor;
pub mod host;
pub mod logging;
pub mod markdown;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::controller::{Controller, Mode, Statistics};
    pub use crate::markdown::{ComrakConverter, MarkdownConverter};
}
