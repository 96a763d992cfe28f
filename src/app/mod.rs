//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, ToastLevel, View};
pub use update::{Message, update};

use crate::config::PreviewStyle;
use crate::host::{Clipboard, SystemClipboard};

/// Main application struct that owns the collaborators and runs the event loop.
pub struct App {
    preview_style: PreviewStyle,
    stats_visible: bool,
    clipboard: Box<dyn Clipboard>,
}

impl App {
    /// Create a new application with the system clipboard.
    pub fn new() -> Self {
        Self {
            preview_style: PreviewStyle::default(),
            stats_visible: true,
            clipboard: Box::new(SystemClipboard::default()),
        }
    }

    /// Choose what submitting the editor opens.
    pub const fn with_preview_style(mut self, style: PreviewStyle) -> Self {
        self.preview_style = style;
        self
    }

    /// Set initial statistics panel visibility.
    pub const fn with_stats_visible(mut self, visible: bool) -> Self {
        self.stats_visible = visible;
        self
    }

    /// Replace the clipboard used by the copy actions.
    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
