//! Document buffer and display mode state machine.
//!
//! The [`Controller`] owns the markdown being edited and whether it is
//! shown as an editor or as a preview. It knows nothing about terminals:
//! every operation runs to completion for one user action.
//!
//! ```text
//!            request_preview (non-blank)
//!   Editing ─────────────────────────────▶ Previewing
//!      ▲  ◀──────── back_to_editor ─────────  │
//!      └──────────── toggle_mode ─────────────┘
//! ```

mod stats;

pub use stats::Statistics;

use tracing::debug;

use crate::markdown::{ComrakConverter, ConvertError, MarkdownConverter};

/// How the buffer is currently displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Editing,
    Previewing,
}

impl Mode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Editing => Self::Previewing,
            Self::Previewing => Self::Editing,
        }
    }
}

/// A read-only preview bound to a snapshot of the buffer.
///
/// Later edits to the buffer do not affect an open preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    markdown: String,
}

impl Preview {
    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::of(&self.markdown)
    }

    /// Convert the snapshot to HTML.
    ///
    /// # Errors
    ///
    /// Propagates the converter's [`ConvertError`].
    pub fn to_html(&self, converter: &dyn MarkdownConverter) -> Result<String, ConvertError> {
        converter.convert(&self.markdown)
    }
}

/// Owns the document buffer and its display mode.
pub struct Controller {
    text: String,
    mode: Mode,
    converter: Box<dyn MarkdownConverter>,
}

impl Controller {
    /// Create an empty controller in [`Mode::Editing`] using comrak.
    pub fn new() -> Self {
        Self::with_converter(Box::new(ComrakConverter::default()))
    }

    /// Create an empty controller that converts with `converter`.
    pub fn with_converter(converter: Box<dyn MarkdownConverter>) -> Self {
        Self {
            text: String::new(),
            mode: Mode::Editing,
            converter,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub fn converter(&self) -> &dyn MarkdownConverter {
        self.converter.as_ref()
    }

    /// Whether the buffer holds anything besides whitespace.
    pub fn has_content(&self) -> bool {
        !self.text.chars().all(stats::is_separator)
    }

    /// Replace the buffer.
    ///
    /// Ignored while previewing; returns whether the text was applied.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        if self.mode == Mode::Previewing {
            debug!("set_text ignored while previewing");
            return false;
        }
        self.text = text.into();
        true
    }

    /// Empty the buffer. Ignored while previewing.
    pub fn clear(&mut self) -> bool {
        if self.mode == Mode::Previewing {
            debug!("clear ignored while previewing");
            return false;
        }
        self.text.clear();
        true
    }

    /// Flip between editing and previewing without checking the buffer.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        debug!(mode = ?self.mode, "mode toggled");
    }

    /// Switch to previewing if the buffer is not blank.
    ///
    /// Returns whether the mode is now [`Mode::Previewing`] because of
    /// this call.
    pub fn request_preview(&mut self) -> bool {
        if !self.has_content() {
            debug!("preview request ignored for blank buffer");
            return false;
        }
        self.mode = Mode::Previewing;
        debug!(bytes = self.text.len(), "preview requested");
        true
    }

    /// Snapshot the buffer into a navigated preview if it is not blank.
    ///
    /// The controller's own mode is unchanged.
    pub fn open_preview(&self) -> Option<Preview> {
        if !self.has_content() {
            debug!("preview navigation ignored for blank buffer");
            return None;
        }
        Some(Preview {
            markdown: self.text.clone(),
        })
    }

    pub fn back_to_editor(&mut self) {
        self.mode = Mode::Editing;
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::of(&self.text)
    }

    /// Convert the buffer to HTML.
    ///
    /// # Errors
    ///
    /// Propagates the converter's [`ConvertError`]; callers must not fall
    /// back to stale output.
    pub fn to_html(&self) -> Result<String, ConvertError> {
        self.converter.convert(&self.text)
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("bytes", &self.text.len())
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct FailingConverter;

    impl MarkdownConverter for FailingConverter {
        fn convert(&self, _markdown: &str) -> Result<String, ConvertError> {
            Err(ConvertError::Contract("boom".to_string()))
        }
    }

    fn controller_with(text: &str) -> Controller {
        let mut controller = Controller::new();
        controller.set_text(text);
        controller
    }

    #[test]
    fn test_new_controller_is_empty_and_editing() {
        let controller = Controller::new();
        assert_eq!(controller.text(), "");
        assert_eq!(controller.mode(), Mode::Editing);
        assert!(!controller.has_content());
    }

    #[test]
    fn test_request_preview_ignores_blank_text() {
        for text in ["", "   ", "\n\t "] {
            let mut controller = controller_with(text);
            assert!(!controller.request_preview());
            assert_eq!(controller.mode(), Mode::Editing, "text: {text:?}");
        }
    }

    #[test]
    fn test_debug_reports_byte_length() {
        let debug = format!("{:?}", controller_with("héllo"));
        assert!(debug.contains("bytes: 6"), "got: {debug}");
    }

    #[test]
    fn test_byte_order_mark_alone_is_blank() {
        let mut controller = controller_with("\u{feff}");
        assert!(!controller.request_preview());
        assert!(controller.open_preview().is_none());
        assert_eq!(controller.statistics().words, 0);
    }

    #[test]
    fn test_request_preview_with_text() {
        let mut controller = controller_with("hello");
        assert!(controller.request_preview());
        assert_eq!(controller.mode(), Mode::Previewing);
    }

    #[test]
    fn test_open_preview_snapshots_text() {
        let mut controller = controller_with("hello");
        let preview = controller.open_preview().unwrap();
        controller.set_text("changed");
        assert_eq!(preview.markdown(), "hello");
        assert_eq!(controller.mode(), Mode::Editing);
    }

    #[test]
    fn test_open_preview_blank_is_none() {
        assert!(controller_with("  ").open_preview().is_none());
    }

    #[test]
    fn test_toggle_bypasses_blank_check() {
        let mut controller = Controller::new();
        controller.toggle_mode();
        assert_eq!(controller.mode(), Mode::Previewing);
    }

    #[test]
    fn test_text_is_frozen_while_previewing() {
        let mut controller = controller_with("draft");
        controller.toggle_mode();
        assert!(!controller.set_text("overwritten"));
        assert!(!controller.clear());
        assert_eq!(controller.text(), "draft");

        controller.back_to_editor();
        assert!(controller.set_text("overwritten"));
        assert_eq!(controller.text(), "overwritten");
    }

    #[test]
    fn test_clear_resets_statistics() {
        let mut controller = controller_with("some words\nhere");
        assert!(controller.clear());
        assert_eq!(
            controller.statistics(),
            Statistics {
                characters: 0,
                words: 0,
                lines: 1
            }
        );
    }

    #[test]
    fn test_to_html_uses_converter() {
        let controller = controller_with("**bold**");
        assert!(controller.to_html().unwrap().contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_to_html_propagates_converter_failure() {
        let mut controller = Controller::with_converter(Box::new(FailingConverter));
        controller.set_text("anything");
        let err = controller.to_html().unwrap_err();
        assert!(matches!(err, ConvertError::Contract(_)));
    }

    #[test]
    fn test_preview_statistics_and_html() {
        let controller = controller_with("line1\nline2");
        let preview = controller.open_preview().unwrap();
        assert_eq!(preview.statistics().lines, 2);
        let html = preview.to_html(controller.converter()).unwrap();
        assert!(html.contains("<br />"));
    }

    proptest! {
        #[test]
        fn prop_toggle_twice_is_identity(start_previewing in any::<bool>(), text in "\\PC{0,32}") {
            let mut controller = controller_with(&text);
            if start_previewing {
                controller.toggle_mode();
            }
            let before = controller.mode();
            controller.toggle_mode();
            controller.toggle_mode();
            prop_assert_eq!(controller.mode(), before);
        }

        #[test]
        fn prop_request_preview_matches_blankness(text in "\\PC{0,32}") {
            let mut controller = controller_with(&text);
            let switched = controller.request_preview();
            prop_assert_eq!(switched, !text.chars().all(stats::is_separator));
            let expected = if switched { Mode::Previewing } else { Mode::Editing };
            prop_assert_eq!(controller.mode(), expected);
        }
    }
}
