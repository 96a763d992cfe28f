use tracing::debug;

use crate::app::model::View;
use crate::app::{Model, ToastLevel};
use crate::config::PreviewStyle;
use crate::editor::Direction;

/// All possible events and actions in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editor
    /// Insert a character at the cursor
    InsertChar(char),
    /// Insert text at the cursor (bracketed paste, Tab)
    InsertText(String),
    /// Split line at cursor (Enter)
    InsertNewline,
    /// Delete character before cursor (Backspace)
    DeleteBack,
    /// Delete character at cursor (Delete)
    DeleteForward,
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor to beginning of line (Home)
    MoveHome,
    /// Move cursor to end of line (End)
    MoveEnd,
    /// Empty the buffer
    Clear,

    // Mode
    /// Submit the editor: open a preview if the buffer is not blank
    SubmitPreview,
    /// Flip between editing and previewing without checks
    ToggleMode,
    /// Push a navigated preview from the inline preview
    OpenFullPreview,
    /// Leave the current preview
    Back,

    // Export
    /// Copy the shown markdown to the clipboard
    CopyMarkdown,
    /// Copy the shown markdown as HTML to the clipboard
    CopyHtml,
    /// Hand the shown markdown to the paste target and exit
    PasteMarkdown,

    // Preview navigation
    /// Scroll up by n lines
    ScrollUp(usize),
    /// Scroll down by n lines
    ScrollDown(usize),
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,
    /// Go to beginning of preview
    GoToTop,
    /// Go to end of preview
    GoToBottom,
    /// Show or hide the statistics panel
    ToggleStats,

    // Window
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the application
    Quit,
}

impl Message {
    const fn edits_text(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_)
                | Self::InsertText(_)
                | Self::InsertNewline
                | Self::DeleteBack
                | Self::DeleteForward
                | Self::MoveCursor(_)
                | Self::MoveHome
                | Self::MoveEnd
                | Self::Clear
        )
    }
}

/// Pure function that updates the model based on a message.
///
/// Clipboard effects happen afterwards in
/// [`App::handle_message_side_effects`](crate::app::App).
pub fn update(mut model: Model, msg: Message) -> Model {
    let view = model.view();
    if msg.edits_text() && view != View::Editor {
        debug!(?view, "edit ignored outside the editor");
        return model;
    }

    match msg {
        Message::InsertChar(ch) => {
            model.editor.insert_char(ch);
            model.sync_editor();
        }
        Message::InsertText(text) => {
            model.editor.insert_str(&text);
            model.sync_editor();
        }
        Message::InsertNewline => {
            model.editor.insert_char('\n');
            model.sync_editor();
        }
        Message::DeleteBack => {
            if model.editor.delete_back() {
                model.sync_editor();
            }
        }
        Message::DeleteForward => {
            if model.editor.delete_forward() {
                model.sync_editor();
            }
        }
        Message::MoveCursor(direction) => {
            model.editor.move_cursor(direction);
            model.editor_ensure_cursor_visible();
        }
        Message::MoveHome => model.editor.move_home(),
        Message::MoveEnd => model.editor.move_end(),
        Message::Clear => {
            if model.controller.clear() {
                model.editor.clear();
                model.editor_scroll = 0;
            }
        }

        Message::SubmitPreview => {
            if view == View::Editor {
                submit_preview(&mut model);
            }
        }
        Message::ToggleMode => {
            if view != View::NavigatedPreview {
                model.controller.toggle_mode();
                model.preview_scroll = 0;
            }
        }
        Message::OpenFullPreview => {
            if view == View::InlinePreview {
                push_preview(&mut model);
            }
        }
        Message::Back => match view {
            View::NavigatedPreview => {
                model.previews.pop();
                model.preview_scroll = 0;
            }
            View::InlinePreview => {
                model.controller.back_to_editor();
                model.preview_scroll = 0;
            }
            View::Editor => {}
        },

        Message::PasteMarkdown => {
            if view == View::NavigatedPreview {
                model.pending_paste = Some(model.active_markdown().to_string());
                model.should_quit = true;
            }
        }
        Message::CopyMarkdown | Message::CopyHtml => {}

        Message::ScrollUp(n) => {
            model.preview_scroll = model.preview_scroll.saturating_sub(n);
        }
        Message::ScrollDown(n) => {
            model.preview_scroll = (model.preview_scroll + n).min(model.max_preview_scroll());
        }
        Message::PageUp => {
            let page = model.preview_page();
            model.preview_scroll = model.preview_scroll.saturating_sub(page);
        }
        Message::PageDown => {
            let page = model.preview_page();
            model.preview_scroll = (model.preview_scroll + page).min(model.max_preview_scroll());
        }
        Message::GoToTop => model.preview_scroll = 0,
        Message::GoToBottom => model.preview_scroll = model.max_preview_scroll(),
        Message::ToggleStats => {
            model.stats_visible = !model.stats_visible;
            model.preview_scroll = model.preview_scroll.min(model.max_preview_scroll());
        }

        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,
        Message::Resize(width, height) => {
            model.terminal_size = (width, height);
            model.editor_ensure_cursor_visible();
            model.preview_scroll = model.preview_scroll.min(model.max_preview_scroll());
        }

        Message::Quit => model.should_quit = true,
    }

    model
}

fn submit_preview(model: &mut Model) {
    match model.preview_style {
        PreviewStyle::Inline => {
            if model.controller.request_preview() {
                model.preview_scroll = 0;
            } else {
                model.show_toast(ToastLevel::Info, "Nothing to preview");
            }
        }
        PreviewStyle::Navigated => push_preview(model),
    }
}

fn push_preview(model: &mut Model) {
    match model.controller.open_preview() {
        Some(preview) => {
            model.previews.push(preview);
            model.preview_scroll = 0;
        }
        None => model.show_toast(ToastLevel::Info, "Nothing to preview"),
    }
}
