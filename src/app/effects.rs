use tracing::{error, info, warn};

use crate::app::model::View;
use crate::app::{App, Message, Model, ToastLevel};
use crate::host::Clipboard;

impl App {
    pub(super) fn handle_message_side_effects(&mut self, model: &mut Model, msg: &Message) {
        apply_side_effects(model, self.clipboard.as_mut(), msg);
    }
}

/// Run the clipboard effects of a message that `update` already applied.
///
/// Copies are fire-and-forget: the outcome is reported as a toast and
/// never changes the buffer.
pub(super) fn apply_side_effects(model: &mut Model, clipboard: &mut dyn Clipboard, msg: &Message) {
    if model.view() == View::Editor {
        return;
    }
    match msg {
        Message::CopyMarkdown => {
            let markdown = model.active_markdown().to_string();
            copy(model, clipboard, &markdown, "markdown");
        }
        Message::CopyHtml => match model.active_html() {
            Ok(html) => copy(model, clipboard, &html, "HTML"),
            Err(err) => {
                error!(%err, "HTML conversion failed");
                model.show_toast(ToastLevel::Error, format!("HTML conversion failed: {err}"));
            }
        },
        _ => {}
    }
}

fn copy(model: &mut Model, clipboard: &mut dyn Clipboard, text: &str, what: &str) {
    match clipboard.copy(text) {
        Ok(()) => {
            info!(what, bytes = text.len(), "copied to clipboard");
            model.show_toast(ToastLevel::Info, format!("Copied {what} to clipboard"));
        }
        Err(err) => {
            warn!(what, %err, "clipboard copy failed");
            model.show_toast(ToastLevel::Warning, format!("Copy failed: {err}"));
        }
    }
}
