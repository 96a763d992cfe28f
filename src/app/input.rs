use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::model::View;
use crate::app::{Message, Model};
use crate::editor::Direction;

/// Map a terminal event to at most one message for the current view.
pub(super) fn message_for_event(event: &Event, model: &Model) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(*key, model),
        Event::Paste(text) if model.view() == View::Editor && !model.help_visible => {
            Some(Message::InsertText(text.clone()))
        }
        Event::Resize(width, height) => Some(Message::Resize(*width, *height)),
        _ => None,
    }
}

pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
    if model.help_visible {
        return Some(Message::HideHelp);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q' | 'c') if ctrl => return Some(Message::Quit),
        KeyCode::F(1) => return Some(Message::ToggleHelp),
        _ => {}
    }

    match model.view() {
        View::Editor => editor_key(key, ctrl),
        View::InlinePreview => inline_preview_key(key, ctrl),
        View::NavigatedPreview => navigated_preview_key(key),
    }
}

fn editor_key(key: KeyEvent, ctrl: bool) -> Option<Message> {
    if ctrl {
        return match key.code {
            KeyCode::Char('s') => Some(Message::SubmitPreview),
            KeyCode::Char('k') => Some(Message::Clear),
            KeyCode::Char('p') => Some(Message::ToggleMode),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Enter => Some(Message::InsertNewline),
        KeyCode::Tab => Some(Message::InsertText("    ".to_string())),
        KeyCode::Backspace => Some(Message::DeleteBack),
        KeyCode::Delete => Some(Message::DeleteForward),
        KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
        KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
        KeyCode::Home => Some(Message::MoveHome),
        KeyCode::End => Some(Message::MoveEnd),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Message::InsertChar(c))
        }
        _ => None,
    }
}

fn inline_preview_key(key: KeyEvent, ctrl: bool) -> Option<Message> {
    if ctrl {
        return match key.code {
            KeyCode::Char('e') => Some(Message::Back),
            KeyCode::Char('p') => Some(Message::ToggleMode),
            KeyCode::Char('d') => Some(Message::PageDown),
            KeyCode::Char('u') => Some(Message::PageUp),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char('e') | KeyCode::Esc => Some(Message::Back),
        KeyCode::Char('f') => Some(Message::OpenFullPreview),
        _ => preview_key(key),
    }
}

fn navigated_preview_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Backspace | KeyCode::Esc => Some(Message::Back),
        KeyCode::Char('v') => Some(Message::PasteMarkdown),
        _ => preview_key(key),
    }
}

/// Bindings shared by both preview views.
fn preview_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char('c') => Some(Message::CopyMarkdown),
        KeyCode::Char('C') => Some(Message::CopyHtml),
        KeyCode::Char('j') | KeyCode::Down => Some(Message::ScrollDown(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(Message::ScrollUp(1)),
        KeyCode::Char(' ') | KeyCode::PageDown => Some(Message::PageDown),
        KeyCode::Char('b') | KeyCode::PageUp => Some(Message::PageUp),
        KeyCode::Char('g') | KeyCode::Home => Some(Message::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(Message::GoToBottom),
        KeyCode::Char('s') => Some(Message::ToggleStats),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        KeyCode::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
