use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel, View};

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let (status, bg) = match model.view() {
        View::Editor => {
            let (line, col) = model.editor.cursor_position();
            (
                format!(
                    " EDIT  Markdown Editor  Ln {}, Col {}  Ctrl+S:preview  Ctrl+P:toggle  Ctrl+K:clear  F1:help",
                    line + 1,
                    col + 1
                ),
                Color::Magenta,
            )
        }
        View::InlinePreview => (
            format!(
                " PREVIEW  [{}%]  e:editor  f:full preview  c:copy  C:copy html  ?:help",
                scroll_percent(model)
            ),
            Color::Blue,
        ),
        View::NavigatedPreview => (
            format!(
                " PREVIEW {}  [{}%]  Esc:back  c:copy  C:copy html  v:paste  ?:help",
                model.previews.len(),
                scroll_percent(model)
            ),
            Color::Blue,
        ),
    };

    let status_bar = Paragraph::new(status).style(Style::default().bg(bg).fg(Color::White));
    frame.render_widget(status_bar, area);
}

fn scroll_percent(model: &Model) -> usize {
    let max = model.max_preview_scroll();
    if max == 0 {
        100
    } else {
        model.preview_scroll.min(max) * 100 / max
    }
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
