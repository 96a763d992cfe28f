use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::{Model, View};

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).clamp(20, 64);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let mut lines: Vec<Line> = Vec::new();
    match model.view() {
        View::Editor => {
            lines.push(Line::styled("Editor", section_style));
            lines.push(Line::raw("  Ctrl+S              Preview markdown"));
            lines.push(Line::raw("  Ctrl+P              Toggle preview mode"));
            lines.push(Line::raw("  Ctrl+K              Clear"));
            lines.push(Line::raw("  Arrows/Home/End     Move cursor"));
        }
        View::InlinePreview => {
            lines.push(Line::styled("Preview", section_style));
            lines.push(Line::raw("  e / Esc / Ctrl+E    Back to editor"));
            lines.push(Line::raw("  Ctrl+P              Toggle preview mode"));
            lines.push(Line::raw("  f                   Full preview"));
            push_preview_help(&mut lines, section_style);
        }
        View::NavigatedPreview => {
            lines.push(Line::styled("Full preview", section_style));
            lines.push(Line::raw("  Esc / Backspace     Back"));
            lines.push(Line::raw("  v                   Paste markdown and exit"));
            push_preview_help(&mut lines, section_style);
        }
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled("General", section_style));
    lines.push(Line::raw("  F1                  Toggle help"));
    lines.push(Line::raw("  Ctrl+Q / Ctrl+C     Quit"));
    lines.push(Line::raw(""));
    lines.push(Line::styled("Press any key to close", dim_style));

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn push_preview_help(lines: &mut Vec<Line<'static>>, section_style: Style) {
    lines.push(Line::raw("  c                   Copy markdown"));
    lines.push(Line::raw("  C                   Copy HTML"));
    lines.push(Line::raw(""));
    lines.push(Line::styled("Scrolling", section_style));
    lines.push(Line::raw("  j/k or Up/Down      Scroll"));
    lines.push(Line::raw("  Space / b           Page down / up"));
    lines.push(Line::raw("  g / G               Top / bottom"));
    lines.push(Line::raw("  s                   Toggle statistics"));
    lines.push(Line::raw("  q                   Quit"));
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
