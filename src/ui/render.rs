use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::{Model, View};

use super::{
    PREVIEW_LEFT_PADDING, PREVIEW_WIDTH_PERCENT, STATS_WIDTH_PERCENT, overlays, status,
};

const PLACEHOLDER: &str = "Enter your Markdown content here...

Examples:
# Heading 1
## Heading 2

**Bold text**
*Italic text*

- Bullet list
- Item 2

1. Numbered list
2. Item 2

[Link](https://example.com)

`inline code`

```
code block
```

> Quote

| Table | Column 2 |
|-------|----------|
| Row 1 | Data     |";

pub fn split_preview_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(PREVIEW_WIDTH_PERCENT),
            Constraint::Percentage(STATS_WIDTH_PERCENT),
        ])
        .split(area)
}

/// Rows available to editor text (everything above the footer).
pub const fn editor_visible_rows(total_height: u16) -> usize {
    total_height.saturating_sub(1) as usize
}

/// Columns available to rendered markdown inside the preview frame.
pub fn preview_content_width(total_width: u16, stats_visible: bool) -> u16 {
    let doc_width = if stats_visible {
        split_preview_columns(Rect::new(0, 0, total_width, 1))[0].width
    } else {
        total_width
    };
    doc_width.saturating_sub(2 + PREVIEW_LEFT_PADDING).max(1)
}

/// Rows available to rendered markdown inside the preview frame.
pub const fn preview_visible_rows(total_height: u16) -> usize {
    total_height.saturating_sub(3) as usize
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let body = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let footer = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: area.height.min(1),
        ..area
    };

    match model.view() {
        View::Editor => render_editor(model, frame, body),
        View::InlinePreview | View::NavigatedPreview => render_preview(model, frame, body),
    }

    if model.active_toast().is_some() {
        status::render_toast_bar(model, frame, footer);
    } else {
        status::render_status_bar(model, frame, footer);
    }

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn render_editor(model: &Model, frame: &mut Frame, area: Rect) {
    let buf = &model.editor;
    let total_lines = buf.line_count();
    let gutter_width = line_number_width(total_lines);
    let gutter_style = Style::default().fg(Color::DarkGray);

    let start = model.editor_scroll;
    let end = (start + area.height as usize).min(total_lines);
    let (cursor_line, cursor_col) = buf.cursor_position();

    let mut content: Vec<Line> = Vec::new();
    for line_idx in start..end {
        let text = buf.line_at(line_idx).unwrap_or_default();
        let line_num = format!("{:>gutter_width$} ", line_idx + 1);
        let mut spans = vec![Span::styled(line_num, gutter_style)];
        if line_idx == cursor_line {
            spans.extend(cursor_spans(&text, cursor_col));
        } else {
            spans.push(Span::raw(text));
        }
        content.push(Line::from(spans));
    }

    if buf.is_empty()
        && let Some(first) = content.first_mut()
    {
        let style = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC);
        let pad = " ".repeat(gutter_width + 1);
        let mut lines = PLACEHOLDER.lines();
        if let Some(head) = lines.next() {
            first.spans.push(Span::styled(head, style));
        }
        for text in lines {
            content.push(Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled(text, style),
            ]));
        }
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content), area);
}

/// Split a line around the cursor so the cursor cell renders inverted.
fn cursor_spans(text: &str, col: usize) -> Vec<Span<'static>> {
    let split = text.char_indices().nth(col).map_or(text.len(), |(idx, _)| idx);
    let (before, rest) = text.split_at(split);
    let mut chars = rest.chars();
    let under = chars.next().map_or_else(|| " ".to_string(), |c| c.to_string());
    let after = chars.as_str();

    let mut spans = Vec::with_capacity(3);
    if !before.is_empty() {
        spans.push(Span::raw(before.to_string()));
    }
    spans.push(Span::styled(
        under,
        Style::default().bg(Color::White).fg(Color::Black),
    ));
    if !after.is_empty() {
        spans.push(Span::raw(after.to_string()));
    }
    spans
}

fn render_preview(model: &Model, frame: &mut Frame, area: Rect) {
    let (doc_area, stats_area) = if model.stats_visible {
        let chunks = split_preview_columns(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let title = if model.view() == View::NavigatedPreview {
        " Markdown Preview (snapshot) "
    } else {
        " Markdown Preview "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(doc_area);
    let content_area = Rect {
        x: inner.x + PREVIEW_LEFT_PADDING.min(inner.width),
        width: inner.width.saturating_sub(PREVIEW_LEFT_PADDING),
        ..inner
    };

    let markdown = model.active_markdown();
    let lines: Vec<Line> = if markdown.trim().is_empty() {
        vec![Line::styled(
            "Nothing to preview",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        model
            .preview_lines(content_area.width.max(1))
            .iter()
            .skip(model.preview_scroll)
            .take(content_area.height as usize)
            .cloned()
            .collect()
    };

    frame.render_widget(Clear, doc_area);
    frame.render_widget(block, doc_area);
    frame.render_widget(Paragraph::new(lines), content_area);

    if let Some(stats_area) = stats_area {
        render_statistics(model, frame, stats_area);
    }
}

fn render_statistics(model: &Model, frame: &mut Frame, area: Rect) {
    let stats = model.active_statistics();
    let label_style = Style::default().fg(Color::Indexed(245));
    let value_style = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (label, value) in [
        ("Characters", stats.characters),
        ("Words", stats.words),
        ("Lines", stats.lines),
    ] {
        lines.push(Line::styled(label, label_style));
        lines.push(Line::styled(value.to_string(), value_style));
        lines.push(Line::default());
    }

    let block = Block::default()
        .title(" Metadata ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1));
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Calculate the width needed for line numbers.
pub(super) fn line_number_width(total_lines: usize) -> usize {
    total_lines.max(1).ilog10() as usize + 1
}
